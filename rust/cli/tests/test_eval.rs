use powerpoker_cli::run;

fn eval(cards: &[&str]) -> (i32, String, String) {
    let mut args = vec!["powerpoker", "eval"];
    args.extend_from_slice(cards);
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(args, &mut out, &mut err);
    (
        code,
        String::from_utf8_lossy(&out).into_owned(),
        String::from_utf8_lossy(&err).into_owned(),
    )
}

#[test]
fn eval_reports_hand_and_scoring_cards() {
    let (code, out, _) = eval(&["00c", "00d", "05h", "06s", "07c"]);
    assert_eq!(code, 0);
    assert!(out.contains("Hand: One Pair (10)"));
    assert!(out.contains("Scoring: 00c* 00d* 05h 06s 07c"));
}

#[test]
fn eval_high_straight_mixed_suits() {
    let (code, out, _) = eval(&["09c", "10d", "11h", "12s", "00c"]);
    assert_eq!(code, 0);
    assert!(out.contains("Hand: Straight (120)"));
}

#[test]
fn eval_four_of_a_kind() {
    let (_, out, _) = eval(&["00c", "00d", "00h", "00s", "05c"]);
    assert!(out.contains("Hand: Four of a Kind (160)"));
    assert!(out.contains("Scoring: 00c* 00d* 00h* 00s* 05c\n"));
}

#[test]
fn eval_nothing() {
    let (code, out, _) = eval(&["00c", "02d", "04h", "06s", "08c"]);
    assert_eq!(code, 0);
    assert!(out.contains("Hand: Nothing (0)"));
}

#[test]
fn eval_bad_code_fails() {
    let (code, _, err) = eval(&["00x", "02d", "04h", "06s", "08c"]);
    assert_eq!(code, 2);
    assert!(err.contains("Invalid card code"));
}

#[test]
fn eval_wrong_count_fails() {
    let (code, _, err) = eval(&["00c", "02d", "04h"]);
    assert_eq!(code, 2);
    assert!(err.contains("exactly 5 cards, got 3"));
}
