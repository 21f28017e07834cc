use std::fs;
use std::path::{Path, PathBuf};

use powerpoker_cli::run;
use powerpoker_engine::record::GameRecord;

fn run_cli(args: &[&str]) -> (i32, String, String) {
    let mut argv = vec!["powerpoker"];
    argv.extend_from_slice(args);
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(argv, &mut out, &mut err);
    (
        code,
        String::from_utf8_lossy(&out).into_owned(),
        String::from_utf8_lossy(&err).into_owned(),
    )
}

fn simulate(dir: &Path, games: &str, placer: &str) -> PathBuf {
    let path = dir.join("runs").join("games.jsonl");
    let (code, out, err) = run_cli(&[
        "sim",
        "--games",
        games,
        "--seed",
        "11",
        "--placer",
        placer,
        "--output",
        path.to_str().unwrap(),
    ]);
    assert_eq!(code, 0, "stderr: {}", err);
    assert!(out.contains(&format!("Simulated: {} games (placer={})", games, placer)));
    path
}

fn read_records(path: &Path) -> Vec<GameRecord> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect()
}

#[test]
fn sim_writes_one_record_per_game() {
    let dir = tempfile::tempdir().unwrap();
    let path = simulate(dir.path(), "4", "greedy");
    let records = read_records(&path);
    assert_eq!(records.len(), 4);
    for (i, rec) in records.iter().enumerate() {
        assert_eq!(rec.placements.len(), 25);
        assert_eq!(rec.seed, Some(11 + i as u64));
        assert_eq!(rec.placer.as_deref(), Some("greedy"));
        assert!(rec.game_id.ends_with(&format!("-{:06}", i + 1)));
        assert!(rec.ts.is_some());
    }
}

#[test]
fn sim_zero_games_invalid() {
    let (code, _, err) = run_cli(&["sim", "--games", "0"]);
    assert_eq!(code, 2);
    assert!(err.contains("games must be >= 1"));
}

#[test]
fn greedy_is_never_worse_than_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = simulate(dir.path(), "3", "greedy");
    assert!(read_records(&path).iter().all(|r| r.score > 0));
}

#[test]
fn verify_accepts_simulated_games() {
    let dir = tempfile::tempdir().unwrap();
    let path = simulate(dir.path(), "3", "random");
    let (code, out, err) = run_cli(&["verify", "--input", path.to_str().unwrap()]);
    assert_eq!(code, 0, "stderr: {}", err);
    assert!(out.contains("Verify: OK (games=3)"));
}

#[test]
fn verify_detects_tampered_score() {
    let dir = tempfile::tempdir().unwrap();
    let path = simulate(dir.path(), "2", "first");
    let mut records = read_records(&path);
    records[1].score += 10;
    let body: String = records
        .iter()
        .map(|r| serde_json::to_string(r).unwrap() + "\n")
        .collect();
    fs::write(&path, body).unwrap();

    let (code, out, err) = run_cli(&["verify", "--input", path.to_str().unwrap()]);
    assert_eq!(code, 2);
    assert!(out.contains("Verify: FAIL (games=2)"));
    assert!(err.contains("Game 2: Score mismatch"));
}

#[test]
fn verify_reads_compressed_records() {
    let dir = tempfile::tempdir().unwrap();
    let path = simulate(dir.path(), "2", "first");
    let packed = dir.path().join("games.jsonl.zst");
    let bytes = zstd::bulk::compress(&fs::read(&path).unwrap(), 3).unwrap();
    fs::write(&packed, bytes).unwrap();

    let (code, out, _) = run_cli(&["verify", "--input", packed.to_str().unwrap()]);
    assert_eq!(code, 0);
    assert!(out.contains("Verify: OK (games=2)"));
}

#[test]
fn stats_summarizes_records() {
    let dir = tempfile::tempdir().unwrap();
    let path = simulate(dir.path(), "5", "greedy");
    let records = read_records(&path);
    let best = records.iter().map(|r| r.score).max().unwrap();

    let (code, out, err) = run_cli(&["stats", "--input", path.to_str().unwrap()]);
    assert_eq!(code, 0, "stderr: {}", err);
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["games"], 5);
    assert_eq!(json["best_score"], best);
    assert_eq!(json["placers"]["greedy"], 5);
    assert!(json["hands"].as_object().unwrap().values().all(|v| v.as_u64().unwrap() > 0));
}

#[test]
fn stats_counts_corrupted_lines_and_walks_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = simulate(dir.path(), "2", "first");
    let mut content = fs::read_to_string(&path).unwrap();
    content.push_str("not json\n");
    fs::write(&path, content).unwrap();

    let (code, out, err) = run_cli(&["stats", "--input", dir.path().to_str().unwrap()]);
    assert_eq!(code, 0);
    assert!(err.contains("Skipped 1 corrupted record(s)"));
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["games"], 2);
}

#[test]
fn stats_single_file_with_only_garbage_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.jsonl");
    fs::write(&path, "not json\n").unwrap();
    let (code, _, err) = run_cli(&["stats", "--input", path.to_str().unwrap()]);
    assert_ne!(code, 0);
    assert!(err.contains("Invalid record"));
}
