//! Card, board and hand formatters for terminal display.
//!
//! Suits use Unicode symbols (♥ ♦ ♣ ♠) where the terminal is known to
//! render them and fall back to the code letters otherwise.
//!
//! ## Example
//!
//! ```rust
//! use powerpoker_engine::cards::{Card, Rank, Suit};
//! use powerpoker_cli::formatters::format_card;
//!
//! let ace_spades = Card::new(Rank::Ace, Suit::Spades);
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "As");
//! ```

use powerpoker_engine::board::{Slot, LINE_SIZE};
use powerpoker_engine::cards::{Card, Suit};
use powerpoker_engine::hand::Evaluation;

use crate::terminal::TerminalView;

/// On Windows only modern terminals are trusted with Unicode; elsewhere it
/// is assumed.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: Suit) -> String {
    if supports_unicode() {
        match suit {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
        }
        .to_string()
    } else {
        suit.letter().to_string()
    }
}

/// Face and suit, e.g. `10♥` or `10h`.
pub fn format_card(card: &Card) -> String {
    format!("{}{}", card.rank.face(), format_suit(card.suit))
}

/// One board cell, five columns wide. Empty cells show their slot number;
/// cards from the last scoring line carry a `*`.
fn format_cell(slot: Slot, card: Option<Card>, marked: bool) -> String {
    match card {
        Some(c) => format!("{:>4}{}", format_card(&c), if marked { '*' } else { ' ' }),
        None => format!("[{:>2}] ", slot.index()),
    }
}

/// The 5×5 grid followed by the preview card, scores and status line.
pub fn format_view(view: &TerminalView) -> String {
    let mut s = String::new();
    for row in 0..LINE_SIZE {
        let cells: Vec<String> = (0..LINE_SIZE)
            .filter_map(|col| Slot::at(row, col).ok())
            .map(|slot| format_cell(slot, view.card_at(slot), view.is_marked(slot)))
            .collect();
        s.push_str(cells.join(" ").trim_end());
        s.push('\n');
    }
    let next = view
        .next()
        .map(|c| format_card(&c))
        .unwrap_or_else(|| "--".to_string());
    s.push_str(&format!(
        "Next: {}   Score: {}   High score: {}\n",
        next,
        view.score(),
        view.high_score()
    ));
    if !view.status().is_empty() {
        s.push_str(view.status());
        s.push('\n');
    }
    s
}

/// `Label (score)` for a scoring line, `Nothing (0)` otherwise.
pub fn format_hand(evaluation: &Evaluation) -> String {
    match evaluation.rank {
        Some(rank) => format!("{} ({})", rank.label(), rank.score()),
        None => "Nothing (0)".to_string(),
    }
}

/// Cards in evaluation order, contributing ones marked with `*`.
pub fn format_scored_cards(evaluation: &Evaluation) -> String {
    evaluation
        .cards
        .iter()
        .map(|c| {
            if c.contributes {
                format!("{}*", c.card.code())
            } else {
                c.card.code()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
