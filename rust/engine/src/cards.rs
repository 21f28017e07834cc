use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::GameError;

/// Number of ranks in a suit.
pub const SUIT_SIZE: usize = 13;
/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 52;

/// Represents one of the four suits in a standard 52-card deck.
/// Declaration order matches the suit letters `c < d < h < s`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit (c)
    Clubs,
    /// Diamonds suit (d)
    Diamonds,
    /// Hearts suit (h)
    Hearts,
    /// Spades suit (s)
    Spades,
}

impl Suit {
    pub fn letter(self) -> char {
        match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        }
    }

    pub fn from_letter(c: char) -> Option<Suit> {
        match c.to_ascii_lowercase() {
            'c' => Some(Suit::Clubs),
            'd' => Some(Suit::Diamonds),
            'h' => Some(Suit::Hearts),
            's' => Some(Suit::Spades),
            _ => None,
        }
    }
}

/// Represents the rank of a playing card as a value in `0..=12`.
///
/// Rank 0 is the Ace. It sorts lowest and only plays high in the
/// 10-J-Q-K-A straight, which the evaluator recognizes explicitly.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Ace (0)
    Ace = 0,
    /// Rank 2 (1)
    Two,
    /// Rank 3 (2)
    Three,
    /// Rank 4 (3)
    Four,
    /// Rank 5 (4)
    Five,
    /// Rank 6 (5)
    Six,
    /// Rank 7 (6)
    Seven,
    /// Rank 8 (7)
    Eight,
    /// Rank 9 (8)
    Nine,
    /// Rank 10 (9)
    Ten,
    /// Jack (10)
    Jack,
    /// Queen (11)
    Queen,
    /// King (12)
    King,
}

impl Rank {
    pub fn from_u8(v: u8) -> Option<Rank> {
        all_ranks().get(v as usize).copied()
    }

    pub fn value(self) -> u8 {
        self as u8
    }

    /// Short face label used by terminal output (`A`, `2`..`10`, `J`, `Q`, `K`).
    pub fn face(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

/// Represents a single playing card with a rank and suit.
///
/// Field order makes the derived ordering `(rank, suit)`, which is the
/// order the hand evaluator sorts by.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Card {
    /// The rank of the card (Ace through King)
    pub rank: Rank,
    /// The suit of the card (Clubs, Diamonds, Hearts, or Spades)
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Two-digit rank followed by the suit letter, e.g. `09h`.
    pub fn code(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}{}", self.rank.value(), self.suit.letter())
    }
}

impl FromStr for Card {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || GameError::InvalidCardCode(s.to_string());
        let s_trim = s.trim();
        if s_trim.len() != 3 || !s_trim.is_ascii() {
            return Err(invalid());
        }
        let rank: u8 = s_trim[..2].parse().map_err(|_| invalid())?;
        let rank = Rank::from_u8(rank).ok_or_else(invalid)?;
        let suit = s_trim[2..]
            .chars()
            .next()
            .and_then(Suit::from_letter)
            .ok_or_else(invalid)?;
        Ok(Card { rank, suit })
    }
}

impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.to_string()
    }
}

impl TryFrom<String> for Card {
    type Error = GameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades]
}

pub fn all_ranks() -> [Rank; SUIT_SIZE] {
    [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ]
}

/// All 52 cards, suit-major: the thirteen clubs first, spades last.
pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(DECK_SIZE);
    for &s in &all_suits() {
        for &r in &all_ranks() {
            v.push(Card { rank: r, suit: s });
        }
    }
    v
}
