use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::{Line, LineCard, Slot, LINE_SIZE};
use crate::cards::{Card, Rank};
use crate::errors::GameError;

/// Scoring hand categories, declared from strongest to weakest.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandRank {
    RoyalFlush,
    StraightFlush,
    FourOfAKind,
    Straight,
    FullHouse,
    ThreeOfAKind,
    Flush,
    TwoPair,
    OnePair,
}

impl HandRank {
    /// Every category in precedence order (highest score first).
    pub const ALL: [HandRank; 9] = [
        HandRank::RoyalFlush,
        HandRank::StraightFlush,
        HandRank::FourOfAKind,
        HandRank::Straight,
        HandRank::FullHouse,
        HandRank::ThreeOfAKind,
        HandRank::Flush,
        HandRank::TwoPair,
        HandRank::OnePair,
    ];

    pub fn score(self) -> u32 {
        match self {
            HandRank::RoyalFlush => 400,
            HandRank::StraightFlush => 300,
            HandRank::FourOfAKind => 160,
            HandRank::Straight => 120,
            HandRank::FullHouse => 100,
            HandRank::ThreeOfAKind => 60,
            HandRank::Flush => 50,
            HandRank::TwoPair => 30,
            HandRank::OnePair => 10,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HandRank::RoyalFlush => "Royal Flush",
            HandRank::StraightFlush => "Straight Flush",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::Straight => "Straight",
            HandRank::FullHouse => "Full House",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Flush => "Flush",
            HandRank::TwoPair => "Two Pair",
            HandRank::OnePair => "One Pair",
        }
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One evaluated card and whether it is part of the scoring pattern.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ScoredCard {
    pub card: Card,
    pub slot: Slot,
    pub contributes: bool,
}

/// Result of classifying a line. Cards are in evaluation order,
/// ascending by `(rank, suit)`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Evaluation {
    pub rank: Option<HandRank>,
    pub cards: Vec<ScoredCard>,
}

impl Evaluation {
    fn none() -> Self {
        Self {
            rank: None,
            cards: Vec::new(),
        }
    }

    pub fn score(&self) -> u32 {
        self.rank.map_or(0, HandRank::score)
    }

    /// Slots of the contributing cards, in evaluation order.
    pub fn highlighted_slots(&self) -> Vec<Slot> {
        self.cards
            .iter()
            .filter(|c| c.contributes)
            .map(|c| c.slot)
            .collect()
    }
}

/// Classifies a line. Incomplete lines yield no hand and no flags.
pub fn evaluate_line(line: &Line) -> Evaluation {
    match <&[LineCard; LINE_SIZE]>::try_from(line.cards()) {
        Ok(cards) => evaluate(cards),
        Err(_) => Evaluation::none(),
    }
}

/// Classifies five loose cards, assigning them slots 0..4 in input order.
pub fn evaluate_cards(cards: &[Card]) -> Result<Evaluation, GameError> {
    if cards.len() != LINE_SIZE {
        return Err(GameError::WrongCardCount { count: cards.len() });
    }
    let placed = cards
        .iter()
        .enumerate()
        .map(|(i, &card)| Ok(LineCard { card, slot: Slot::new(i)? }))
        .collect::<Result<Vec<_>, GameError>>()?;
    let line = <&[LineCard; LINE_SIZE]>::try_from(placed.as_slice())
        .map_err(|_| GameError::WrongCardCount { count: cards.len() })?;
    Ok(evaluate(line))
}

/// Classifies five placed cards into a scoring category.
///
/// Cards are sorted by `(rank, suit)` and walked pairwise. Runs of equal
/// ranks are recorded by their number of extra matches (1 for a pair, 2 for
/// trips, 3 for quads). A straight needs consecutive ranks, except that an
/// Ace in first position may be followed by a Ten, giving 10-J-Q-K-A.
pub fn evaluate(line: &[LineCard; LINE_SIZE]) -> Evaluation {
    let mut hand: Vec<ScoredCard> = line
        .iter()
        .map(|lc| ScoredCard {
            card: lc.card,
            slot: lc.slot,
            contributes: false,
        })
        .collect();
    hand.sort_by_key(|c| c.card);

    let mut flush = true;
    let mut straight = true;
    let mut same: Vec<u8> = Vec::with_capacity(2);
    let mut run = 0u8;

    for i in 1..hand.len() {
        let (prev, cur) = (hand[i - 1].card, hand[i].card);
        if cur.suit != prev.suit {
            flush = false;
        }
        let wraps_high = i == 1 && prev.rank == Rank::Ace && cur.rank == Rank::Ten;
        if cur.rank.value() != prev.rank.value() + 1 && !wraps_high {
            straight = false;
        }
        if cur.rank == prev.rank {
            run += 1;
            hand[i].contributes = true;
            hand[i - 1].contributes = true;
        } else if run > 0 {
            same.push(run);
            run = 0;
        }
    }
    if run > 0 {
        same.push(run);
    }
    same.sort_unstable();

    if straight || flush {
        for c in hand.iter_mut() {
            c.contributes = true;
        }
    }

    let ace_high = hand[0].card.rank == Rank::Ace && hand[1].card.rank == Rank::Ten;
    let rank = match (straight, flush, same.as_slice()) {
        (true, true, _) if ace_high => Some(HandRank::RoyalFlush),
        (true, true, _) => Some(HandRank::StraightFlush),
        (_, _, [3]) => Some(HandRank::FourOfAKind),
        (true, false, _) => Some(HandRank::Straight),
        (false, true, _) => Some(HandRank::Flush),
        (_, _, [1, 2]) => Some(HandRank::FullHouse),
        (_, _, [2]) => Some(HandRank::ThreeOfAKind),
        (_, _, [1, 1]) => Some(HandRank::TwoPair),
        (_, _, [1]) => Some(HandRank::OnePair),
        _ => None,
    };

    Evaluation { rank, cards: hand }
}
