use std::collections::HashSet;

use powerpoker_engine::cards::{full_deck, Card};
use powerpoker_engine::deck::Deck;

#[test]
fn fresh_deck_enumerates_suit_major() {
    let cards = full_deck();
    assert_eq!(cards.len(), 52);
    assert_eq!(cards[0].code(), "00c");
    assert_eq!(cards[12].code(), "12c");
    assert_eq!(cards[13].code(), "00d");
    assert_eq!(cards[51].code(), "12s");
}

#[test]
fn drawing_all_52_yields_every_card_once() {
    let mut deck = Deck::new_with_seed(42);
    let mut seen = HashSet::new();
    for i in 0..52 {
        let c = deck.draw();
        assert!(seen.insert(c), "card {} duplicated at draw {}", c, i);
    }
    assert_eq!(deck.remaining(), 0);
}

#[test]
fn same_seed_same_draws() {
    let mut d1 = Deck::new_with_seed(12345);
    let mut d2 = Deck::new_with_seed(12345);
    let a: Vec<Card> = (0..26).map(|_| d1.draw()).collect();
    let b: Vec<Card> = (0..26).map(|_| d2.draw()).collect();
    assert_eq!(a, b, "same seed must yield identical order");
}

#[test]
fn different_seeds_differ() {
    let mut d1 = Deck::new_with_seed(1);
    let mut d2 = Deck::new_with_seed(2);
    let a: Vec<Card> = (0..10).map(|_| d1.draw()).collect();
    let b: Vec<Card> = (0..10).map(|_| d2.draw()).collect();
    assert_ne!(
        a, b,
        "different seeds should produce different orders (high probability)"
    );
}

#[test]
fn reset_restores_all_cards() {
    let mut deck = Deck::new_with_seed(3);
    for _ in 0..20 {
        deck.draw();
    }
    deck.reset();
    assert_eq!(deck.remaining(), 52);
    assert_eq!(deck.undrawn(), full_deck().as_slice());
    assert!(deck.drawn().is_empty());
}

#[test]
fn first_draw_is_roughly_uniform() {
    // 5200 single draws from fresh decks; each card expected ~100 times.
    let mut counts = std::collections::HashMap::new();
    for seed in 0..5200u64 {
        let mut deck = Deck::new_with_seed(seed);
        *counts.entry(deck.draw()).or_insert(0u32) += 1;
    }
    assert_eq!(counts.len(), 52);
    assert!(counts.values().all(|&n| (40..=180).contains(&n)));
}
