//! # powerpoker-engine: Power Poker Game Core
//!
//! A single-player card-placement game. Cards are drawn one at a time and
//! placed on a 5×5 board; each completed row and column is scored as a poker
//! hand. This crate holds the game logic and the turn sequencing. Rendering
//! and persistence are supplied by the caller through the [`presenter`] and
//! [`store`] traits.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Rank, Suit, Card) and card codes
//! - [`deck`] - Uniform draw without replacement from a seeded ChaCha20 RNG
//! - [`board`] - The 25-slot grid and its rows and columns
//! - [`hand`] - Line classification into the nine scoring hands
//! - [`session`] - Per-game state record and turn phases
//! - [`animation`] - Flight and blink steps with their timing
//! - [`sequencer`] - One-turn-at-a-time controller tying it all together
//! - [`presenter`] / [`store`] - Contracts towards the display and high-score storage
//! - [`record`] - JSONL game records and score replay
//! - [`errors`] - Error types
//!
//! ## Quick Start
//!
//! ```rust
//! use powerpoker_engine::cards::Card;
//! use powerpoker_engine::hand::{evaluate_cards, HandRank};
//!
//! let cards: Vec<Card> = ["00c", "01c", "02c", "03c", "04c"]
//!     .iter()
//!     .map(|c| c.parse().unwrap())
//!     .collect();
//! let ev = evaluate_cards(&cards).unwrap();
//! assert_eq!(ev.rank, Some(HandRank::StraightFlush));
//! assert_eq!(ev.score(), 300);
//! ```
//!
//! ## Playing a Turn
//!
//! ```rust
//! use powerpoker_engine::animation::Timing;
//! use powerpoker_engine::board::Slot;
//! use powerpoker_engine::presenter::NullPresenter;
//! use powerpoker_engine::sequencer::TurnSequencer;
//! use powerpoker_engine::store::MemoryStore;
//!
//! # tokio_test_block_on(async {
//! let mut game = TurnSequencer::new(NullPresenter, MemoryStore::new(), Timing::instant());
//! game.start_game(42).await.unwrap();
//! let outcome = game.place(Slot::new(12).unwrap()).await;
//! assert!(!outcome.is_ignored());
//! assert_eq!(game.session().placements(), 1);
//! # });
//! # fn tokio_test_block_on<F: std::future::Future>(f: F) -> F::Output {
//! #     tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap().block_on(f)
//! # }
//! ```

pub mod animation;
pub mod board;
pub mod cards;
pub mod deck;
pub mod errors;
pub mod hand;
pub mod presenter;
pub mod record;
pub mod sequencer;
pub mod session;
pub mod store;
