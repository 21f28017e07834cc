//! # powerpoker-ai: unattended placement strategies
//!
//! Chooses a board slot for the card in hand, so that whole games can be
//! played without a human. Used by the `sim` command and by tests that need
//! many complete games.
//!
//! ## Core Components
//!
//! - [`Placer`] - Trait every strategy implements
//! - [`baseline`] - Reference strategies (`first`, `random`)
//! - [`greedy`] - Strategy that grabs the best immediate score
//! - [`create_placer`] - Factory that builds a strategy from its name
//!
//! ## Quick Start
//!
//! ```rust
//! use powerpoker_ai::{create_placer, Placer};
//! use powerpoker_engine::board::Board;
//!
//! let mut placer = create_placer("greedy", 42).expect("known strategy");
//! let board = Board::new();
//! let slot = placer.choose_slot(&board, "00c".parse().unwrap());
//! assert_eq!(slot.index(), 0);
//! ```

use powerpoker_engine::board::{Board, Slot};
use powerpoker_engine::cards::Card;

pub mod baseline;
pub mod greedy;

/// Names accepted by [`create_placer`].
pub const PLACER_NAMES: [&str; 3] = ["first", "random", "greedy"];

/// A strategy that decides where the current card goes.
///
/// # Required Methods
///
/// - [`choose_slot`](Placer::choose_slot) - Pick a free slot for `card`
/// - [`name`](Placer::name) - Return the strategy's identifier
///
/// # Example Implementation
///
/// ```rust
/// use powerpoker_ai::Placer;
/// use powerpoker_engine::board::{Board, Slot};
/// use powerpoker_engine::cards::Card;
///
/// struct LastFree;
///
/// impl Placer for LastFree {
///     fn choose_slot(&mut self, board: &Board, _card: Card) -> Slot {
///         board.free_slots().last().expect("board has room")
///     }
///
///     fn name(&self) -> &str {
///         "last"
///     }
/// }
/// ```
pub trait Placer: Send {
    /// Returns a free slot for `card`.
    ///
    /// # Panics
    ///
    /// Implementations may panic when `board` is already full; callers only
    /// ask while the game is still running.
    fn choose_slot(&mut self, board: &Board, card: Card) -> Slot;

    fn name(&self) -> &str;
}

/// Builds a strategy by name. `seed` feeds strategies that use randomness.
///
/// Returns `None` for names outside [`PLACER_NAMES`].
///
/// ```rust
/// use powerpoker_ai::create_placer;
///
/// assert_eq!(create_placer("random", 7).unwrap().name(), "random");
/// assert!(create_placer("oracle", 7).is_none());
/// ```
pub fn create_placer(name: &str, seed: u64) -> Option<Box<dyn Placer>> {
    match name {
        "first" => Some(Box::new(baseline::FirstFree)),
        "random" => Some(Box::new(baseline::RandomPlacer::new(seed))),
        "greedy" => Some(Box::new(greedy::GreedyPlacer::new())),
        _ => None,
    }
}
