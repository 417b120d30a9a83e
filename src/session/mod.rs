//! Game session orchestration.
//!
//! Ties the pure core together the way the party app's event loop does:
//! seed feeds the RNG, the RNG and pool feed the composer, toggles mutate
//! the mark set, and a bingo call runs the evaluator and credits the
//! leaderboard.

mod game;

pub use game::{BingoCall, GameSession};
