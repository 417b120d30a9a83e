//! Win tallies across rounds.

mod board;

pub use board::{Leaderboard, PlayerEntry};
