//! Core engine types: RNG, options, cards, marks, win evaluation.
//!
//! Everything here is pure and storage-free. State worth keeping (the mark
//! set, the seed and options) is owned by the caller and passed in; derived
//! values (the card, the verdict) are returned fresh.

pub mod card;
pub mod marks;
pub mod options;
pub mod rng;
pub mod win;

pub use card::{Card, Cell};
pub use marks::MarkSet;
pub use options::{CardOptions, GridSize, WinPattern};
pub use rng::{seed_from_string, CardRng};
pub use win::evaluate;
