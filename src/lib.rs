//! # bingo-engine
//!
//! A deterministic bingo card engine for TV watch-party games.
//!
//! ## Design Principles
//!
//! 1. **Seed-Deterministic**: A seed string plus an options record fully
//!    determines a card. Same inputs, same card, bit for bit, on every
//!    platform; shared links and QR codes depend on it.
//!
//! 2. **Pure Core**: Composition and win evaluation are pure functions.
//!    The only state worth modeling is the mark set and the seed/options
//!    snapshot, and both are owned by the caller.
//!
//! 3. **Storage-Agnostic**: Persistence is a string key-value trait the
//!    host implements. The core never touches storage.
//!
//! ## Modules
//!
//! - `core`: RNG, options, card composition, marks, win evaluation
//! - `pool`: phrase pool and the stock catalog
//! - `leaderboard`: win tallies across rounds
//! - `session`: ties the core together into one play-through
//! - `store`: key-value persistence contract and helpers
//! - `interchange`: import/export documents

pub mod core;
pub mod interchange;
pub mod leaderboard;
pub mod pool;
pub mod session;
pub mod store;

// Re-export commonly used types
pub use crate::core::{
    evaluate, seed_from_string, Card, CardOptions, CardRng, Cell, GridSize, MarkSet, WinPattern,
};

pub use crate::interchange::{
    export_leaderboard, export_options, export_phrases, import_leaderboard, import_options,
    import_phrases, ImportError,
};

pub use crate::leaderboard::{Leaderboard, PlayerEntry};

pub use crate::pool::{PhrasePool, DEFAULT_PHRASES};

pub use crate::session::{BingoCall, GameSession};

pub use crate::store::{KeyValueStore, MemoryStore};
