//! Key-value persistence.
//!
//! Phrases, options, and the leaderboard live in whatever string key-value
//! surface the host has: browser local storage for the web UI, a dotfile
//! on desktop, [`MemoryStore`] in tests. The contract is a trait so the
//! core stays storage-free; hosts inject the backing.
//!
//! Load functions fall back to defaults when a key is missing. A malformed
//! stored payload is discarded wholesale (with a warning) rather than
//! partially merged; everything in storage is regenerable.

use log::warn;
use rustc_hash::FxHashMap;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::core::CardOptions;
use crate::leaderboard::Leaderboard;
use crate::pool::PhrasePool;

/// Storage keys carried over from earlier releases, so existing saved data
/// keeps loading.
pub mod keys {
    /// Phrase pool, as a bare JSON list of strings.
    pub const PHRASES: &str = "opl_bingo_phrases";
    /// Card options record.
    pub const OPTIONS: &str = "opl_bingo_options";
    /// Leaderboard document.
    pub const LEADERBOARD: &str = "opl_bingo_leaderboard";
}

/// String key-value storage, the shape browser storage offers.
pub trait KeyValueStore {
    /// Fetch the value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;
    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str);
    /// Delete `key`.
    fn remove(&mut self, key: &str);
    /// Drop everything (the "full reset" action).
    fn clear(&mut self);
}

/// In-memory store for tests and headless hosts.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: FxHashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Load the phrase pool, or the stock catalog when absent/malformed.
pub fn load_phrases(store: &dyn KeyValueStore) -> PhrasePool {
    load_or_default(store, keys::PHRASES)
}

/// Persist the phrase pool.
pub fn save_phrases(store: &mut dyn KeyValueStore, pool: &PhrasePool) {
    save(store, keys::PHRASES, pool);
}

/// Load the options record, or the defaults when absent/malformed.
pub fn load_options(store: &dyn KeyValueStore) -> CardOptions {
    load_or_default(store, keys::OPTIONS)
}

/// Persist the options record.
pub fn save_options(store: &mut dyn KeyValueStore, options: &CardOptions) {
    save(store, keys::OPTIONS, options);
}

/// Load the leaderboard, or an empty board when absent/malformed.
pub fn load_leaderboard(store: &dyn KeyValueStore) -> Leaderboard {
    load_or_default(store, keys::LEADERBOARD)
}

/// Persist the leaderboard.
pub fn save_leaderboard(store: &mut dyn KeyValueStore, board: &Leaderboard) {
    save(store, keys::LEADERBOARD, board);
}

fn load_or_default<T>(store: &dyn KeyValueStore, key: &str) -> T
where
    T: DeserializeOwned + Default,
{
    let Some(raw) = store.get(key) else {
        return T::default();
    };
    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(err) => {
            warn!("discarding malformed payload under {}: {}", key, err);
            T::default()
        }
    }
}

fn save<T: Serialize>(store: &mut dyn KeyValueStore, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(raw) => store.set(key, &raw),
        Err(err) => warn!("could not serialize payload for {}: {}", key, err),
    }
}
