//! Phrase pool management.
//!
//! The pool is the caller-owned list of candidate phrases the composer
//! draws from. Pools normalize on construction: entries are trimmed, blanks
//! dropped, and duplicates removed (first occurrence wins), so every pool
//! satisfies the ordered-distinct contract by construction.

mod defaults;

pub use defaults::DEFAULT_PHRASES;

use serde::{Deserialize, Deserializer, Serialize};

/// An ordered pool of distinct phrases.
///
/// Serializes as a bare list of strings, the same payload earlier releases
/// persisted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PhrasePool {
    phrases: Vec<String>,
}

impl PhrasePool {
    /// Build a pool from raw entries, normalizing as described above.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut phrases: Vec<String> = Vec::new();
        for entry in entries {
            let phrase = entry.into().trim().to_string();
            if !phrase.is_empty() && !phrases.contains(&phrase) {
                phrases.push(phrase);
            }
        }
        Self { phrases }
    }

    /// Build a pool from editable text, one phrase per line.
    #[must_use]
    pub fn from_lines(text: &str) -> Self {
        Self::new(text.lines())
    }

    /// An empty pool.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            phrases: Vec::new(),
        }
    }

    /// The phrases in order.
    #[must_use]
    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    /// Render back to editable text, one phrase per line.
    #[must_use]
    pub fn to_lines(&self) -> String {
        self.phrases.join("\n")
    }

    /// Number of phrases.
    #[must_use]
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    /// Whether the pool holds no phrases.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Whether the pool can fill a card needing `count` phrases.
    #[must_use]
    pub fn can_fill(&self, count: usize) -> bool {
        self.phrases.len() >= count
    }

    /// Iterate the phrases in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.phrases.iter().map(String::as_str)
    }
}

/// The stock catalog.
impl Default for PhrasePool {
    fn default() -> Self {
        Self::new(DEFAULT_PHRASES)
    }
}

// Stored payloads re-normalize on the way in; hand-edited saves with stray
// whitespace or duplicates load as a valid pool.
impl<'de> Deserialize<'de> for PhrasePool {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = Vec::<String>::deserialize(deserializer)?;
        Ok(Self::new(entries))
    }
}
