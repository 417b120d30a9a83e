//! Import and export documents.
//!
//! The shapes here are the interchange surface shared with earlier
//! releases and other tooling:
//!
//! - phrases: a bare list of strings, or an object with a `phrases` list
//! - leaderboard: an object with a `players` list of `{name, wins}`
//! - options: the persisted-defaults record `{size, free, pattern, seed}`
//!
//! Imports are all-or-nothing: a document that doesn't parse or doesn't
//! match its shape is rejected with [`ImportError`] and the caller's state
//! stays untouched. The only coercions applied are the lenient ones the
//! previous release performed on leaderboard rows (scalar names to text,
//! non-numeric win counts to zero).

use log::debug;
use serde_json::Value;
use thiserror::Error;

use crate::core::CardOptions;
use crate::leaderboard::{Leaderboard, PlayerEntry};
use crate::pool::PhrasePool;

/// Failure to understand an imported document.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The document is not valid JSON at all.
    #[error("document is not valid JSON: {0}")]
    Syntax(#[from] serde_json::Error),
    /// Valid JSON, wrong shape.
    #[error("document does not match the expected shape: {0}")]
    Shape(&'static str),
}

/// Render the pool as a pretty `{"phrases": [...]}` document.
#[must_use]
pub fn export_phrases(pool: &PhrasePool) -> String {
    let doc = serde_json::json!({ "phrases": pool });
    format!("{doc:#}")
}

/// Parse a phrase document: either a bare list or an object carrying a
/// `phrases` list. Scalar entries are coerced to text; the resulting pool
/// is normalized (trimmed, blanks dropped, duplicates removed).
pub fn import_phrases(json: &str) -> Result<PhrasePool, ImportError> {
    let doc: Value = serde_json::from_str(json)?;
    let entries = match &doc {
        Value::Array(items) => items,
        Value::Object(map) => map
            .get("phrases")
            .and_then(Value::as_array)
            .ok_or(ImportError::Shape("expected a `phrases` list"))?,
        _ => {
            return Err(ImportError::Shape(
                "expected a list of phrases or an object with a `phrases` list",
            ))
        }
    };

    let mut phrases = Vec::with_capacity(entries.len());
    for entry in entries {
        phrases.push(scalar_to_text(entry).ok_or(ImportError::Shape(
            "phrase entries must be strings or numbers",
        ))?);
    }

    let pool = PhrasePool::new(phrases);
    debug!("imported {} phrases", pool.len());
    Ok(pool)
}

/// Render the leaderboard as a pretty `{"players": [...]}` document.
#[must_use]
pub fn export_leaderboard(board: &Leaderboard) -> String {
    let doc = serde_json::json!({ "players": board.players() });
    format!("{doc:#}")
}

/// Parse a leaderboard document.
///
/// Requires an object with a `players` list. Per row, `name` is coerced to
/// text from any scalar and `wins` falls back to zero when missing,
/// non-integer, or negative. Board invariants (trimmed, case-insensitively
/// unique names) are re-applied on the way in.
pub fn import_leaderboard(json: &str) -> Result<Leaderboard, ImportError> {
    let doc: Value = serde_json::from_str(json)?;
    let players = doc
        .get("players")
        .and_then(Value::as_array)
        .ok_or(ImportError::Shape("expected a `players` list"))?;

    let mut entries = Vec::with_capacity(players.len());
    for player in players {
        let name = player
            .get("name")
            .and_then(scalar_to_text)
            .ok_or(ImportError::Shape("player rows need a scalar `name`"))?;
        let wins = player
            .get("wins")
            .and_then(Value::as_i64)
            .unwrap_or(0)
            .max(0) as u32;
        entries.push(PlayerEntry { name, wins });
    }

    let board = Leaderboard::from_entries(entries);
    debug!("imported leaderboard with {} players", board.len());
    Ok(board)
}

/// Render the options record.
#[must_use]
pub fn export_options(options: &CardOptions) -> String {
    let doc = serde_json::json!(options);
    format!("{doc:#}")
}

/// Parse an options record, rejecting unknown sizes and patterns.
pub fn import_options(json: &str) -> Result<CardOptions, ImportError> {
    Ok(serde_json::from_str(json)?)
}

fn scalar_to_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}
