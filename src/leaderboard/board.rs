//! Leaderboard state and operations.

use log::debug;
use serde::{Deserialize, Serialize};

/// One player's tally.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerEntry {
    /// Display name. Unique on the board under case-insensitive comparison.
    pub name: String,
    /// Wins recorded so far. Never goes negative.
    pub wins: u32,
}

/// Name-keyed tally of win counts, independent of any particular card.
///
/// Entries keep insertion order; [`Leaderboard::standings`] produces the
/// ranked view. Serializes as `{"players":[{"name":...,"wins":...}]}`, the
/// interchange shape earlier releases export.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leaderboard {
    players: Vec<PlayerEntry>,
}

impl Leaderboard {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from raw entries, enforcing the board invariants:
    /// names trimmed and unique case-insensitively (first occurrence wins),
    /// blank names dropped.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = PlayerEntry>,
    {
        let mut board = Self::new();
        for entry in entries {
            let name = entry.name.trim();
            if !name.is_empty() && board.position(name).is_none() {
                board.players.push(PlayerEntry {
                    name: name.to_string(),
                    wins: entry.wins,
                });
            }
        }
        board
    }

    /// The entries in insertion order.
    #[must_use]
    pub fn players(&self) -> &[PlayerEntry] {
        &self.players
    }

    /// Number of players on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Whether the board has no players.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        let lowered = name.to_lowercase();
        self.players
            .iter()
            .position(|p| p.name.to_lowercase() == lowered)
    }

    /// Whether a player is on the board (case-insensitive).
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.position(name.trim()).is_some()
    }

    /// Current win count for a player, if present.
    #[must_use]
    pub fn wins(&self, name: &str) -> Option<u32> {
        self.position(name.trim()).map(|i| self.players[i].wins)
    }

    /// Add a player with zero wins.
    ///
    /// Returns `false` without changing the board when the trimmed name is
    /// blank or already taken.
    pub fn add_player(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || self.position(name).is_some() {
            return false;
        }
        self.players.push(PlayerEntry {
            name: name.to_string(),
            wins: 0,
        });
        true
    }

    /// Remove a player. Returns whether anyone was removed.
    pub fn remove(&mut self, name: &str) -> bool {
        match self.position(name.trim()) {
            Some(i) => {
                self.players.remove(i);
                true
            }
            None => false,
        }
    }

    /// Credit a win: increment an existing entry or add a fresh one at a
    /// single win. Blank names are ignored.
    pub fn record_win(&mut self, name: &str) {
        let name = name.trim();
        if name.is_empty() {
            return;
        }
        match self.position(name) {
            Some(i) => self.players[i].wins += 1,
            None => self.players.push(PlayerEntry {
                name: name.to_string(),
                wins: 1,
            }),
        }
        debug!("recorded win for {}", name);
    }

    /// Nudge a player's tally by `delta`, clamping at zero.
    /// Returns whether the player was found.
    pub fn adjust_wins(&mut self, name: &str, delta: i32) -> bool {
        match self.position(name.trim()) {
            Some(i) => {
                let entry = &mut self.players[i];
                entry.wins = entry.wins.saturating_add_signed(delta);
                true
            }
            None => false,
        }
    }

    /// Set every tally back to zero, keeping the roster.
    pub fn reset_wins(&mut self) {
        for entry in &mut self.players {
            entry.wins = 0;
        }
    }

    /// Ranked view: wins descending, ties broken by name ascending.
    #[must_use]
    pub fn standings(&self) -> Vec<PlayerEntry> {
        let mut ranked = self.players.clone();
        ranked.sort_by(|a, b| b.wins.cmp(&a.wins).then_with(|| a.name.cmp(&b.name)));
        ranked
    }

    /// The first `n` of [`Leaderboard::standings`] (the sidebar view).
    #[must_use]
    pub fn top(&self, n: usize) -> Vec<PlayerEntry> {
        let mut ranked = self.standings();
        ranked.truncate(n);
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_is_case_insensitive() {
        let mut board = Leaderboard::new();
        assert!(board.add_player("Dana"));
        assert!(!board.add_player("dana"));
        assert!(!board.add_player("  DANA  "));
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn test_blank_names_rejected() {
        let mut board = Leaderboard::new();
        assert!(!board.add_player("   "));
        board.record_win("");
        assert!(board.is_empty());
    }

    #[test]
    fn test_record_win_inserts_or_increments() {
        let mut board = Leaderboard::new();
        board.record_win("Ray");
        assert_eq!(board.wins("Ray"), Some(1));

        board.record_win("ray");
        assert_eq!(board.wins("Ray"), Some(2));
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn test_adjust_clamps_at_zero() {
        let mut board = Leaderboard::new();
        board.add_player("Kim");
        assert!(board.adjust_wins("Kim", -5));
        assert_eq!(board.wins("Kim"), Some(0));

        assert!(board.adjust_wins("Kim", 3));
        assert_eq!(board.wins("Kim"), Some(3));

        assert!(!board.adjust_wins("nobody", 1));
    }

    #[test]
    fn test_standings_order() {
        let mut board = Leaderboard::new();
        board.record_win("Beth");
        board.record_win("Ann");
        board.record_win("Cory");
        board.record_win("Cory");

        let ranked = board.standings();
        let names: Vec<_> = ranked.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Cory", "Ann", "Beth"]);

        assert_eq!(board.top(2).len(), 2);
    }

    #[test]
    fn test_reset_keeps_roster() {
        let mut board = Leaderboard::new();
        board.record_win("Ann");
        board.record_win("Ann");
        board.reset_wins();

        assert_eq!(board.wins("Ann"), Some(0));
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn test_from_entries_dedupes() {
        let board = Leaderboard::from_entries([
            PlayerEntry {
                name: "Ann".to_string(),
                wins: 2,
            },
            PlayerEntry {
                name: "ann ".to_string(),
                wins: 9,
            },
            PlayerEntry {
                name: " ".to_string(),
                wins: 1,
            },
        ]);
        assert_eq!(board.len(), 1);
        assert_eq!(board.wins("Ann"), Some(2));
    }
}
