//! Card option types: grid size, win pattern, per-card settings.
//!
//! Options are an immutable snapshot consumed per card generation.
//! Changing any field means regenerating the card and clearing marks;
//! [`crate::session::GameSession`] enforces that ordering.

use std::fmt;

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Supported grid dimensions.
///
/// Restricting sizes to an enum keeps the evaluator total: there is no
/// out-of-range dimension to defend against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GridSize {
    /// 3 x 3 grid.
    Three,
    /// 4 x 4 grid.
    Four,
    /// 5 x 5 grid.
    Five,
}

impl GridSize {
    /// All supported sizes, smallest first.
    pub const ALL: [GridSize; 3] = [GridSize::Three, GridSize::Four, GridSize::Five];

    /// Cells per side.
    #[must_use]
    pub const fn dimension(self) -> usize {
        match self {
            GridSize::Three => 3,
            GridSize::Four => 4,
            GridSize::Five => 5,
        }
    }

    /// Total cell count (`dimension` squared).
    #[must_use]
    pub const fn cells(self) -> usize {
        self.dimension() * self.dimension()
    }

    /// Index of the FREE cell when enabled: the structurally central cell
    /// for odd sizes, the middle-by-flooring cell for 4 x 4.
    #[must_use]
    pub const fn free_index(self) -> usize {
        self.cells() / 2
    }

    /// Look up a size by its side length.
    #[must_use]
    pub fn from_dimension(dimension: u64) -> Option<Self> {
        match dimension {
            3 => Some(GridSize::Three),
            4 => Some(GridSize::Four),
            5 => Some(GridSize::Five),
            _ => None,
        }
    }
}

impl Default for GridSize {
    fn default() -> Self {
        GridSize::Five
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{0}x{0}", self.dimension())
    }
}

// Persisted option records store the side length as a bare integer.
impl Serialize for GridSize {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.dimension() as u64)
    }
}

impl<'de> Deserialize<'de> for GridSize {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = u64::deserialize(deserializer)?;
        GridSize::from_dimension(raw)
            .ok_or_else(|| de::Error::custom(format!("unsupported grid size {raw}, expected 3, 4, or 5")))
    }
}

/// Which mark configurations count as a win.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WinPattern {
    /// Any single row or column fully covered.
    Line,
    /// Lines, plus either full diagonal.
    Diag,
    /// The four corner cells; any line or diagonal also counts.
    Corners,
    /// Every cell on the card.
    Blackout,
}

impl WinPattern {
    /// Human-readable description shown next to the card.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            WinPattern::Line => "Any row or column",
            WinPattern::Diag => "Diagonals count too",
            WinPattern::Corners => "Four corners",
            WinPattern::Blackout => "Blackout (whole card)",
        }
    }
}

impl Default for WinPattern {
    fn default() -> Self {
        WinPattern::Diag
    }
}

/// Per-card settings.
///
/// `seed` is the player-pinned seed; blank means "mint a random one on each
/// regeneration". The serialized shape is the persisted-defaults record
/// understood by earlier releases: `{"size":5,"free":true,"pattern":"diag","seed":""}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardOptions {
    /// Grid dimensions.
    pub size: GridSize,
    /// Whether the center FREE cell is enabled.
    pub free: bool,
    /// Active win pattern.
    pub pattern: WinPattern,
    /// Pinned seed text; blank for random.
    pub seed: String,
}

impl CardOptions {
    /// Index of the FREE cell, if enabled.
    #[must_use]
    pub fn free_index(&self) -> Option<usize> {
        self.free.then(|| self.size.free_index())
    }

    /// Number of phrases a full card needs.
    #[must_use]
    pub fn phrase_count(&self) -> usize {
        self.size.cells() - usize::from(self.free)
    }
}

impl Default for CardOptions {
    fn default() -> Self {
        Self {
            size: GridSize::default(),
            free: true,
            pattern: WinPattern::default(),
            seed: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_index_per_size() {
        assert_eq!(GridSize::Three.free_index(), 4);
        assert_eq!(GridSize::Four.free_index(), 8);
        assert_eq!(GridSize::Five.free_index(), 12);
    }

    #[test]
    fn test_defaults_match_persisted_record() {
        let options = CardOptions::default();
        let json = serde_json::to_value(&options).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"size": 5, "free": true, "pattern": "diag", "seed": ""})
        );
    }

    #[test]
    fn test_options_round_trip() {
        let options = CardOptions {
            size: GridSize::Four,
            free: false,
            pattern: WinPattern::Blackout,
            seed: "episode-12".to_string(),
        };
        let json = serde_json::to_string(&options).unwrap();
        let back: CardOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(back, options);
    }

    #[test]
    fn test_unsupported_size_rejected() {
        let err = serde_json::from_str::<CardOptions>(
            r#"{"size":6,"free":true,"pattern":"line","seed":""}"#,
        );
        assert!(err.is_err());
    }

    #[test]
    fn test_phrase_count() {
        for size in GridSize::ALL {
            let with_free = CardOptions {
                size,
                free: true,
                ..CardOptions::default()
            };
            let without = CardOptions {
                size,
                free: false,
                ..CardOptions::default()
            };
            assert_eq!(with_free.phrase_count(), size.cells() - 1);
            assert_eq!(without.phrase_count(), size.cells());
        }
    }
}
