//! Card composition from a phrase pool.
//!
//! A card is a derived value: pool + options + seed stream in, ordered cell
//! sequence out. Cards are recomposed whenever the seed or options change
//! and never mutated in place.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::options::GridSize;
use super::rng::CardRng;

/// A single cell on a card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    /// The always-covered center cell.
    Free,
    /// A phrase drawn from the pool.
    Phrase(String),
}

impl Cell {
    /// Whether this is the FREE cell.
    #[must_use]
    pub fn is_free(&self) -> bool {
        matches!(self, Cell::Free)
    }

    /// The phrase text, if any.
    #[must_use]
    pub fn phrase(&self) -> Option<&str> {
        match self {
            Cell::Free => None,
            Cell::Phrase(text) => Some(text),
        }
    }
}

/// An ordered `size x size` arrangement of cells for one round.
///
/// Index `i` maps to row `i / size`, column `i % size`. Uses a persistent
/// vector so sessions snapshot in O(1).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    size: GridSize,
    cells: Vector<Cell>,
}

impl Card {
    /// Compose a card from `pool` using the draws from `rng`.
    ///
    /// Selects `size² - (free ? 1 : 0)` phrases: the pool is copied, run
    /// through a full Fisher-Yates pass (last index down to 1, swap target
    /// `floor(rng() * (i + 1))`), and the head of the permutation is taken.
    /// With `free` enabled the FREE cell is spliced in at
    /// [`GridSize::free_index`].
    ///
    /// A pool shorter than the required count yields a short card rather
    /// than an error; see [`Card::is_short`].
    #[must_use]
    pub fn compose(pool: &[String], size: GridSize, free: bool, rng: &mut CardRng) -> Self {
        let want = size.cells() - usize::from(free);

        let mut drawn = pool.to_vec();
        for i in (1..drawn.len()).rev() {
            let j = rng.next_index(i + 1);
            drawn.swap(i, j);
        }
        drawn.truncate(want);

        let mut cells: Vector<Cell> = drawn.into_iter().map(Cell::Phrase).collect();
        if free {
            // A short selection can't reach the center slot; the FREE cell
            // then lands at the end, after everything that was drawn.
            let slot = size.free_index().min(cells.len());
            cells.insert(slot, Cell::Free);
        }

        Self { size, cells }
    }

    /// Grid size this card was composed for.
    #[must_use]
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Number of cells actually present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the card holds no cells at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// True when the pool couldn't fill the grid.
    #[must_use]
    pub fn is_short(&self) -> bool {
        self.cells.len() < self.size.cells()
    }

    /// Cell at `index`, if present.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    /// Position of the FREE cell, if one was spliced in.
    #[must_use]
    pub fn free_index(&self) -> Option<usize> {
        self.cells.iter().position(Cell::is_free)
    }

    /// Iterate the cells in grid order.
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }
}
