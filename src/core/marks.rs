//! Player mark tracking.

use im::HashSet;

/// The set of cell indices a player has toggled as covered.
///
/// Holds bare indices in `[0, size²)`; the FREE index is implicitly covered
/// during evaluation and is never stored here. Cleared whenever the card
/// regenerates. Backed by a persistent set, so cloning a session is cheap.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MarkSet {
    marked: HashSet<usize>,
}

impl MarkSet {
    /// Create an empty mark set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip a cell's mark. Returns whether the cell is marked afterwards.
    pub fn toggle(&mut self, index: usize) -> bool {
        if self.marked.remove(&index).is_some() {
            false
        } else {
            self.marked.insert(index);
            true
        }
    }

    /// Whether a cell is marked.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.marked.contains(&index)
    }

    /// Remove every mark.
    pub fn clear(&mut self) {
        self.marked.clear();
    }

    /// Number of marked cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.marked.len()
    }

    /// Whether nothing is marked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.marked.is_empty()
    }

    /// Iterate the marked indices in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.marked.iter().copied()
    }
}

impl FromIterator<usize> for MarkSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self {
            marked: iter.into_iter().collect(),
        }
    }
}
