//! Win pattern evaluation.
//!
//! Pure geometry over cell indices: given the mark set, the grid size, the
//! active pattern, and the FREE index, decide whether the card has won.
//! Total over its domain, no side effects, idempotent.

use smallvec::SmallVec;

use super::marks::MarkSet;
use super::options::{GridSize, WinPattern};

/// Index list for one row, column, or diagonal. Never longer than a side.
type Line = SmallVec<[usize; 5]>;

fn row(size: usize, r: usize) -> Line {
    (0..size).map(|c| r * size + c).collect()
}

fn col(size: usize, c: usize) -> Line {
    (0..size).map(|r| r * size + c).collect()
}

fn main_diag(size: usize) -> Line {
    (0..size).map(|i| i * size + i).collect()
}

fn anti_diag(size: usize) -> Line {
    (0..size).map(|i| i * size + (size - 1 - i)).collect()
}

fn corners(size: usize) -> [usize; 4] {
    [0, size - 1, size * (size - 1), size * size - 1]
}

/// Decide whether `marks` satisfies `pattern` on a `size` grid.
///
/// `free_index` is the always-covered cell when the FREE center is enabled;
/// pass `None` when it is off.
///
/// Pattern semantics, including the deliberate overlaps:
///
/// - `Line`: any single row or column fully covered.
/// - `Diag`: the `Line` condition, or either full diagonal. Diagonals are
///   an addition to line wins, not a replacement.
/// - `Corners`: all four corner cells, or anything `Diag` accepts. Corners
///   is the easy mode: strictly more permissive than `Diag`.
/// - `Blackout`: every index except the FREE cell, which is already
///   implicitly covered.
#[must_use]
pub fn evaluate(
    marks: &MarkSet,
    size: GridSize,
    pattern: WinPattern,
    free_index: Option<usize>,
) -> bool {
    let n = size.dimension();
    let has = |i: usize| marks.contains(i) || free_index == Some(i);
    let covered = |line: Line| line.into_iter().all(has);

    let any_line =
        || (0..n).any(|r| covered(row(n, r))) || (0..n).any(|c| covered(col(n, c)));
    let any_diag = || covered(main_diag(n)) || covered(anti_diag(n));

    match pattern {
        WinPattern::Blackout => (0..size.cells())
            .filter(|&i| free_index != Some(i))
            .all(|i| has(i)),
        WinPattern::Line => any_line(),
        WinPattern::Diag => any_line() || any_diag(),
        WinPattern::Corners => {
            corners(n).into_iter().all(|i| has(i)) || any_line() || any_diag()
        }
    }
}
