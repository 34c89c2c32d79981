//! Board coordinates.

use std::fmt;

/// A zero-based `(row, col)` position on a board.
///
/// Internally every crate works with zero-based indices. The `Display`
/// impl renders the 1-based form `(row, col)` used by match logs and
/// human-facing output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    /// Zero-based row index.
    pub row: usize,
    /// Zero-based column index.
    pub col: usize,
}

impl Coord {
    /// Create a coordinate from zero-based indices.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Create a coordinate from 1-based indices, as read from a log line.
    ///
    /// Returns `None` if either index is zero.
    pub fn from_one_based(row: usize, col: usize) -> Option<Self> {
        Some(Self {
            row: row.checked_sub(1)?,
            col: col.checked_sub(1)?,
        })
    }

    /// The 1-based `(row, col)` pair.
    pub fn one_based(self) -> (usize, usize) {
        (self.row + 1, self.col + 1)
    }

    /// Whether the coordinate lies on a `size x size` board.
    pub fn within(self, size: usize) -> bool {
        self.row < size && self.col < size
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (row, col) = self.one_based();
        write!(f, "({row}, {col})")
    }
}
