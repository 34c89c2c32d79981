//! Error types for board construction and placement.

use std::error::Error;
use std::fmt;

use inarow_arena::ArenaError;
use inarow_core::{Coord, Mark};

/// Errors arising from board construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoardError {
    /// The edge length is outside `3..=9`.
    InvalidSize {
        /// The rejected size.
        size: usize,
    },
    /// The arena could not hold the cells.
    Arena(ArenaError),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { size } => write!(
                f,
                "board size {size} outside {}..={}",
                inarow_core::MIN_BOARD_SIZE,
                inarow_core::MAX_BOARD_SIZE
            ),
            Self::Arena(e) => write!(f, "arena: {e}"),
        }
    }
}

impl Error for BoardError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Arena(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ArenaError> for BoardError {
    fn from(e: ArenaError) -> Self {
        Self::Arena(e)
    }
}

/// A rejected placement. The board is unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlacementError {
    /// The coordinate is off the board.
    OutOfRange {
        /// The offending coordinate.
        coord: Coord,
        /// Board edge length.
        size: usize,
    },
    /// The cell already holds a mark.
    Occupied {
        /// The offending coordinate.
        coord: Coord,
        /// The mark already there.
        by: Mark,
    },
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { coord, size } => {
                write!(f, "coordinate {coord} is off the {size}x{size} board")
            }
            Self::Occupied { coord, by } => {
                write!(f, "cell {coord} is already taken by {}", by.symbol())
            }
        }
    }
}

impl Error for PlacementError {}
