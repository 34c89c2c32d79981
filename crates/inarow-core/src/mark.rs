//! Player marks, board cells, and match outcomes.

use std::fmt;

/// One of the two sides of a match.
///
/// Side A is "Player 1" and plays `X`; side B is "Player 2" and plays `O`.
/// The numbering is fixed per side and does not change when B is configured
/// to move first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Mark {
    /// Player 1, `X`.
    A,
    /// Player 2, `O`.
    B,
}

impl Mark {
    /// Both marks, in player order.
    pub const BOTH: [Mark; 2] = [Mark::A, Mark::B];

    /// The opposing mark.
    pub fn other(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }

    /// 1-based player number used in match logs.
    pub fn player(self) -> u8 {
        match self {
            Self::A => 1,
            Self::B => 2,
        }
    }

    /// Inverse of [`player`](Self::player).
    pub fn from_player(player: u8) -> Option<Self> {
        match player {
            1 => Some(Self::A),
            2 => Some(Self::B),
            _ => None,
        }
    }

    /// Board symbol for this mark.
    pub fn symbol(self) -> char {
        match self {
            Self::A => 'X',
            Self::B => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.player())
    }
}

/// Tri-state board cell.
///
/// The byte encoding is chosen so that zero-initialised memory reads as
/// [`Cell::Empty`]; boards carved out of a fresh arena block start empty
/// without an explicit fill.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Cell {
    /// No mark.
    #[default]
    Empty = 0,
    /// Holds [`Mark::A`].
    A = 1,
    /// Holds [`Mark::B`].
    B = 2,
}

impl Cell {
    /// Decode a cell from its storage byte.
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0 => Some(Self::Empty),
            1 => Some(Self::A),
            2 => Some(Self::B),
            _ => None,
        }
    }

    /// Storage byte for this cell.
    pub fn to_byte(self) -> u8 {
        self as u8
    }

    /// The mark occupying this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Self::Empty => None,
            Self::A => Some(Mark::A),
            Self::B => Some(Mark::B),
        }
    }

    /// Whether the cell is unoccupied.
    pub fn is_empty(self) -> bool {
        self == Self::Empty
    }

    /// Render symbol: `X`, `O`, or a space for an empty cell.
    pub fn symbol(self) -> char {
        self.mark().map_or(' ', Mark::symbol)
    }
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::A => Self::A,
            Mark::B => Self::B,
        }
    }
}

/// Terminal result of a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The given mark completed a winning run.
    Win(Mark),
    /// The board filled with no winning run.
    Draw,
}

impl Outcome {
    /// The winning mark, or `None` for a draw.
    pub fn winner(self) -> Option<Mark> {
        match self {
            Self::Win(mark) => Some(mark),
            Self::Draw => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Win(mark) => write!(f, "{mark} wins"),
            Self::Draw => write!(f, "Tie"),
        }
    }
}
