//! Match configuration, validation, and error types.
//!
//! [`MatchConfig`] is the input for constructing a
//! [`MatchRunner`](crate::MatchRunner). [`validate()`](MatchConfig::validate)
//! checks it once at startup; nothing is re-checked per match.

use std::error::Error;
use std::fmt;
use std::path::PathBuf;

use inarow_arena::ArenaConfig;
use inarow_core::{Mark, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use rand::Rng;

// ── FirstMover ────────────────────────────────────────────────────

/// Which side makes the first move of each match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FirstMover {
    /// Side A (Player 1) always opens.
    #[default]
    A,
    /// Side B (Player 2) always opens.
    B,
    /// A fair coin per match.
    Random,
}

impl FirstMover {
    /// The opening side for one match.
    pub fn resolve<R: Rng>(self, rng: &mut R) -> Mark {
        match self {
            Self::A => Mark::A,
            Self::B => Mark::B,
            Self::Random => {
                if rng.random_bool(0.5) {
                    Mark::A
                } else {
                    Mark::B
                }
            }
        }
    }
}

// ── ConfigError ───────────────────────────────────────────────────

/// Errors detected during [`MatchConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Board edge length outside the supported range.
    InvalidBoardSize {
        /// The rejected size.
        size: usize,
    },
    /// Zero matches requested.
    NoMatches,
    /// Arena alignment is zero or not a power of two.
    InvalidAlignment {
        /// The rejected alignment.
        alignment: usize,
    },
    /// The arena cannot hold even one board.
    ArenaTooSmall {
        /// Configured capacity in bytes.
        capacity: usize,
        /// Bytes one board needs.
        required: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBoardSize { size } => write!(
                f,
                "board size {size} outside {MIN_BOARD_SIZE}..={MAX_BOARD_SIZE}"
            ),
            Self::NoMatches => write!(f, "number of matches must be at least 1"),
            Self::InvalidAlignment { alignment } => {
                write!(f, "arena alignment {alignment} is not a power of two")
            }
            Self::ArenaTooSmall { capacity, required } => write!(
                f,
                "arena capacity {capacity} bytes cannot hold a board of {required} bytes"
            ),
        }
    }
}

impl Error for ConfigError {}

// ── MatchConfig ───────────────────────────────────────────────────

/// Complete configuration for a series of matches.
#[derive(Clone, Debug)]
pub struct MatchConfig {
    /// Board edge length, `3..=9`. Default: 3.
    pub board_size: usize,
    /// Number of matches to play back to back. Default: 1.
    pub matches: usize,
    /// Which side opens each match. Default: A.
    pub first: FirstMover,
    /// Seed for all randomness in the series. `None` draws from the
    /// thread RNG, so runs are not reproducible.
    pub seed: Option<u64>,
    /// Directory that receives `game_coordinates_<id>.txt` logs.
    /// Default: `./history`.
    pub history_dir: PathBuf,
    /// Backing arena. Reset before every match, never grown.
    pub arena: ArenaConfig,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            board_size: 3,
            matches: 1,
            first: FirstMover::A,
            seed: None,
            history_dir: PathBuf::from("history"),
            arena: ArenaConfig::default(),
        }
    }
}

impl MatchConfig {
    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(ConfigError::InvalidBoardSize {
                size: self.board_size,
            });
        }
        if self.matches == 0 {
            return Err(ConfigError::NoMatches);
        }
        if !self.arena.alignment.is_power_of_two() {
            return Err(ConfigError::InvalidAlignment {
                alignment: self.arena.alignment,
            });
        }
        // The board is the first allocation after a reset, at offset 0,
        // so alignment padding never applies to it.
        let required = self.board_size * self.board_size;
        if required > self.arena.capacity {
            return Err(ConfigError::ArenaTooSmall {
                capacity: self.arena.capacity,
                required,
            });
        }
        Ok(())
    }
}
