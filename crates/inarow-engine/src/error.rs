//! Engine-level error type.

use std::error::Error;
use std::fmt;

use inarow_arena::ArenaError;
use inarow_board::{BoardError, PlacementError};
use inarow_core::Mark;
use inarow_log::LogError;

use crate::config::ConfigError;

/// Errors that end a match or a series.
///
/// Every variant is fatal for the current match: the coordinator ends the
/// handoff, both sides exit, and the runner returns the error without
/// starting further matches.
#[derive(Debug)]
pub enum MatchError {
    /// The arena could not hold the board.
    Arena(ArenaError),
    /// The board could not be constructed.
    Board(BoardError),
    /// A move generator proposed an off-board cell.
    Placement(PlacementError),
    /// The match log could not be written.
    Log(LogError),
    /// The configuration is invalid.
    Config(ConfigError),
    /// A side's worker thread panicked.
    WorkerPanicked(Mark),
    /// Both sides exited without recording an outcome.
    Unfinished,
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Arena(e) => write!(f, "arena: {e}"),
            Self::Board(e) => write!(f, "board: {e}"),
            Self::Placement(e) => write!(f, "invalid placement: {e}"),
            Self::Log(e) => write!(f, "match log: {e}"),
            Self::Config(e) => write!(f, "config: {e}"),
            Self::WorkerPanicked(mark) => write!(f, "worker thread for {mark} panicked"),
            Self::Unfinished => write!(f, "match ended without an outcome"),
        }
    }
}

impl Error for MatchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Arena(e) => Some(e),
            Self::Board(e) => Some(e),
            Self::Placement(e) => Some(e),
            Self::Log(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::WorkerPanicked(_) | Self::Unfinished => None,
        }
    }
}

impl From<ArenaError> for MatchError {
    fn from(e: ArenaError) -> Self {
        Self::Arena(e)
    }
}

impl From<BoardError> for MatchError {
    fn from(e: BoardError) -> Self {
        match e {
            BoardError::Arena(e) => Self::Arena(e),
            other => Self::Board(other),
        }
    }
}

impl From<PlacementError> for MatchError {
    fn from(e: PlacementError) -> Self {
        Self::Placement(e)
    }
}

impl From<LogError> for MatchError {
    fn from(e: LogError) -> Self {
        Self::Log(e)
    }
}

impl From<ConfigError> for MatchError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_arena_errors_flatten() {
        let inner = ArenaError::CapacityExceeded {
            requested: 81,
            remaining: 0,
            capacity: 64,
        };
        let e = MatchError::from(BoardError::Arena(inner.clone()));
        assert!(matches!(e, MatchError::Arena(ref a) if *a == inner));
    }

    #[test]
    fn source_chain_reaches_inner_error() {
        let e = MatchError::from(ConfigError::NoMatches);
        assert_eq!(
            e.source().map(|s| s.to_string()),
            Some(ConfigError::NoMatches.to_string())
        );
        assert!(MatchError::WorkerPanicked(Mark::B).source().is_none());
    }
}
