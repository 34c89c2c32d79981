//! Match engine for inarow.
//!
//! A match is played by two worker threads, one per side, that take turns
//! on a shared [`Board`](inarow_board::Board) through a
//! [`TurnCoordinator`]. The [`MatchRunner`] owns the process-wide arena,
//! prepares each match, spawns the two sides as scoped threads, and
//! collects a [`MatchReport`] once both have exited.
//!
//! ```text
//! MatchRunner ── reset arena ── Board::new_in ── open log
//!      │
//!      └─ thread::scope ─┬─ side A: wait → propose → place → log → evaluate → hand off
//!                        └─ side B: wait → propose → place → log → evaluate → hand off
//! ```
//!
//! Moves are drawn from a [`MoveGenerator`]; [`RandomMover`] picks uniform
//! random cells from a ChaCha8 stream.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod coordinator;
pub mod error;
pub mod mover;
pub mod runner;

pub use config::{ConfigError, FirstMover, MatchConfig};
pub use coordinator::{Handoff, MatchState, TurnCoordinator, TurnEvent};
pub use error::MatchError;
pub use mover::{MoveGenerator, RandomMover};
pub use runner::{MatchReport, MatchRunner, SeriesReport};
