//! inarow: a two-thread N-in-a-row match simulator on a bump arena.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all inarow sub-crates.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use inarow::prelude::*;
//!
//! let config = MatchConfig {
//!     board_size: 4,
//!     matches: 10,
//!     seed: Some(7),
//!     ..MatchConfig::default()
//! };
//! let mut runner = MatchRunner::new(config).unwrap();
//! let series = runner.run_series().unwrap();
//! println!("{series}");
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `inarow-core` | Marks, cells, coordinates, outcomes, match ids |
//! | [`arena`] | `inarow-arena` | Fixed-capacity bump arena |
//! | [`board`] | `inarow-board` | Board grid, rendering, win/draw evaluation |
//! | [`log`] | `inarow-log` | Match log writer and parser |
//! | [`engine`] | `inarow-engine` | Turn coordinator, movers, match runner |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core vocabulary (`inarow-core`).
pub use inarow_core as types;

/// Bump arena (`inarow-arena`).
///
/// One [`arena::Arena`] backs every board of a run; it is reset between
/// matches.
pub use inarow_arena as arena;

/// Board and evaluation (`inarow-board`).
pub use inarow_board as board;

/// Match logs (`inarow-log`).
///
/// Write logs with [`log::MatchLogWriter`], validate them with
/// [`log::MatchRecord`].
pub use inarow_log as log;

/// Match engine (`inarow-engine`).
pub use inarow_engine as engine;

/// Common imports for typical inarow usage.
pub mod prelude {
    pub use inarow_arena::{Arena, ArenaConfig};
    pub use inarow_board::{assess, Board};
    pub use inarow_core::{Cell, Coord, Mark, MatchId, Outcome};
    pub use inarow_engine::{
        FirstMover, MatchConfig, MatchError, MatchReport, MatchRunner, MoveGenerator,
        RandomMover, SeriesReport, TurnEvent,
    };
    pub use inarow_log::MatchRecord;
}
