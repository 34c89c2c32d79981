//! Core types for the inarow match engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! vocabulary shared by every other crate in the workspace: marks, cells,
//! coordinates, match outcomes, and match identifiers.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod coord;
pub mod id;
pub mod mark;

pub use coord::Coord;
pub use id::MatchId;
pub use mark::{Cell, Mark, Outcome};

/// Smallest supported board edge length.
pub const MIN_BOARD_SIZE: usize = 3;

/// Largest supported board edge length.
pub const MAX_BOARD_SIZE: usize = 9;
