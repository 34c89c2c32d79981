//! Square N-in-a-row board and outcome evaluation.
//!
//! A [`Board`] is a `size x size` grid of [`Cell`](inarow_core::Cell)s whose
//! storage is borrowed from an [`Arena`](inarow_arena::Arena). The
//! [`outcome`] module scans a board for a winning run or a full-board draw.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod board;
pub mod error;
pub mod outcome;
mod render;

pub use board::Board;
pub use error::{BoardError, PlacementError};
pub use outcome::{assess, evaluate, is_draw, required_run, Verdict};
