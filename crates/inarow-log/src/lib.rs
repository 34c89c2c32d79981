//! Match logs for inarow.
//!
//! Every match writes one plain-text log named
//! `game_coordinates_<match-id>.txt`:
//!
//! ```text
//! size:3
//! Player 1: (1, 1)
//! Player 2: (2, 1)
//! Player 1: (1, 2)
//! Player 2: (2, 2)
//! Player 1: (1, 3)
//! Player 1 wins
//! ```
//!
//! The first line is the board size. Each move line names the player
//! (1 for side A, 2 for side B) and a 1-based `(row, col)`. The last line
//! is `Player <n> wins` or `Tie`.
//!
//! [`MatchLogWriter`] produces this format over any `Write` sink;
//! [`MatchRecord`] parses and validates it.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod reader;
pub mod writer;

pub use error::LogError;
pub use reader::MatchRecord;
pub use writer::{log_path, open_match_log, MatchLogWriter};
