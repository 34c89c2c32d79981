//! Test utilities for inarow development.
//!
//! Provides a [`ScriptedMover`] that replays fixed moves, a
//! [`board_from_rows`] builder for hand-drawn positions, and a
//! [`TempHistory`] directory fixture for tests that write match logs.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod fixtures;

pub use fixtures::{read_log, TempHistory};

use std::collections::VecDeque;
use std::error::Error;

use inarow_arena::Arena;
use inarow_board::Board;
use inarow_core::{Coord, Mark};
use inarow_engine::MoveGenerator;

/// Replays a fixed list of proposals, then falls back to the first open
/// cell in row-major order.
///
/// Proposals are handed to the coordinator unchanged, so a script can
/// include occupied or off-board cells to exercise retry and error paths.
#[derive(Clone, Debug, Default)]
pub struct ScriptedMover {
    script: VecDeque<Coord>,
    proposals: usize,
}

impl ScriptedMover {
    /// Script from zero-based `(row, col)` pairs.
    pub fn new(cells: &[(usize, usize)]) -> Self {
        Self {
            script: cells.iter().map(|&(r, c)| Coord::new(r, c)).collect(),
            proposals: 0,
        }
    }

    /// Script from 1-based `(row, col)` pairs, as they appear in logs.
    /// Pairs with a zero component are skipped.
    pub fn one_based(cells: &[(usize, usize)]) -> Self {
        Self {
            script: cells
                .iter()
                .filter_map(|&(r, c)| Coord::from_one_based(r, c))
                .collect(),
            proposals: 0,
        }
    }

    /// Total proposals made, including rejected ones.
    pub fn proposals(&self) -> usize {
        self.proposals
    }
}

impl MoveGenerator for ScriptedMover {
    fn propose(&mut self, board: &Board<'_>, _mark: Mark) -> Coord {
        self.proposals += 1;
        self.script
            .pop_front()
            .or_else(|| board.open_cells().next())
            .unwrap_or(Coord::new(0, 0))
    }
}

/// Build a board from text rows: `X` for A, `O` for B, anything else empty.
///
/// ```
/// use inarow_arena::Arena;
/// use inarow_core::{Cell, Coord};
/// use inarow_test_utils::board_from_rows;
///
/// let mut arena = Arena::with_capacity(64);
/// let board = board_from_rows(&mut arena, &["XO.", "...", "..X"]).unwrap();
/// assert_eq!(board.get(Coord::new(0, 1)), Some(Cell::B));
/// assert_eq!(board.occupied(), 3);
/// ```
pub fn board_from_rows<'a>(arena: &'a mut Arena, rows: &[&str]) -> Result<Board<'a>, Box<dyn Error>> {
    let mut board = Board::new_in(arena, rows.len())?;
    for (r, row) in rows.iter().enumerate() {
        for (c, ch) in row.chars().enumerate() {
            let mark = match ch {
                'X' => Mark::A,
                'O' => Mark::B,
                _ => continue,
            };
            board.place(Coord::new(r, c), mark)?;
        }
    }
    Ok(board)
}
