//! Benchmark fixtures for the inarow match engine.
//!
//! - [`BENCH_SIZES`]: board sizes covered by every benchmark group
//! - [`random_position`]: deterministic partially-filled board via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use inarow_arena::Arena;
use inarow_board::{Board, BoardError};
use inarow_core::{Coord, Mark};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Smallest, a middle, and the largest supported board.
pub const BENCH_SIZES: [usize; 3] = [3, 6, 9];

/// Carve a board from `arena` and place `moves` alternating marks on
/// distinct cells chosen by `seed`, A first.
///
/// The position may already contain a winning run; evaluation benchmarks
/// want the full scan either way.
pub fn random_position(
    arena: &mut Arena,
    size: usize,
    moves: usize,
    seed: u64,
) -> Result<Board<'_>, BoardError> {
    let mut board = Board::new_in(arena, size)?;
    let mut cells: Vec<Coord> = board.open_cells().collect();
    cells.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));

    let mut mark = Mark::A;
    for coord in cells.into_iter().take(moves) {
        // Cells are distinct and on the board.
        if board.place(coord, mark).is_ok() {
            mark = mark.other();
        }
    }
    Ok(board)
}
