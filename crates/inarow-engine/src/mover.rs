//! Move generation.

use inarow_board::Board;
use inarow_core::{Coord, Mark};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of proposed moves for one side.
///
/// Called with the match lock held, on a board that has at least one
/// empty cell. A proposal may name an occupied cell: the coordinator asks
/// again until it gets an empty one. An off-board proposal ends the match
/// with [`MatchError::Placement`](crate::MatchError::Placement).
pub trait MoveGenerator: Send {
    /// Propose a cell for `mark` on `board`.
    fn propose(&mut self, board: &Board<'_>, mark: Mark) -> Coord;
}

/// Uniform random row and column, ignoring occupancy.
///
/// Collisions are left to the coordinator's retry, so the number of draws
/// per move grows as the board fills.
#[derive(Clone, Debug)]
pub struct RandomMover {
    rng: ChaCha8Rng,
}

impl RandomMover {
    /// Deterministic stream from `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl MoveGenerator for RandomMover {
    fn propose(&mut self, board: &Board<'_>, _mark: Mark) -> Coord {
        let size = board.size();
        Coord::new(self.rng.random_range(0..size), self.rng.random_range(0..size))
    }
}

impl<G: MoveGenerator + ?Sized> MoveGenerator for &mut G {
    fn propose(&mut self, board: &Board<'_>, mark: Mark) -> Coord {
        (**self).propose(board, mark)
    }
}
