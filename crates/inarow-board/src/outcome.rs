//! Win and draw detection.
//!
//! The evaluator is a stateless full scan, re-run after every placement.
//! For each cell holding the mark it probes four directions (right, down,
//! down-right, down-left) for `required_run` consecutive cells of that
//! mark. Probing only "forward" directions is enough: every run has a
//! first cell from which one of the four probes covers it.

use inarow_core::{Cell, Coord, Mark, Outcome};

use crate::board::Board;

/// Result of evaluating one mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// The mark holds a winning run.
    Win,
    /// No winning run for this mark.
    NoResult,
}

/// Row/column steps: right, down, down-right, down-left.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Run length needed to win on a board of edge `size`.
///
/// Three on a 3x3 board, four on every larger board. The length does not
/// scale past four.
pub fn required_run(size: usize) -> usize {
    if size == 3 {
        3
    } else {
        4
    }
}

/// Whether `mark` holds a run of [`required_run`] cells in any row,
/// column, or diagonal.
pub fn evaluate(board: &Board<'_>, mark: Mark) -> Verdict {
    let size = board.size();
    let run = required_run(size);
    let target = Cell::from(mark);

    for row in 0..size {
        for col in 0..size {
            if board.get(Coord::new(row, col)) != Some(target) {
                continue;
            }
            for (dr, dc) in DIRECTIONS {
                let count = (0..run as isize)
                    .filter(|&k| {
                        step(row, col, dr * k, dc * k)
                            .and_then(|c| board.get(c))
                            .is_some_and(|cell| cell == target)
                    })
                    .count();
                if count == run {
                    return Verdict::Win;
                }
            }
        }
    }
    Verdict::NoResult
}

fn step(row: usize, col: usize, dr: isize, dc: isize) -> Option<Coord> {
    Some(Coord::new(
        row.checked_add_signed(dr)?,
        col.checked_add_signed(dc)?,
    ))
}

/// Whether the board is full with no winner for either mark.
pub fn is_draw(board: &Board<'_>) -> bool {
    board.is_full() && Mark::BOTH.iter().all(|&m| evaluate(board, m) == Verdict::NoResult)
}

/// Terminal outcome of the current position, if any.
///
/// Checks A, then B, then the draw. Only one mark can ever hold a run in
/// a legally played match, since play stops at the first win.
pub fn assess(board: &Board<'_>) -> Option<Outcome> {
    for mark in Mark::BOTH {
        if evaluate(board, mark) == Verdict::Win {
            return Some(Outcome::Win(mark));
        }
    }
    is_draw(board).then_some(Outcome::Draw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use inarow_arena::Arena;

    fn board_with<'a>(arena: &'a mut Arena, size: usize, cells: &[(usize, usize, Mark)]) -> Board<'a> {
        let mut board = Board::new_in(arena, size).unwrap();
        for &(r, c, m) in cells {
            board.place(Coord::new(r, c), m).unwrap();
        }
        board
    }

    #[test]
    fn run_length_rule() {
        assert_eq!(required_run(3), 3);
        for size in 4..=9 {
            assert_eq!(required_run(size), 4);
        }
    }

    #[test]
    fn empty_board_has_no_result() {
        let mut arena = Arena::with_capacity(128);
        let board = board_with(&mut arena, 5, &[]);
        assert_eq!(evaluate(&board, Mark::A), Verdict::NoResult);
        assert_eq!(assess(&board), None);
        assert!(!is_draw(&board));
    }

    #[test]
    fn horizontal_win_on_three() {
        let mut arena = Arena::with_capacity(128);
        let board = board_with(
            &mut arena,
            3,
            &[
                (0, 0, Mark::A),
                (1, 0, Mark::B),
                (0, 1, Mark::A),
                (1, 1, Mark::B),
                (0, 2, Mark::A),
            ],
        );
        assert_eq!(evaluate(&board, Mark::A), Verdict::Win);
        assert_eq!(evaluate(&board, Mark::B), Verdict::NoResult);
        assert_eq!(assess(&board), Some(Outcome::Win(Mark::A)));
    }

    #[test]
    fn vertical_win() {
        let mut arena = Arena::with_capacity(128);
        let cells: Vec<_> = (2..6).map(|r| (r, 4, Mark::B)).collect();
        let board = board_with(&mut arena, 7, &cells);
        assert_eq!(evaluate(&board, Mark::B), Verdict::Win);
    }

    #[test]
    fn diagonal_win() {
        let mut arena = Arena::with_capacity(128);
        let cells: Vec<_> = (0..4).map(|k| (k + 1, k + 2, Mark::A)).collect();
        let board = board_with(&mut arena, 6, &cells);
        assert_eq!(evaluate(&board, Mark::A), Verdict::Win);
    }

    #[test]
    fn anti_diagonal_win_at_right_edge() {
        let mut arena = Arena::with_capacity(128);
        let cells: Vec<_> = (0..4).map(|k| (k, 8 - k, Mark::B)).collect();
        let board = board_with(&mut arena, 9, &cells);
        assert_eq!(evaluate(&board, Mark::B), Verdict::Win);
    }

    #[test]
    fn three_in_a_row_does_not_win_on_four() {
        let mut arena = Arena::with_capacity(128);
        let board = board_with(
            &mut arena,
            4,
            &[(0, 0, Mark::A), (0, 1, Mark::A), (0, 2, Mark::A)],
        );
        assert_eq!(evaluate(&board, Mark::A), Verdict::NoResult);
    }

    #[test]
    fn four_wins_on_nine() {
        let mut arena = Arena::with_capacity(128);
        let cells: Vec<_> = (3..7).map(|c| (8, c, Mark::A)).collect();
        let board = board_with(&mut arena, 9, &cells);
        assert_eq!(evaluate(&board, Mark::A), Verdict::Win);
    }

    #[test]
    fn broken_run_does_not_win() {
        let mut arena = Arena::with_capacity(128);
        let board = board_with(
            &mut arena,
            5,
            &[
                (2, 0, Mark::A),
                (2, 1, Mark::A),
                (2, 2, Mark::B),
                (2, 3, Mark::A),
                (2, 4, Mark::A),
            ],
        );
        assert_eq!(evaluate(&board, Mark::A), Verdict::NoResult);
    }

    #[test]
    fn run_does_not_wrap_rows() {
        let mut arena = Arena::with_capacity(128);
        let board = board_with(
            &mut arena,
            4,
            &[(0, 2, Mark::A), (0, 3, Mark::A), (1, 0, Mark::A), (1, 1, Mark::A)],
        );
        assert_eq!(evaluate(&board, Mark::A), Verdict::NoResult);
    }

    #[test]
    fn full_board_without_run_is_draw() {
        // X O X
        // X O O
        // O X X
        let mut arena = Arena::with_capacity(128);
        let layout = [
            [Mark::A, Mark::B, Mark::A],
            [Mark::A, Mark::B, Mark::B],
            [Mark::B, Mark::A, Mark::A],
        ];
        let cells: Vec<_> = layout
            .iter()
            .enumerate()
            .flat_map(|(r, row)| row.iter().enumerate().map(move |(c, &m)| (r, c, m)))
            .collect();
        let board = board_with(&mut arena, 3, &cells);
        assert!(is_draw(&board));
        assert_eq!(assess(&board), Some(Outcome::Draw));
    }

    /// Brute-force reference: enumerate every line segment of the required
    /// length and check it is uniformly `mark`.
    fn has_run(grid: &[Option<Mark>], size: usize, mark: Mark) -> bool {
        let run = required_run(size) as isize;
        let at = |r: isize, c: isize| -> Option<Mark> {
            if r < 0 || c < 0 || r >= size as isize || c >= size as isize {
                None
            } else {
                grid[r as usize * size + c as usize]
            }
        };
        for r in 0..size as isize {
            for c in 0..size as isize {
                for (dr, dc) in DIRECTIONS {
                    if (0..run).all(|k| at(r + dr * k, c + dc * k) == Some(mark)) {
                        return true;
                    }
                }
            }
        }
        false
    }

    #[test]
    fn exhaustive_three_by_three() {
        // Every assignment of {Empty, A, B} to nine cells: 3^9 = 19683.
        let mut arena = Arena::with_capacity(64);
        for code in 0..3usize.pow(9) {
            let grid: Vec<Option<Mark>> = (0..9)
                .map(|i| match (code / 3usize.pow(i)) % 3 {
                    0 => None,
                    1 => Some(Mark::A),
                    _ => Some(Mark::B),
                })
                .collect();
            arena.reset();
            let mut board = Board::new_in(&mut arena, 3).unwrap();
            for (i, cell) in grid.iter().enumerate() {
                if let Some(m) = cell {
                    board.place(Coord::new(i / 3, i % 3), *m).unwrap();
                }
            }
            let a = has_run(&grid, 3, Mark::A);
            let b = has_run(&grid, 3, Mark::B);
            assert_eq!(evaluate(&board, Mark::A) == Verdict::Win, a, "code {code}");
            assert_eq!(evaluate(&board, Mark::B) == Verdict::Win, b, "code {code}");
            let full = grid.iter().all(Option::is_some);
            assert_eq!(is_draw(&board), full && !a && !b, "code {code}");
        }
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn arb_grid() -> impl Strategy<Value = (usize, Vec<Option<Mark>>)> {
            (3usize..=9).prop_flat_map(|size| {
                let cell = prop_oneof![
                    Just(None),
                    Just(Some(Mark::A)),
                    Just(Some(Mark::B)),
                ];
                (Just(size), proptest::collection::vec(cell, size * size))
            })
        }

        proptest! {
            #[test]
            fn evaluate_matches_brute_force((size, grid) in arb_grid()) {
                let mut arena = Arena::with_capacity(128);
                let mut board = Board::new_in(&mut arena, size).unwrap();
                for (i, cell) in grid.iter().enumerate() {
                    if let Some(m) = cell {
                        board.place(Coord::new(i / size, i % size), *m).unwrap();
                    }
                }
                for mark in Mark::BOTH {
                    prop_assert_eq!(
                        evaluate(&board, mark) == Verdict::Win,
                        has_run(&grid, size, mark)
                    );
                }
                let full = grid.iter().all(Option::is_some);
                let any_win = Mark::BOTH.iter().any(|&m| has_run(&grid, size, m));
                prop_assert_eq!(is_draw(&board), full && !any_win);
            }
        }
    }
}
