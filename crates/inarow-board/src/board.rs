//! The board grid.

use std::fmt;

use inarow_arena::Arena;
use inarow_core::{Cell, Coord, Mark, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

use crate::error::{BoardError, PlacementError};

/// A `size x size` grid of cells, stored row-major in arena memory.
///
/// The board borrows its cells from the arena for `'a`, so the arena
/// cannot be reset or destroyed while the board exists. Cells start
/// [`Cell::Empty`] because arena allocations are zero-filled.
pub struct Board<'a> {
    size: usize,
    cells: &'a mut [u8],
}

impl<'a> Board<'a> {
    /// Carve an empty board out of `arena`.
    ///
    /// # Errors
    ///
    /// [`BoardError::InvalidSize`] if `size` is outside `3..=9`;
    /// [`BoardError::Arena`] if the arena is exhausted.
    pub fn new_in(arena: &'a mut Arena, size: usize) -> Result<Self, BoardError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(BoardError::InvalidSize { size });
        }
        let cells = arena.alloc_slice(size * size)?;
        Ok(Self { size, cells })
    }

    /// Edge length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The cell at `coord`, or `None` if it is off the board.
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        coord
            .within(self.size)
            .then(|| self.cell_at(coord.row * self.size + coord.col))
    }

    fn cell_at(&self, index: usize) -> Cell {
        // Only `place` writes cells, always with a valid encoding.
        Cell::from_byte(self.cells[index]).unwrap_or_default()
    }

    /// Whether `coord` is on the board and empty.
    pub fn is_open(&self, coord: Coord) -> bool {
        self.get(coord).is_some_and(Cell::is_empty)
    }

    /// Put `mark` on `coord`.
    ///
    /// # Errors
    ///
    /// Rejects off-board coordinates and occupied cells without touching
    /// the board.
    pub fn place(&mut self, coord: Coord, mark: Mark) -> Result<(), PlacementError> {
        match self.get(coord) {
            None => Err(PlacementError::OutOfRange {
                coord,
                size: self.size,
            }),
            Some(Cell::Empty) => {
                self.cells[coord.row * self.size + coord.col] = Cell::from(mark).to_byte();
                Ok(())
            }
            Some(taken) => Err(PlacementError::Occupied {
                coord,
                by: taken.mark().unwrap_or(mark),
            }),
        }
    }

    /// Whether every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&b| b != Cell::Empty.to_byte())
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells
            .iter()
            .filter(|&&b| b != Cell::Empty.to_byte())
            .count()
    }

    /// Coordinates of every empty cell, row-major.
    pub fn open_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        let size = self.size;
        (0..size * size)
            .filter(move |&i| self.cell_at(i).is_empty())
            .map(move |i| Coord::new(i / size, i % size))
    }

    /// Row `row` as cells.
    ///
    /// # Panics
    ///
    /// Panics if `row >= size`.
    pub fn row(&self, row: usize) -> impl Iterator<Item = Cell> + '_ {
        let start = row * self.size;
        self.cells[start..start + self.size]
            .iter()
            .map(|&b| Cell::from_byte(b).unwrap_or_default())
    }

    /// Human-readable grid. Pure: produces text, prints nothing.
    pub fn render(&self) -> String {
        crate::render::render(self)
    }
}

impl fmt::Debug for Board<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("size", &self.size)
            .field("occupied", &self.occupied())
            .finish()
    }
}

impl fmt::Display for Board<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
