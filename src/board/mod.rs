pub mod cell;
pub mod color;
pub mod error;
pub mod position;

mod display;

use std::ops::{Deref, DerefMut};

pub use cell::Cell;
pub use color::Color;
use error::BoardError;

use crate::moves::Move;

pub const BOARD_SIZE: usize = 15;
pub const CENTER: usize = BOARD_SIZE / 2;

/// A 15x15 Gomoku board. Holds stone placement only; whose turn it is
/// belongs to the caller.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    stone_count: usize,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
            stone_count: 0,
        }
    }
}

impl Board {
    pub fn new() -> Self {
        Default::default()
    }

    #[inline]
    pub fn get(&self, mv: Move) -> Cell {
        self.cells[mv.row()][mv.col()]
    }

    /// Bounds-checked lookup for callers holding raw coordinates.
    pub fn get_at(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        Move::new(row, col).map(|mv| self.get(mv))
    }

    #[inline]
    pub fn is_vacant(&self, mv: Move) -> bool {
        self.get(mv).is_empty()
    }

    pub fn put(&mut self, mv: Move, color: Color) -> Result<(), BoardError> {
        if !self.is_vacant(mv) {
            return Err(BoardError::CellOccupied {
                row: mv.row(),
                col: mv.col(),
            });
        }
        self.set(mv, Cell::from(color));
        Ok(())
    }

    pub fn remove(&mut self, mv: Move) -> Result<Color, BoardError> {
        let color = self.get(mv).color().ok_or(BoardError::CellEmpty {
            row: mv.row(),
            col: mv.col(),
        })?;
        self.set(mv, Cell::Empty);
        Ok(color)
    }

    /// Places `color` at `mv` for the lifetime of the returned guard. The cell
    /// is emptied again when the guard drops, whichever way the caller's scope
    /// is left.
    ///
    /// # Panics
    ///
    /// If `mv` is occupied, since the guard would otherwise clear the stone
    /// that was already there.
    #[inline]
    pub fn place(&mut self, mv: Move, color: Color) -> PlacedStone<'_> {
        assert!(self.is_vacant(mv), "placing on occupied cell {}", mv);
        self.set(mv, Cell::from(color));
        PlacedStone { board: self, mv }
    }

    /// Total number of stones on the board.
    pub fn stone_count(&self) -> usize {
        self.stone_count
    }

    pub fn count_stones(&self, color: Color) -> usize {
        Move::all().filter(|&mv| self.get(mv).holds(color)).count()
    }

    /// True when no stone has been played.
    pub fn is_empty(&self) -> bool {
        self.stone_count == 0
    }

    pub fn is_full(&self) -> bool {
        self.stone_count == BOARD_SIZE * BOARD_SIZE
    }

    #[inline]
    fn set(&mut self, mv: Move, cell: Cell) {
        let slot = &mut self.cells[mv.row()][mv.col()];
        match (slot.is_empty(), cell.is_empty()) {
            (true, false) => self.stone_count += 1,
            (false, true) => self.stone_count -= 1,
            _ => (),
        }
        *slot = cell;
    }
}

/// Scoped placement returned by [`Board::place`]. Derefs to the board so
/// searches can recurse through it.
pub struct PlacedStone<'a> {
    board: &'a mut Board,
    mv: Move,
}

impl PlacedStone<'_> {
    pub fn placed_at(&self) -> Move {
        self.mv
    }
}

impl Deref for PlacedStone<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for PlacedStone<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for PlacedStone<'_> {
    fn drop(&mut self) {
        self.board.set(self.mv, Cell::Empty);
    }
}
