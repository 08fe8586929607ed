//! Board coordinates and their text form.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::board::error::BoardError;
use crate::board::BOARD_SIZE;

static MOVE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\(?\s*(\d{1,2})\s*[,\s]\s*(\d{1,2})\s*\)?$").expect("MOVE_RE regex should be valid")
});

#[derive(Error, Debug, PartialEq, Eq)]
pub enum MoveParseError {
    #[error("invalid move {input:?}, expected `row,col`")]
    InvalidFormat { input: String },
    #[error(transparent)]
    OutOfBounds(#[from] BoardError),
}

/// A 0-indexed `(row, col)` intersection. Always within the board.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct Move {
    row: u8,
    col: u8,
}

impl Move {
    pub fn new(row: usize, col: usize) -> Result<Self, BoardError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(BoardError::OutOfBounds { row, col });
        }
        Ok(Self::at(row, col))
    }

    /// Infallible constructor for coordinates already known to be on the board.
    pub(crate) const fn at(row: usize, col: usize) -> Self {
        debug_assert!(row < BOARD_SIZE && col < BOARD_SIZE);
        Self {
            row: row as u8,
            col: col as u8,
        }
    }

    #[inline]
    pub fn row(self) -> usize {
        self.row as usize
    }

    #[inline]
    pub fn col(self) -> usize {
        self.col as usize
    }

    /// The intersection `(row + dr, col + dc)`, if it is on the board.
    #[inline]
    pub fn offset(self, dr: isize, dc: isize) -> Option<Self> {
        let row = self.row as isize + dr;
        let col = self.col as isize + dc;
        let size = BOARD_SIZE as isize;
        if row < 0 || row >= size || col < 0 || col >= size {
            return None;
        }
        Some(Self::at(row as usize, col as usize))
    }

    /// Every intersection in row-major order.
    pub fn all() -> impl Iterator<Item = Move> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Move::at(row, col)))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let caps = MOVE_RE
            .captures(input.trim())
            .ok_or_else(|| MoveParseError::InvalidFormat {
                input: input.to_string(),
            })?;
        let parse = |idx: usize| -> Result<usize, MoveParseError> {
            caps[idx]
                .parse::<usize>()
                .map_err(|_| MoveParseError::InvalidFormat {
                    input: input.to_string(),
                })
        };
        Ok(Move::new(parse(1)?, parse(2)?)?)
    }
}
