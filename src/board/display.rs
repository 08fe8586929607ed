use super::{Board, BOARD_SIZE};
use crate::moves::Move;
use std::fmt;

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "   ")?;
        for col in 0..BOARD_SIZE {
            write!(f, "{:>3}", col)?;
        }
        writeln!(f)?;

        for row in 0..BOARD_SIZE {
            write!(f, "{:>3}", row)?;
            for col in 0..BOARD_SIZE {
                write!(f, "{:>3}", self.get(Move::at(row, col)).to_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Builds a [`Board`] from a 15x15 grid of `.` (empty), `X` (black) and `O`
/// (white), written top row first.
#[macro_export]
macro_rules! gomoku_position {
    ($($cell:tt)*) => {{
        let mut board = $crate::board::Board::new();
        // Convert all input tokens to a string and filter out whitespace characters.
        let cells: Vec<_> = stringify!($($cell)*)
            .chars()
            .filter(|&c| !c.is_whitespace())
            .collect();
        // Ensure we have exactly 225 intersections
        assert_eq!(cells.len(), 225, "Invalid number of cells. Expected 225, got {}", cells.len());
        for (i, &c) in cells.iter().enumerate() {
            let color = match c {
                '.' => continue,
                'X' => $crate::board::Color::Black,
                'O' => $crate::board::Color::White,
                _ => panic!("Invalid character in gomoku position: {}", c),
            };
            let cell = $crate::moves::Move::new(i / 15, i % 15).unwrap();
            board.put(cell, color).unwrap();
        }
        board
    }};
}
