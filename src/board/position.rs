//! Text form of a board: 15 rows of 15 cells, `.` empty, `X` black, `O`
//! white. Rows are separated by newlines or `/`; other whitespace is ignored.

use std::str::FromStr;

use thiserror::Error;

use super::color::Color;
use super::error::BoardError;
use super::{Board, BOARD_SIZE};
use crate::moves::Move;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PositionParseError {
    #[error("Wrong number of rows: 15 expected, {row_count} given")]
    InvalidRowCount { row_count: usize },
    #[error("Row {row_index} has {length} cells, 15 expected")]
    InvalidRowLength { row_index: usize, length: usize },
    #[error("Invalid cell character: {invalid_character:?}")]
    InvalidCellCharacter { invalid_character: char },
    #[error("Error placing stone: {board_error}")]
    ErrorPlacingStone { board_error: BoardError },
}

type PositionResult<T> = Result<T, PositionParseError>;

pub const EMPTY_POSITION: &str = ".............../.............../.............../.............../.............../.............../.............../.............../.............../.............../.............../.............../.............../.............../...............";

pub fn parse_position(position: &str) -> PositionResult<Board> {
    let rows: Vec<String> = position
        .split(|c: char| c == '\n' || c == '/')
        .map(|row| row.chars().filter(|c| !c.is_whitespace()).collect::<String>())
        .filter(|row| !row.is_empty())
        .collect();

    if rows.len() != BOARD_SIZE {
        return Err(PositionParseError::InvalidRowCount {
            row_count: rows.len(),
        });
    }

    let mut board = Board::new();
    for (row_index, row) in rows.iter().enumerate() {
        parse_row(&mut board, row, row_index)?;
    }
    Ok(board)
}

fn parse_row(board: &mut Board, row: &str, row_index: usize) -> PositionResult<()> {
    let length = row.chars().count();
    if length != BOARD_SIZE {
        return Err(PositionParseError::InvalidRowLength { row_index, length });
    }

    for (col, c) in row.chars().enumerate() {
        if let Some(color) = parse_cell_char(c)? {
            let mv = Move::new(row_index, col)
                .map_err(|board_error| PositionParseError::ErrorPlacingStone { board_error })?;
            board
                .put(mv, color)
                .map_err(|board_error| PositionParseError::ErrorPlacingStone { board_error })?;
        }
    }
    Ok(())
}

fn parse_cell_char(c: char) -> PositionResult<Option<Color>> {
    match c {
        '.' | '+' => Ok(None),
        'X' | 'x' | 'B' | 'b' => Ok(Some(Color::Black)),
        'O' | 'o' | 'W' | 'w' => Ok(Some(Color::White)),
        _ => Err(PositionParseError::InvalidCellCharacter {
            invalid_character: c,
        }),
    }
}

/// Renders the board as `/`-separated rows, the inverse of [`parse_position`].
pub fn to_position_string(board: &Board) -> String {
    (0..BOARD_SIZE)
        .map(|row| {
            (0..BOARD_SIZE)
                .map(|col| board.get(Move::at(row, col)).to_char())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("/")
}

impl FromStr for Board {
    type Err = PositionParseError;

    fn from_str(position: &str) -> Result<Self, Self::Err> {
        parse_position(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;

    #[test]
    fn test_empty_position() {
        assert_eq!(parse_position(EMPTY_POSITION), Ok(Board::new()));
        assert_eq!(to_position_string(&Board::new()), EMPTY_POSITION);
    }

    const SAMPLE: &str = "
        ...............
        ...............
        ...............
        ...............
        ...............
        ...............
        ...............
        .......X.......
        .......OX......
        ...............
        ...............
        ...............
        ...............
        ...............
        ..............O
    ";

    #[test]
    fn test_parse_position() {
        let board = parse_position(SAMPLE).unwrap();
        assert_eq!(board.stone_count(), 4);
        assert_eq!(board.get(Move::new(7, 7).unwrap()), Cell::Black);
        assert_eq!(board.get(Move::new(8, 7).unwrap()), Cell::White);
        assert_eq!(board.get(Move::new(8, 8).unwrap()), Cell::Black);
        assert_eq!(board.get(Move::new(14, 14).unwrap()), Cell::White);
    }

    #[test]
    fn test_slash_separated_rows_match_rendering() {
        let board = parse_position(SAMPLE).unwrap();
        let rendered = to_position_string(&board);
        assert_eq!(rendered.split('/').count(), BOARD_SIZE);
        assert_eq!(rendered.parse::<Board>().unwrap(), board);
    }

    #[test]
    fn test_row_count_error() {
        assert_eq!(
            parse_position("...............\n..............."),
            Err(PositionParseError::InvalidRowCount { row_count: 2 })
        );
    }

    #[test]
    fn test_row_length_error() {
        let mut rows = vec!["..............."; BOARD_SIZE];
        rows[3] = "....";
        assert_eq!(
            parse_position(&rows.join("/")),
            Err(PositionParseError::InvalidRowLength {
                row_index: 3,
                length: 4
            })
        );
    }

    #[test]
    fn test_invalid_character() {
        let mut rows = vec!["..............."; BOARD_SIZE];
        rows[0] = "......Z........";
        assert_eq!(
            parse_position(&rows.join("/")),
            Err(PositionParseError::InvalidCellCharacter {
                invalid_character: 'Z'
            })
        );
    }
}
