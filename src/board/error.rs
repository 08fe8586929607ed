use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    #[error("Cell ({row}, {col}) is outside the 15x15 board")]
    OutOfBounds { row: usize, col: usize },
    #[error("Cannot put a stone on cell ({row}, {col}), it is already occupied")]
    CellOccupied { row: usize, col: usize },
    #[error("Cannot remove a stone from cell ({row}, {col}), it is empty")]
    CellEmpty { row: usize, col: usize },
}
