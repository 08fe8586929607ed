//! Static position evaluation.
//!
//! Every row, column and diagonal of length five or more is scanned with a
//! sliding five-cell window. Windows containing an opponent stone are dead;
//! the rest score by how many friendly stones they hold and whether the
//! cells just outside the window are open. There is no lookahead.

pub mod pattern_weights;

use once_cell::sync::Lazy;

use crate::board::{Board, Cell, Color, BOARD_SIZE};
use crate::geometry::WIN_LENGTH;
use crate::moves::Move;

/// Every line on the board long enough to hold five in a row.
static LINES: Lazy<Vec<Vec<Move>>> = Lazy::new(build_lines);

fn walk(start: Move, dr: isize, dc: isize) -> Vec<Move> {
    std::iter::successors(Some(start), |cell| cell.offset(dr, dc)).collect()
}

fn build_lines() -> Vec<Vec<Move>> {
    let last = BOARD_SIZE - 1;
    let mut lines = Vec::new();

    for i in 0..BOARD_SIZE {
        lines.push(walk(Move::at(i, 0), 0, 1));
        lines.push(walk(Move::at(0, i), 1, 0));
    }

    // diagonals start on the top edge, then down the left (↘) or right (↗) edge
    for col in 0..BOARD_SIZE {
        lines.push(walk(Move::at(0, col), 1, 1));
        lines.push(walk(Move::at(0, col), 1, -1));
    }
    for row in 1..BOARD_SIZE {
        lines.push(walk(Move::at(row, 0), 1, 1));
        lines.push(walk(Move::at(row, last), 1, -1));
    }

    lines.retain(|line| line.len() >= WIN_LENGTH);
    lines
}

/// Heuristic value of `board` for `perspective`: its own patterns minus the
/// opponent's. Antisymmetric in color.
pub fn evaluate(board: &Board, perspective: Color) -> i64 {
    score_color(board, perspective) - score_color(board, perspective.opposite())
}

/// Sum of window values for `color` over every line.
pub fn score_color(board: &Board, color: Color) -> i64 {
    LINES
        .iter()
        .map(|line| score_line(board, line, color))
        .sum()
}

fn score_line(board: &Board, line: &[Move], color: Color) -> i64 {
    let mut cells = [Cell::Empty; BOARD_SIZE];
    for (slot, &mv) in cells.iter_mut().zip(line.iter()) {
        *slot = board.get(mv);
    }
    let cells = &cells[..line.len()];
    let is_open = |idx: Option<usize>| {
        idx.and_then(|i| cells.get(i))
            .map_or(false, |cell| cell.is_empty())
    };

    let mut score = 0;
    for start in 0..=cells.len() - WIN_LENGTH {
        let window = &cells[start..start + WIN_LENGTH];
        let mut mine = 0;
        let mut empty = 0;
        let mut blocked = false;
        for &cell in window {
            if cell.is_empty() {
                empty += 1;
            } else if cell.holds(color) {
                mine += 1;
            } else {
                blocked = true;
                break;
            }
        }
        if blocked {
            continue;
        }

        let left_open = is_open(start.checked_sub(1));
        let right_open = is_open(Some(start + WIN_LENGTH));
        score += pattern_weights::window_value(mine, empty, left_open, right_open);
    }
    score
}
