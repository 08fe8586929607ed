//! Line-scanning primitives over the board: win detection, threat counting
//! and candidate generation.

use crate::board::error::BoardError;
use crate::board::{Board, Color, CENTER};
use crate::moves::Move;

/// The four axes, each scanned in both directions: horizontal, vertical,
/// diagonal ↘ and diagonal ↗.
pub const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Stones in a row needed to win.
pub const WIN_LENGTH: usize = 5;

/// Minimum run length for `is_open_threat` when used for move ordering.
pub const OPEN_THREAT_MIN: usize = 3;

/// Chebyshev radius around existing stones that candidate moves are drawn from.
pub const CANDIDATE_RADIUS: isize = 2;

/// Walks from `origin` (exclusive) along `(dr, dc)` while cells hold `color`.
/// Returns the run length and the first cell past the run, if on the board.
#[inline]
fn run_from(board: &Board, origin: Move, color: Color, dr: isize, dc: isize) -> (usize, Option<Move>) {
    let mut count = 0;
    let mut cursor = origin.offset(dr, dc);
    while let Some(cell) = cursor {
        if !board.get(cell).holds(color) {
            break;
        }
        count += 1;
        cursor = cell.offset(dr, dc);
    }
    (count, cursor)
}

/// Length of the `color` line through `mv` along one axis, counting `mv`
/// itself, plus the cells just beyond each end.
#[inline]
fn axis_run(
    board: &Board,
    mv: Move,
    color: Color,
    (dr, dc): (isize, isize),
) -> (usize, Option<Move>, Option<Move>) {
    let (forward, forward_end) = run_from(board, mv, color, dr, dc);
    let (backward, backward_end) = run_from(board, mv, color, -dr, -dc);
    (1 + forward + backward, forward_end, backward_end)
}

/// True if the stone at `mv`, assumed to already be `color`, is part of five
/// or more in a row.
pub fn is_win_at(board: &Board, mv: Move, color: Color) -> bool {
    DIRECTIONS
        .iter()
        .any(|&dir| axis_run(board, mv, color, dir).0 >= WIN_LENGTH)
}

/// Bounds-checked [`is_win_at`] for callers holding raw coordinates.
pub fn is_win(board: &Board, row: usize, col: usize, color: Color) -> Result<bool, BoardError> {
    let mv = Move::new(row, col)?;
    Ok(is_win_at(board, mv, color))
}

/// The color owning five or more in a row anywhere on the board, if any.
pub fn find_five(board: &Board) -> Option<Color> {
    Move::all().find_map(|mv| {
        board
            .get(mv)
            .color()
            .filter(|&color| is_win_at(board, mv, color))
    })
}

/// True if playing `color` on the vacant cell `mv` would make five in a row.
#[inline]
pub fn try_move_is_win(board: &Board, mv: Move, color: Color) -> bool {
    count_threat_level(board, mv, color) >= WIN_LENGTH
}

/// Longest run `color` would own through `mv` if it played there, including
/// the new stone. 0 if `mv` is occupied.
pub fn count_threat_level(board: &Board, mv: Move, color: Color) -> usize {
    if !board.is_vacant(mv) {
        return 0;
    }
    DIRECTIONS
        .iter()
        .map(|&dir| axis_run(board, mv, color, dir).0)
        .max()
        .unwrap_or(0)
}

/// Bounds-checked [`count_threat_level`].
pub fn count_threat_level_checked(
    board: &Board,
    row: usize,
    col: usize,
    color: Color,
) -> Result<usize, BoardError> {
    let mv = Move::new(row, col)?;
    Ok(count_threat_level(board, mv, color))
}

/// True if playing `color` on the vacant cell `mv` makes a run of at least
/// `min_count` with an empty cell just beyond at least one of its ends.
pub fn is_open_threat(board: &Board, mv: Move, color: Color, min_count: usize) -> bool {
    if !board.is_vacant(mv) {
        return false;
    }
    let is_open = |end: Option<Move>| end.map_or(false, |cell| board.is_vacant(cell));
    DIRECTIONS.iter().any(|&dir| {
        let (count, forward_end, backward_end) = axis_run(board, mv, color, dir);
        count >= min_count && (is_open(forward_end) || is_open(backward_end))
    })
}

pub fn empty_cells(board: &Board) -> Vec<Move> {
    Move::all().filter(|&mv| board.is_vacant(mv)).collect()
}

fn has_neighbor(board: &Board, mv: Move, radius: isize) -> bool {
    (-radius..=radius).any(|dr| {
        (-radius..=radius).any(|dc| {
            (dr, dc) != (0, 0)
                && mv
                    .offset(dr, dc)
                    .map_or(false, |cell| !board.is_vacant(cell))
        })
    })
}

/// Empty cells worth searching, in row-major order. The centre on an empty
/// board, otherwise every empty cell within two of a stone, falling back to
/// every empty cell when none qualifies.
pub fn candidate_moves(board: &Board) -> Vec<Move> {
    if board.is_empty() {
        return vec![Move::at(CENTER, CENTER)];
    }
    let empties = empty_cells(board);
    let nearby: Vec<Move> = empties
        .iter()
        .copied()
        .filter(|&mv| has_neighbor(board, mv, CANDIDATE_RADIUS))
        .collect();
    if nearby.is_empty() {
        empties
    } else {
        nearby
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BOARD_SIZE;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn mv(row: usize, col: usize) -> Move {
        Move::new(row, col).unwrap()
    }

    fn board_with(stones: &[(usize, usize, Color)]) -> Board {
        let mut board = Board::new();
        for &(row, col, color) in stones {
            board.put(mv(row, col), color).unwrap();
        }
        board
    }

    /// Full-board scan for five consecutive `color` stones.
    fn has_five_anywhere(board: &Board, color: Color) -> bool {
        Move::all().any(|start| {
            DIRECTIONS.iter().any(|&(dr, dc)| {
                (0..WIN_LENGTH as isize).all(|i| {
                    start
                        .offset(dr * i, dc * i)
                        .map_or(false, |cell| board.get(cell).holds(color))
                })
            })
        })
    }

    #[test]
    fn test_is_win_at_all_directions() {
        let lines: [[(usize, usize); 5]; 4] = [
            [(3, 2), (3, 3), (3, 4), (3, 5), (3, 6)],
            [(2, 9), (3, 9), (4, 9), (5, 9), (6, 9)],
            [(8, 8), (9, 9), (10, 10), (11, 11), (12, 12)],
            [(10, 0), (9, 1), (8, 2), (7, 3), (6, 4)],
        ];
        for line in lines.iter() {
            let stones: Vec<_> = line.iter().map(|&(r, c)| (r, c, Color::White)).collect();
            let board = board_with(&stones);
            for &(r, c) in line.iter() {
                assert!(is_win_at(&board, mv(r, c), Color::White), "{:?}", line);
                assert!(!is_win_at(&board, mv(r, c), Color::Black));
            }
        }
    }

    #[test]
    fn test_four_is_not_a_win() {
        let board = board_with(&[
            (7, 3, Color::Black),
            (7, 4, Color::Black),
            (7, 5, Color::Black),
            (7, 6, Color::Black),
            (7, 7, Color::White),
        ]);
        assert!(!is_win_at(&board, mv(7, 6), Color::Black));
    }

    #[test]
    fn test_overline_counts_as_win() {
        let stones: Vec<_> = (0..6).map(|c| (0, c, Color::Black)).collect();
        let board = board_with(&stones);
        assert!(is_win_at(&board, mv(0, 0), Color::Black));
    }

    #[test]
    fn test_is_win_bounds_checked() {
        let board = Board::new();
        assert_eq!(
            is_win(&board, 15, 2, Color::Black),
            Err(BoardError::OutOfBounds { row: 15, col: 2 })
        );
        assert_eq!(is_win(&board, 2, 2, Color::Black), Ok(false));
        assert_eq!(
            count_threat_level_checked(&board, 3, 15, Color::White),
            Err(BoardError::OutOfBounds { row: 3, col: 15 })
        );
        assert_eq!(count_threat_level_checked(&board, 3, 14, Color::White), Ok(1));
    }

    #[test]
    fn test_is_win_at_agrees_with_full_board_scan() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let mut checked = 0;
        for _ in 0..400 {
            let mut board = Board::new();
            let density = rng.gen_range(0.1..0.45);
            for cell in Move::all() {
                if rng.gen_bool(density) {
                    let color = if rng.gen_bool(0.5) { Color::Black } else { Color::White };
                    board.put(cell, color).unwrap();
                }
            }
            let color = if rng.gen_bool(0.5) { Color::Black } else { Color::White };
            if has_five_anywhere(&board, color) {
                continue;
            }
            let empties = empty_cells(&board);
            if empties.is_empty() {
                continue;
            }
            let target = empties[rng.gen_range(0..empties.len())];
            let predicted = try_move_is_win(&board, target, color);
            let placed = board.place(target, color);
            assert_eq!(
                is_win_at(&placed, target, color),
                has_five_anywhere(&placed, color),
                "disagreement at {}",
                target
            );
            assert_eq!(predicted, is_win_at(&placed, target, color));
            checked += 1;
        }
        assert!(checked > 100);
    }

    #[test]
    fn test_find_five() {
        let mut board = board_with(&[(7, 7, Color::Black), (2, 2, Color::White)]);
        assert_eq!(find_five(&board), None);
        for row in 3..7 {
            board.put(mv(row, 6), Color::White).unwrap();
        }
        assert_eq!(find_five(&board), None);
        board.put(mv(7, 6), Color::White).unwrap();
        assert_eq!(find_five(&board), Some(Color::White));
    }

    #[test]
    fn test_count_threat_level() {
        let board = board_with(&[
            (7, 4, Color::Black),
            (7, 5, Color::Black),
            (7, 6, Color::Black),
            (6, 7, Color::Black),
        ]);
        assert_eq!(count_threat_level(&board, mv(7, 7), Color::Black), 4);
        assert_eq!(count_threat_level(&board, mv(7, 3), Color::Black), 4);
        assert_eq!(count_threat_level(&board, mv(5, 7), Color::Black), 2);
        assert_eq!(count_threat_level(&board, mv(0, 0), Color::Black), 1);
        assert_eq!(count_threat_level(&board, mv(7, 7), Color::White), 1);
        // occupied
        assert_eq!(count_threat_level(&board, mv(7, 5), Color::Black), 0);
    }

    #[test]
    fn test_is_open_threat() {
        let board = board_with(&[
            (7, 5, Color::Black),
            (7, 6, Color::Black),
            (0, 1, Color::White),
            (0, 2, Color::White),
            (0, 3, Color::Black),
        ]);
        // (7,4)-(7,6) with both ends empty
        assert!(is_open_threat(&board, mv(7, 4), Color::Black, 3));
        assert!(is_open_threat(&board, mv(7, 7), Color::Black, 3));
        assert!(!is_open_threat(&board, mv(7, 7), Color::Black, 4));
        // white three against the edge and a black stone has no open end
        assert!(!is_open_threat(&board, mv(0, 0), Color::White, 3));
        // occupied
        assert!(!is_open_threat(&board, mv(7, 5), Color::Black, 3));
    }

    #[test]
    fn test_open_threat_with_single_open_end() {
        let board = board_with(&[
            (3, 1, Color::Black),
            (3, 2, Color::Black),
            (3, 0, Color::White),
        ]);
        assert!(is_open_threat(&board, mv(3, 3), Color::Black, 3));
    }

    #[test]
    fn test_candidate_moves_empty_board_is_center() {
        let board = Board::new();
        assert_eq!(candidate_moves(&board), vec![mv(7, 7)]);
    }

    #[test]
    fn test_candidate_moves_near_stones() {
        let board = board_with(&[(0, 0, Color::Black)]);
        let candidates = candidate_moves(&board);
        assert_eq!(candidates.len(), 8);
        assert!(candidates.iter().all(|c| c.row() <= 2 && c.col() <= 2));
        assert!(!candidates.contains(&mv(0, 0)));
        let mut sorted = candidates.clone();
        sorted.sort();
        assert_eq!(candidates, sorted, "candidates should be row-major");
    }

    #[test]
    fn test_candidate_moves_never_include_occupied_cells() {
        let board = board_with(&[
            (7, 7, Color::Black),
            (7, 8, Color::White),
            (8, 8, Color::Black),
        ]);
        let candidates = candidate_moves(&board);
        assert!(candidates.iter().all(|&c| board.is_vacant(c)));
        assert_eq!(candidates.len(), 5 * 6 + 5 - 3);
    }

    #[test]
    fn test_candidate_moves_dense_board() {
        let mut board = Board::new();
        for cell in Move::all() {
            if cell != mv(14, 14) {
                board.put(cell, Color::Black).unwrap();
            }
        }
        assert_eq!(candidate_moves(&board), vec![mv(14, 14)]);
        board.put(mv(14, 14), Color::White).unwrap();
        assert!(candidate_moves(&board).is_empty());
        assert_eq!(empty_cells(&board).len(), 0);
        assert_eq!(BOARD_SIZE * BOARD_SIZE, board.stone_count());
    }
}
