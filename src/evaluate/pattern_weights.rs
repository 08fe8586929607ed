//! Contribution of a single five-cell window, by stone count and openness.

pub const FIVE: i64 = 100_000;
pub const OPEN_FOUR: i64 = 10_000;
pub const CLOSED_FOUR: i64 = 3_000;
pub const OPEN_THREE: i64 = 1_000;
pub const CLOSED_THREE: i64 = 200;
pub const OPEN_TWO: i64 = 50;

/// Score for a window holding `mine` friendly stones and `empty` empty cells
/// (and no opponent stones). `left_open`/`right_open` say whether the cell
/// just outside each end of the window is empty and on the line.
pub fn window_value(mine: usize, empty: usize, left_open: bool, right_open: bool) -> i64 {
    match (mine, empty) {
        (5, 0) => FIVE,
        (4, 1) if left_open || right_open => OPEN_FOUR,
        (4, 1) => CLOSED_FOUR,
        (3, 2) if left_open && right_open => OPEN_THREE,
        (3, 2) => CLOSED_THREE,
        (2, 3) if left_open || right_open => OPEN_TWO,
        _ => 0,
    }
}
