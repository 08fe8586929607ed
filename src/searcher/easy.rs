//! Zero-lookahead policy for the easiest computer opponent.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{Board, Color};
use crate::geometry::{candidate_moves, try_move_is_win};
use crate::moves::Move;

/// Wins if it can, otherwise blocks an immediate opponent win, otherwise
/// plays a uniformly random candidate drawn from `rng`.
pub fn ai_easy<R: Rng + ?Sized>(
    board: &Board,
    mover: Color,
    opponent: Color,
    rng: &mut R,
) -> Option<Move> {
    let candidates = candidate_moves(board);
    let winning = candidates
        .iter()
        .copied()
        .find(|&mv| try_move_is_win(board, mv, mover));
    let blocking = || {
        candidates
            .iter()
            .copied()
            .find(|&mv| try_move_is_win(board, mv, opponent))
    };
    winning
        .or_else(blocking)
        .or_else(|| candidates.choose(rng).copied())
}
