//! Candidate ordering for search.
//!
//! Candidates are sorted into tiers, from first to last:
//! 1. Wins: the mover completes five by playing there
//! 2. Blocks: the opponent would complete five there
//! 3. Defensive: the opponent would get an open three (or longer) there
//! 4. Everything else
//!
//! Within a tier, candidates keep generation (row-major) order. Putting the
//! forcing moves first lets alpha-beta cut off the quiet ones early, and a
//! candidate cap only ever truncates the last tier.

use crate::board::{Board, Color};
use crate::geometry::{candidate_moves, is_open_threat, try_move_is_win, OPEN_THREAT_MIN};
use crate::moves::Move;

/// Limit on how many candidates a search node explores.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CandidateCap {
    Uncapped,
    Capped(usize),
}

impl Default for CandidateCap {
    fn default() -> Self {
        CandidateCap::Uncapped
    }
}

impl From<Option<usize>> for CandidateCap {
    fn from(cap: Option<usize>) -> Self {
        match cap {
            Some(n) => CandidateCap::Capped(n),
            None => CandidateCap::Uncapped,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    Win,
    Block,
    Defensive,
    Rest,
}

/// The first tier `mv` qualifies for when `mover` is to play.
pub fn classify(board: &Board, mv: Move, mover: Color) -> Tier {
    let opponent = mover.opposite();
    if try_move_is_win(board, mv, mover) {
        Tier::Win
    } else if try_move_is_win(board, mv, opponent) {
        Tier::Block
    } else if is_open_threat(board, mv, opponent, OPEN_THREAT_MIN) {
        Tier::Defensive
    } else {
        Tier::Rest
    }
}

/// Candidate moves split by [`Tier`], each in generation order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TieredCandidates {
    pub wins: Vec<Move>,
    pub blocks: Vec<Move>,
    pub defensive: Vec<Move>,
    pub rest: Vec<Move>,
}

impl TieredCandidates {
    pub fn collect(board: &Board, mover: Color) -> Self {
        let mut tiers = Self::default();
        for mv in candidate_moves(board) {
            let bucket = match classify(board, mv, mover) {
                Tier::Win => &mut tiers.wins,
                Tier::Block => &mut tiers.blocks,
                Tier::Defensive => &mut tiers.defensive,
                Tier::Rest => &mut tiers.rest,
            };
            bucket.push(mv);
        }
        tiers
    }

    /// Number of wins, blocks and defensive moves.
    pub fn forcing_count(&self) -> usize {
        self.wins.len() + self.blocks.len() + self.defensive.len()
    }

    pub fn len(&self) -> usize {
        self.forcing_count() + self.rest.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The prefix of the last tier that fits under `cap` once every forcing
    /// move has been counted.
    pub fn capped_rest(&self, cap: CandidateCap) -> &[Move] {
        match cap {
            CandidateCap::Uncapped => &self.rest,
            CandidateCap::Capped(n) => {
                let slots = n.saturating_sub(self.forcing_count());
                &self.rest[..slots.min(self.rest.len())]
            }
        }
    }

    /// Concatenates the tiers, truncating only the last one to fit `cap`.
    pub fn into_ordered(self, cap: CandidateCap) -> Vec<Move> {
        let kept = self.capped_rest(cap).len();
        let mut ordered = Vec::with_capacity(self.forcing_count() + kept);
        ordered.extend(self.wins);
        ordered.extend(self.blocks);
        ordered.extend(self.defensive);
        ordered.extend(self.rest.into_iter().take(kept));
        ordered
    }
}

/// Candidates for `mover`, forcing moves first, with the quiet tail cut to
/// `cap`. Forcing moves survive any cap, including zero.
pub fn ordered_candidates(board: &Board, mover: Color, cap: CandidateCap) -> Vec<Move> {
    TieredCandidates::collect(board, mover).into_ordered(cap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gomoku_position;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn mv(row: usize, col: usize) -> Move {
        Move::new(row, col).unwrap()
    }

    /// Black to move: black wins at (3,7), white threatens five at (10,2)
    /// and (10,7), white open two on column 12 gives a defensive cell.
    fn create_test_board() -> Board {
        gomoku_position! {
            . . . . . . . . . . . . . . .
            . . . . . . . . . . . . . . .
            . . . . . . . . . . . . . . .
            . . . X X X X . . . . . . . .
            . . . . . . . . . . . . . . .
            . . . . . . . . . . . . . . .
            . . . . . . . . . . . . . . .
            . . . . . . . . . . . . O . .
            . . . . . . . . . . . . O . .
            . . . . . . . . . . . . . . .
            . . . O O O O . . . . . . . .
            . . . . . . . . . . . . . . .
            . . . . . . . . . . . . . . .
            . . . . . . . . . . . . . . .
            . . . . . . . . . . . . . . .
        }
    }

    #[test]
    fn test_tiers_are_in_priority_order() {
        let board = create_test_board();
        let tiers = TieredCandidates::collect(&board, Color::Black);

        assert_eq!(tiers.wins, vec![mv(3, 2), mv(3, 7)]);
        assert_eq!(tiers.blocks, vec![mv(10, 2), mv(10, 7)]);
        assert!(tiers.defensive.contains(&mv(6, 12)));
        assert!(tiers.defensive.contains(&mv(9, 12)));

        let ordered = ordered_candidates(&board, Color::Black, CandidateCap::Uncapped);
        assert_eq!(&ordered[..2], &tiers.wins[..]);
        assert_eq!(&ordered[2..4], &tiers.blocks[..]);
        assert_eq!(ordered.len(), tiers.len());
        assert_eq!(ordered.len(), candidate_moves(&board).len());
    }

    #[test]
    fn test_tiers_swap_with_the_mover() {
        let board = create_test_board();
        let tiers = TieredCandidates::collect(&board, Color::White);
        assert_eq!(tiers.wins, vec![mv(10, 2), mv(10, 7)]);
        assert_eq!(tiers.blocks, vec![mv(3, 2), mv(3, 7)]);
    }

    #[test]
    fn test_cap_only_truncates_rest() {
        let board = create_test_board();
        let tiers = TieredCandidates::collect(&board, Color::Black);
        let forcing = tiers.forcing_count();

        for cap in [0, 1, forcing, forcing + 3, 1000].iter() {
            let capped = ordered_candidates(&board, Color::Black, CandidateCap::Capped(*cap));
            let expected_rest = cap.saturating_sub(forcing).min(tiers.rest.len());
            assert_eq!(capped.len(), forcing + expected_rest, "cap {}", cap);
            assert_eq!(&capped[forcing..], &tiers.rest[..expected_rest]);
            for m in tiers
                .wins
                .iter()
                .chain(tiers.blocks.iter())
                .chain(tiers.defensive.iter())
            {
                assert!(capped.contains(m), "cap {} dropped forcing move {}", cap, m);
            }
        }
    }

    #[test]
    fn test_empty_board_has_only_center() {
        let board = Board::new();
        let ordered = ordered_candidates(&board, Color::Black, CandidateCap::Capped(0));
        assert!(ordered.is_empty());
        let ordered = ordered_candidates(&board, Color::Black, CandidateCap::Uncapped);
        assert_eq!(ordered, vec![mv(7, 7)]);
    }

    #[test]
    fn test_rest_never_precedes_forcing_moves() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..40 {
            let mut board = Board::new();
            for _ in 0..rng.gen_range(4..40) {
                let cell = mv(rng.gen_range(3..12), rng.gen_range(3..12));
                let color = if rng.gen_bool(0.5) { Color::Black } else { Color::White };
                let _ = board.put(cell, color);
            }
            for mover in Color::ALL.iter() {
                let ordered = ordered_candidates(&board, *mover, CandidateCap::Uncapped);
                let ranks: Vec<Tier> = ordered
                    .iter()
                    .map(|&m| classify(&board, m, *mover))
                    .collect();
                let mut sorted = ranks.clone();
                sorted.sort();
                assert_eq!(ranks, sorted);
            }
        }
    }

    #[test]
    fn test_cap_from_option() {
        assert_eq!(CandidateCap::from(None), CandidateCap::Uncapped);
        assert_eq!(CandidateCap::from(Some(12)), CandidateCap::Capped(12));
    }
}
