//! Depth-limited minimax search.
//!
//! Every node scores from the fixed perspective of the root mover: the mover
//! maximizes, the opponent minimizes. Candidates come from
//! [`ordered_candidates`] so forcing moves are tried first and survive any
//! candidate cap. A stone that completes five scores [`WIN_SCORE`] (negated
//! for the opponent) without being searched further.
//!
//! The board is searched in place. Each stone goes down through a
//! [`Board::place`] guard, so the caller's board is restored however a node
//! returns, cutoffs included.
//!
//! With alpha-beta enabled, a node stops once `alpha >= beta`. The value it
//! returns is then a bound rather than the exact minimax value, which cannot
//! change the move chosen at the root.

pub mod easy;


use std::cmp::{max, min};

use log::debug;

use crate::board::{Board, Color};
use crate::evaluate::evaluate;
use crate::geometry::is_win_at;
use crate::move_orderer::{ordered_candidates, CandidateCap, TieredCandidates};
use crate::moves::Move;

pub use easy::ai_easy;

/// Value of a move that completes five during search.
pub const WIN_SCORE: i64 = 100_000;

/// Initial alpha-beta window bound; larger than any reachable score.
pub const INFINITY: i64 = 1_000_000_000;

/// Parameters fixed for the duration of one search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchParams {
    pub depth: u8,
    pub use_alpha_beta: bool,
    pub max_candidates: CandidateCap,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            depth: 2,
            use_alpha_beta: false,
            max_candidates: CandidateCap::Uncapped,
        }
    }
}

impl SearchParams {
    pub fn new(depth: u8) -> Self {
        Self {
            depth,
            ..Default::default()
        }
    }

    pub fn with_alpha_beta(self, use_alpha_beta: bool) -> Self {
        Self {
            use_alpha_beta,
            ..self
        }
    }

    pub fn with_max_candidates(self, max_candidates: impl Into<CandidateCap>) -> Self {
        Self {
            max_candidates: max_candidates.into(),
            ..self
        }
    }
}

/// The chosen root move and its backed-up score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchOutcome {
    pub best_move: Move,
    pub score: i64,
}

pub struct Searcher {
    params: SearchParams,
    searched_position_count: usize,
    termination_count: usize,
}

impl Searcher {
    pub fn new(params: SearchParams) -> Self {
        Self {
            params,
            searched_position_count: 0,
            termination_count: 0,
        }
    }

    pub fn params(&self) -> SearchParams {
        self.params
    }

    pub fn searched_position_count(&self) -> usize {
        self.searched_position_count
    }

    pub fn termination_count(&self) -> usize {
        self.termination_count
    }

    pub fn reset_stats(&mut self) {
        self.searched_position_count = 0;
        self.termination_count = 0;
    }

    /// Picks the best move for `mover` against `opponent`. Each root
    /// candidate is played and scored one ply down; the strictly greatest
    /// score wins, so the earliest candidate keeps a tie. `depth` 0 behaves
    /// like depth 1 (a static comparison of the root moves).
    ///
    /// Returns `None` when there is nothing to play.
    pub fn search(
        &mut self,
        board: &mut Board,
        mover: Color,
        opponent: Color,
    ) -> Option<SearchOutcome> {
        self.reset_stats();

        let tiers = TieredCandidates::collect(board, mover);
        let kept_rest = tiers.capped_rest(self.params.max_candidates).len();
        debug!(
            "Root candidates: {} wins, {} blocks, {} defensive, {} of {} rest kept",
            tiers.wins.len(),
            tiers.blocks.len(),
            tiers.defensive.len(),
            kept_rest,
            tiers.rest.len()
        );
        let candidates = tiers.into_ordered(self.params.max_candidates);

        let child_depth = self.params.depth.saturating_sub(1);
        let mut alpha = -INFINITY;
        let beta = INFINITY;
        let mut best: Option<SearchOutcome> = None;

        for mv in candidates {
            let score = {
                let mut placed = board.place(mv, mover);
                self.minimax(&mut placed, child_depth, false, mover, opponent, alpha, beta)
            };
            debug!("Root move {} scored {}", mv, score);

            if best.map_or(true, |outcome| score > outcome.score) {
                best = Some(SearchOutcome {
                    best_move: mv,
                    score,
                });
            }

            if self.params.use_alpha_beta {
                alpha = max(alpha, score);
                if alpha >= beta {
                    self.termination_count += 1;
                    break;
                }
            }
        }

        if let Some(outcome) = best {
            debug!(
                "Selected move {} with score {} ({} positions searched, {} cutoffs)",
                outcome.best_move,
                outcome.score,
                self.searched_position_count,
                self.termination_count
            );
        }
        best
    }

    /// Backed-up value of `board` from `mover`'s perspective, with `depth`
    /// plies left and `maximizing` saying whether `mover` is to play.
    /// A node left with no candidates, including one the cap has emptied,
    /// returns the static evaluation rather than its unsearched ±`INFINITY`
    /// starting value.
    #[allow(clippy::too_many_arguments)]
    pub fn minimax(
        &mut self,
        board: &mut Board,
        depth: u8,
        maximizing: bool,
        mover: Color,
        opponent: Color,
        mut alpha: i64,
        mut beta: i64,
    ) -> i64 {
        self.searched_position_count += 1;

        if depth == 0 {
            return evaluate(board, mover);
        }

        let side = if maximizing { mover } else { opponent };
        let candidates = ordered_candidates(board, side, self.params.max_candidates);
        if candidates.is_empty() {
            return evaluate(board, mover);
        }

        let mut value = if maximizing { -INFINITY } else { INFINITY };
        for mv in candidates {
            let score = {
                let mut placed = board.place(mv, side);
                if is_win_at(&placed, mv, side) {
                    if maximizing {
                        WIN_SCORE
                    } else {
                        -WIN_SCORE
                    }
                } else {
                    self.minimax(&mut placed, depth - 1, !maximizing, mover, opponent, alpha, beta)
                }
            };

            if maximizing {
                value = max(value, score);
                if self.params.use_alpha_beta {
                    alpha = max(alpha, value);
                }
            } else {
                value = min(value, score);
                if self.params.use_alpha_beta {
                    beta = min(beta, value);
                }
            }

            if self.params.use_alpha_beta && alpha >= beta {
                self.termination_count += 1;
                break;
            }
        }

        value
    }
}

/// Best move for `mover`, or `None` when there is nothing to play.
pub fn search(
    board: &mut Board,
    mover: Color,
    opponent: Color,
    params: SearchParams,
) -> Option<Move> {
    Searcher::new(params)
        .search(board, mover, opponent)
        .map(|outcome| outcome.best_move)
}
