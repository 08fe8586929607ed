//! Ranked move suggestions for the side to move.
//!
//! Forcing moves come first in fixed priority bands (wins, then blocks, then
//! defensive moves against open threes). The remaining candidates are scored
//! according to the requested [`Difficulty`] and sorted by descending score.

use std::cmp::max;
use std::fmt;
use std::str::FromStr;

use crate::board::{Board, Color};
use crate::evaluate::evaluate;
use crate::geometry::{candidate_moves, count_threat_level, is_win_at, try_move_is_win};
use crate::move_orderer::{CandidateCap, TieredCandidates};
use crate::moves::Move;
use crate::searcher::{SearchParams, Searcher, INFINITY, WIN_SCORE};

pub const WIN_PRIORITY: i64 = 1_000_000_000;
pub const BLOCK_PRIORITY: i64 = 100_000_000;
pub const DEFENSIVE_PRIORITY: i64 = 10_000_000;

/// Added to [`DEFENSIVE_PRIORITY`] per stone of the opponent's threat.
const THREAT_LEVEL_WEIGHT: i64 = 1_000;

/// Opponent replies examined per candidate at [`Difficulty::Medium`].
const REPLY_SCAN_LIMIT: usize = 10;

/// Reply value when the opponent can win outright.
const REPLY_WIN_VALUE: i64 = 100_000_000;

pub const DEFAULT_TOP_K: usize = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Medium
    }
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Search settings the computer opponent plays with at this difficulty.
    /// `None` for [`Difficulty::Easy`], which plays
    /// [`ai_easy`](crate::searcher::ai_easy) instead of searching.
    pub fn search_preset(self) -> Option<SearchParams> {
        match self {
            Difficulty::Easy => None,
            Difficulty::Medium => Some(SearchParams::new(2).with_max_candidates(Some(10))),
            Difficulty::Hard => Some(
                SearchParams::new(3)
                    .with_alpha_beta(true)
                    .with_max_candidates(Some(12)),
            ),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        write!(f, "{}", name)
    }
}

// used for parsing cli args
type ParseError = &'static str;
impl FromStr for Difficulty {
    type Err = ParseError;
    fn from_str(difficulty: &str) -> Result<Self, Self::Err> {
        match difficulty.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err("invalid difficulty; options are: easy, medium, hard"),
        }
    }
}

/// Why a suggestion was ranked where it is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SuggestionKind {
    Win,
    Block,
    Defensive,
    Search,
    Score,
}

impl fmt::Display for SuggestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SuggestionKind::Win => "win",
            SuggestionKind::Block => "block",
            SuggestionKind::Defensive => "defensive",
            SuggestionKind::Search => "search",
            SuggestionKind::Score => "score",
        };
        write!(f, "{}", name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Suggestion {
    pub mv: Move,
    pub score: i64,
    pub kind: SuggestionKind,
}

impl Suggestion {
    pub fn new(mv: Move, score: i64, kind: SuggestionKind) -> Self {
        Self { mv, score, kind }
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.mv, self.kind, self.score)
    }
}

/// Up to `top_k` suggestions for `player`, best first.
///
/// Forcing moves are taken from the full candidate set and always rank
/// ahead of the rest. Only the quiet candidates are subject to
/// `max_candidates`, and they are scored by `difficulty`:
/// - Easy: the evaluation after playing the move
/// - Medium: that evaluation minus the opponent's best answer among its
///   first few replies
/// - Hard: a two-ply alpha-beta search seeded by the move
///
/// The board is restored before returning.
pub fn suggest_moves(
    board: &mut Board,
    player: Color,
    difficulty: Difficulty,
    top_k: usize,
    max_candidates: CandidateCap,
) -> Vec<Suggestion> {
    let opponent = player.opposite();
    let tiers = TieredCandidates::collect(board, player);

    let mut suggestions = Vec::with_capacity(tiers.len());
    suggestions.extend(
        tiers
            .wins
            .iter()
            .map(|&mv| Suggestion::new(mv, WIN_PRIORITY, SuggestionKind::Win)),
    );
    suggestions.extend(
        tiers
            .blocks
            .iter()
            .map(|&mv| Suggestion::new(mv, BLOCK_PRIORITY, SuggestionKind::Block)),
    );
    suggestions.extend(tiers.defensive.iter().map(|&mv| {
        let threat_level = count_threat_level(board, mv, opponent) as i64;
        Suggestion::new(
            mv,
            DEFENSIVE_PRIORITY + threat_level * THREAT_LEVEL_WEIGHT,
            SuggestionKind::Defensive,
        )
    }));

    let mut searcher = Searcher::new(
        SearchParams::new(2)
            .with_alpha_beta(true)
            .with_max_candidates(max_candidates),
    );
    let mut quiet: Vec<Suggestion> = tiers
        .capped_rest(max_candidates)
        .iter()
        .map(|&mv| match difficulty {
            Difficulty::Easy => {
                let placed = board.place(mv, player);
                Suggestion::new(mv, evaluate(&placed, player), SuggestionKind::Score)
            }
            Difficulty::Medium => Suggestion::new(
                mv,
                reply_adjusted_score(board, mv, player, opponent),
                SuggestionKind::Score,
            ),
            Difficulty::Hard => Suggestion::new(
                mv,
                searched_score(&mut searcher, board, mv, player, opponent),
                SuggestionKind::Search,
            ),
        })
        .collect();
    quiet.sort_by(|a, b| b.score.cmp(&a.score));

    suggestions.extend(quiet);
    suggestions.truncate(top_k);
    suggestions
}

/// Own evaluation after `mv`, less the best evaluation the opponent reaches
/// with one of its first [`REPLY_SCAN_LIMIT`] replies.
fn reply_adjusted_score(board: &mut Board, mv: Move, player: Color, opponent: Color) -> i64 {
    let mut placed = board.place(mv, player);
    let own = evaluate(&placed, player);

    let mut best_reply = -INFINITY;
    for reply in candidate_moves(&placed).into_iter().take(REPLY_SCAN_LIMIT) {
        if try_move_is_win(&placed, reply, opponent) {
            best_reply = REPLY_WIN_VALUE;
            break;
        }
        let answered = placed.place(reply, opponent);
        best_reply = max(best_reply, evaluate(&answered, opponent));
    }
    own - best_reply
}

fn searched_score(
    searcher: &mut Searcher,
    board: &mut Board,
    mv: Move,
    player: Color,
    opponent: Color,
) -> i64 {
    let mut placed = board.place(mv, player);
    if is_win_at(&placed, mv, player) {
        return WIN_SCORE;
    }
    searcher.minimax(&mut placed, 1, false, player, opponent, -INFINITY, INFINITY)
}
