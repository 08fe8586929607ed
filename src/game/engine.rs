use std::time::{Duration, Instant};

use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use thiserror::Error;

use crate::board::error::BoardError;
use crate::board::{Board, Color};
use crate::game::input::MoveInput;
use crate::geometry::{empty_cells, find_five, is_win_at};
use crate::move_orderer::CandidateCap;
use crate::moves::Move;
use crate::searcher::{ai_easy, Searcher};
use crate::suggest::{suggest_moves, Difficulty, Suggestion};

/// Candidate cap used for the hint list.
pub const SUGGESTION_CAP: usize = 12;

/// Core engine configuration
#[derive(Clone, Debug)]
pub struct EngineConfig {
    pub difficulty: Difficulty,
    /// Seeds the computer's random choices; `None` draws from entropy.
    pub seed: Option<u64>,
    pub starting_position: Board,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            seed: None,
            starting_position: Board::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEnding {
    Win(Color),
    Draw,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum EngineError {
    #[error("{0}")]
    Board(#[from] BoardError),
    #[error("the game is already over")]
    GameOver,
    #[error("there are no moves to undo")]
    NothingToUndo,
    #[error("there are no moves left to play")]
    NoMovesAvailable,
}

/// Search performance statistics
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchStats {
    pub positions_searched: usize,
    pub cutoffs: usize,
    pub depth: Option<u8>,
    pub last_score: Option<i64>,
    pub last_search_duration: Option<Duration>,
}

/// A game in progress: the board, whose turn it is and how it got there.
pub struct Engine {
    board: Board,
    turn: Color,
    move_history: Vec<(Move, Color)>,
    ending: Option<GameEnding>,
    difficulty: Difficulty,
    rng: StdRng,
    stats: SearchStats,
}

impl Default for Engine {
    fn default() -> Self {
        Self::with_config(EngineConfig::default())
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Black moves first, so on a starting position with more black stones
    /// than white it is white's turn.
    pub fn with_config(config: EngineConfig) -> Self {
        let board = config.starting_position;
        let turn = if board.count_stones(Color::Black) > board.count_stones(Color::White) {
            Color::White
        } else {
            Color::Black
        };
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let ending = match find_five(&board) {
            Some(winner) => Some(GameEnding::Win(winner)),
            None if board.is_full() => Some(GameEnding::Draw),
            None => None,
        };

        Self {
            board,
            turn,
            move_history: Vec::new(),
            ending,
            difficulty: config.difficulty,
            rng,
            stats: SearchStats::default(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn check_game_over(&self) -> Option<GameEnding> {
        self.ending
    }

    pub fn last_move(&self) -> Option<Move> {
        self.move_history.last().map(|&(mv, _)| mv)
    }

    pub fn move_history(&self) -> &[(Move, Color)] {
        &self.move_history
    }

    pub fn get_search_stats(&self) -> SearchStats {
        self.stats
    }

    /// Plays `mv` for the side to move and reports how the game ended, if
    /// it did.
    pub fn make_move(&mut self, mv: Move) -> Result<Option<GameEnding>, EngineError> {
        if self.ending.is_some() {
            return Err(EngineError::GameOver);
        }
        self.board.put(mv, self.turn)?;
        self.move_history.push((mv, self.turn));

        if is_win_at(&self.board, mv, self.turn) {
            info!("{} wins with {}", self.turn, mv);
            self.ending = Some(GameEnding::Win(self.turn));
        } else if self.board.is_full() {
            info!("Board is full, game drawn");
            self.ending = Some(GameEnding::Draw);
        }
        self.turn = self.turn.opposite();
        Ok(self.ending)
    }

    /// Takes back the last move, giving the turn back to whoever played it.
    pub fn undo_move(&mut self) -> Result<Move, EngineError> {
        let (mv, color) = self.move_history.pop().ok_or(EngineError::NothingToUndo)?;
        self.board.remove(mv)?;
        self.turn = color;
        self.ending = None;
        Ok(mv)
    }

    /// The computer's choice for the side to move at the configured
    /// difficulty. Falls back to a random empty cell if the policy has no
    /// answer.
    pub fn get_best_move(&mut self) -> Result<Move, EngineError> {
        if self.ending.is_some() {
            return Err(EngineError::GameOver);
        }
        let mover = self.turn;
        let opponent = mover.opposite();

        let chosen = match self.difficulty.search_preset() {
            None => {
                self.stats = SearchStats::default();
                ai_easy(&self.board, mover, opponent, &mut self.rng)
            }
            Some(params) => {
                let mut searcher = Searcher::new(params);
                let started = Instant::now();
                let outcome = searcher.search(&mut self.board, mover, opponent);
                self.stats = SearchStats {
                    positions_searched: searcher.searched_position_count(),
                    cutoffs: searcher.termination_count(),
                    depth: Some(params.depth),
                    last_score: outcome.map(|o| o.score),
                    last_search_duration: Some(started.elapsed()),
                };
                outcome.map(|o| o.best_move)
            }
        };

        match chosen {
            Some(mv) => Ok(mv),
            None => {
                debug!("No policy move for {}, picking a random empty cell", mover);
                empty_cells(&self.board)
                    .choose(&mut self.rng)
                    .copied()
                    .ok_or(EngineError::NoMovesAvailable)
            }
        }
    }

    pub fn make_best_move(&mut self) -> Result<Move, EngineError> {
        let best_move = self.get_best_move()?;
        self.make_move(best_move)?;
        Ok(best_move)
    }

    /// Ranked hints for the side to move at the configured difficulty.
    pub fn suggestions(&mut self, top_k: usize) -> Vec<Suggestion> {
        if self.ending.is_some() {
            return Vec::new();
        }
        suggest_moves(
            &mut self.board,
            self.turn,
            self.difficulty,
            top_k,
            CandidateCap::Capped(SUGGESTION_CAP),
        )
    }

    /// Applies a placement, engine move or undo. Returns the move played or
    /// taken back; hints and quitting are left to the caller.
    pub fn make_move_from_input(&mut self, input: MoveInput) -> Result<Option<Move>, EngineError> {
        match input {
            MoveInput::Place(mv) => self.make_move(mv).map(|_| Some(mv)),
            MoveInput::UseEngine => self.make_best_move().map(Some),
            MoveInput::Undo => self.undo_move().map(Some),
            MoveInput::Hint | MoveInput::Quit => Ok(None),
        }
    }
}
