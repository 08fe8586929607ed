//! Shared utilities for CLI commands.

use gomoku::board::{Board, Color};
use gomoku::game::engine::EngineConfig;
use gomoku::game::mode::GameMode;
use gomoku::game::r#loop::GameLoop;
use gomoku::suggest::Difficulty;

pub(crate) fn run_game_loop<T: GameMode>(mode: T, config: EngineConfig) {
    let mut game = GameLoop::new(mode, config);
    game.run();
}

pub(crate) fn create_config(
    difficulty: Difficulty,
    seed: Option<u64>,
    starting_position: Board,
) -> EngineConfig {
    EngineConfig {
        difficulty,
        seed,
        starting_position,
    }
}

/// The explicit `--color`, or whoever is due to move given the stone counts.
pub(crate) fn side_to_move(board: &Board, color: Option<Color>) -> Color {
    color.unwrap_or_else(|| {
        if board.count_stones(Color::Black) > board.count_stones(Color::White) {
            Color::White
        } else {
            Color::Black
        }
    })
}
