//! Watch command - watch the computer play against itself.

use std::time::Duration;

use gomoku::board::position::EMPTY_POSITION;
use gomoku::board::Board;
use gomoku::game::mode::ComputerVsComputer;
use gomoku::suggest::Difficulty;
use structopt::StructOpt;

use super::util::{create_config, run_game_loop};
use super::Command;

#[derive(StructOpt)]
pub struct WatchArgs {
    #[structopt(short, long, default_value = "medium")]
    pub difficulty: Difficulty,
    #[structopt(long, help = "Seed for the computer's random choices")]
    pub seed: Option<u64>,
    #[structopt(long = "position", default_value = EMPTY_POSITION)]
    pub starting_position: Board,
    #[structopt(
        long = "delay",
        default_value = "500",
        help = "Delay between moves in milliseconds"
    )]
    pub delay_ms: u64,
}

impl Command for WatchArgs {
    fn execute(self) {
        let config = create_config(self.difficulty, self.seed, self.starting_position);
        run_game_loop(
            ComputerVsComputer {
                delay_between_moves: Some(Duration::from_millis(self.delay_ms)),
            },
            config,
        );
    }
}
