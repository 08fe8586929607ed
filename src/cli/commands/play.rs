//! Play command - play a game against the computer.

use gomoku::board::color::Color;
use gomoku::board::position::EMPTY_POSITION;
use gomoku::board::Board;
use gomoku::game::mode::HumanVsComputer;
use gomoku::suggest::Difficulty;
use structopt::StructOpt;

use super::util::{create_config, run_game_loop};
use super::Command;

#[derive(StructOpt)]
pub struct PlayArgs {
    #[structopt(short, long, default_value = "medium")]
    pub difficulty: Difficulty,
    #[structopt(short = "c", long = "color", default_value = "random")]
    pub color: Color,
    #[structopt(long, help = "Seed for the computer's random choices")]
    pub seed: Option<u64>,
    #[structopt(long = "position", default_value = EMPTY_POSITION)]
    pub starting_position: Board,
}

impl Command for PlayArgs {
    fn execute(self) {
        let config = create_config(self.difficulty, self.seed, self.starting_position);
        run_game_loop(
            HumanVsComputer {
                human_color: self.color,
            },
            config,
        );
    }
}
