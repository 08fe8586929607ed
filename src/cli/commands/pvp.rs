//! PvP command - play a game against another human.

use gomoku::board::position::EMPTY_POSITION;
use gomoku::board::Board;
use gomoku::game::mode::HumanVsHuman;
use gomoku::suggest::Difficulty;
use structopt::StructOpt;

use super::util::{create_config, run_game_loop};
use super::Command;

#[derive(StructOpt)]
pub struct PvpArgs {
    #[structopt(
        short,
        long,
        default_value = "medium",
        help = "Difficulty used to rank `hint` suggestions"
    )]
    pub difficulty: Difficulty,
    #[structopt(long = "position", default_value = EMPTY_POSITION)]
    pub starting_position: Board,
}

impl Command for PvpArgs {
    fn execute(self) {
        let config = create_config(self.difficulty, None, self.starting_position);
        run_game_loop(HumanVsHuman, config);
    }
}
