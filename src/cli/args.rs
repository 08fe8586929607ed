//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{
    best_move::BestMoveArgs, play::PlayArgs, pvp::PvpArgs, suggest::SuggestArgs,
    watch::WatchArgs,
};

#[derive(StructOpt)]
#[structopt(name = "gomoku", about = "A 15x15 Gomoku engine implemented in Rust")]
pub enum Gomoku {
    #[structopt(
        name = "play",
        about = "Play a game against the computer at the given `--difficulty` (default: medium). Your color will be chosen at random unless you specify it with `--color`. Type `hint` during your turn for ranked suggestions, or `undo` to take back your last move."
    )]
    Play(PlayArgs),
    #[structopt(
        name = "pvp",
        about = "Play a game against another human on this local machine. The initial position can be given with `--position` (default: empty board)."
    )]
    Pvp(PvpArgs),
    #[structopt(
        name = "watch",
        about = "Watch the computer play against itself at the given `--difficulty` (default: medium)."
    )]
    Watch(WatchArgs),
    #[structopt(
        name = "best-move",
        about = "Search a position given with `--position` (required) and print the best move for the side to move. Depth, alpha-beta pruning and the candidate cap can be set with `--depth`, `--alpha-beta` and `--max-candidates`."
    )]
    BestMove(BestMoveArgs),
    #[structopt(
        name = "suggest",
        about = "Print ranked move suggestions for a position given with `--position` (required) at the given `--difficulty` (default: medium)."
    )]
    Suggest(SuggestArgs),
}

impl crate::cli::commands::Command for Gomoku {
    fn execute(self) {
        macro_rules! execute_command {
            ($($variant:ident($cmd:ident)),+ $(,)?) => {
                match self {
                    $(Self::$variant($cmd) => $cmd.execute(),)+
                }
            };
        }

        execute_command! {
            Play(cmd),
            Pvp(cmd),
            Watch(cmd),
            BestMove(cmd),
            Suggest(cmd),
        }
    }
}
