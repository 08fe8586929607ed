mod cli;

use cli::commands::Command;
use cli::Gomoku;
use structopt::StructOpt;

fn main() {
    env_logger::init();
    Gomoku::from_args().execute();
}
