//! Best move command - search a position and print the chosen move.

use gomoku::board::color::Color;
use gomoku::board::Board;
use gomoku::searcher::{SearchParams, Searcher};
use structopt::StructOpt;

use super::util::side_to_move;
use super::Command;

#[derive(StructOpt)]
pub struct BestMoveArgs {
    #[structopt(short, long, default_value = "2")]
    pub depth: u8,
    #[structopt(long = "alpha-beta", help = "Prune the search with alpha-beta")]
    pub alpha_beta: bool,
    #[structopt(long = "max-candidates", help = "Quiet candidates searched per node")]
    pub max_candidates: Option<usize>,
    #[structopt(
        short = "c",
        long = "color",
        help = "Side to move (default: derived from the stone counts)"
    )]
    pub color: Option<Color>,
    #[structopt(long = "position")]
    pub starting_position: Board,
}

impl Command for BestMoveArgs {
    fn execute(self) {
        let mut board = self.starting_position;
        let mover = side_to_move(&board, self.color);
        let params = SearchParams::new(self.depth)
            .with_alpha_beta(self.alpha_beta)
            .with_max_candidates(self.max_candidates);

        let mut searcher = Searcher::new(params);
        match searcher.search(&mut board, mover, mover.opposite()) {
            Some(outcome) => println!(
                "{} (score: {}, positions searched: {})",
                outcome.best_move,
                outcome.score,
                searcher.searched_position_count()
            ),
            None => eprintln!("There are no moves to play in the given position."),
        }
    }
}
