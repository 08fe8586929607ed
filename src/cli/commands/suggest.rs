//! Suggest command - print ranked suggestions for a position.

use gomoku::board::color::Color;
use gomoku::board::Board;
use gomoku::move_orderer::CandidateCap;
use gomoku::suggest::{suggest_moves, Difficulty};
use structopt::StructOpt;

use super::util::side_to_move;
use super::Command;

#[derive(StructOpt)]
pub struct SuggestArgs {
    #[structopt(short, long, default_value = "medium")]
    pub difficulty: Difficulty,
    #[structopt(short = "k", long = "top-k", default_value = "6")]
    pub top_k: usize,
    #[structopt(long = "max-candidates", default_value = "12")]
    pub max_candidates: usize,
    #[structopt(
        short = "c",
        long = "color",
        help = "Side to suggest for (default: derived from the stone counts)"
    )]
    pub color: Option<Color>,
    #[structopt(long = "position")]
    pub starting_position: Board,
}

impl Command for SuggestArgs {
    fn execute(self) {
        let mut board = self.starting_position;
        let player = side_to_move(&board, self.color);
        let suggestions = suggest_moves(
            &mut board,
            player,
            self.difficulty,
            self.top_k,
            CandidateCap::Capped(self.max_candidates),
        );

        if suggestions.is_empty() {
            eprintln!("There are no moves to suggest in the given position.");
            return;
        }
        for (rank, suggestion) in suggestions.iter().enumerate() {
            println!("{}. {}", rank + 1, suggestion);
        }
    }
}
