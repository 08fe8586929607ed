use termion::{clear, cursor};

use crate::board::{Board, Cell, Color, BOARD_SIZE};
use crate::moves::Move;
use crate::suggest::Suggestion;

/// Frame buffer for the terminal game view. Each frame clears the screen and
/// redraws the whole board.
pub struct GameDisplay {
    buffer: String,
}

impl Default for GameDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl GameDisplay {
    pub fn new() -> Self {
        Self {
            buffer: String::with_capacity(2048),
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.buffer
            .push_str(&format!("{}{}", cursor::Goto(1, 1), clear::All));
    }

    pub fn render_game_state(
        &mut self,
        board: &Board,
        current_turn: Color,
        last_move: Option<Move>,
        stats: Option<&str>,
        hints: &[Suggestion],
    ) {
        self.clear();
        self.write_board(board, last_move, hints);

        self.buffer.push_str(&format!("\nTurn: {}\n", current_turn));
        if let Some(mv) = last_move {
            self.buffer.push_str(&format!("Last move: {}\n", mv));
        }
        if let Some(stats) = stats {
            self.buffer.push_str(&format!("\n{}\n", stats));
        }
        if !hints.is_empty() {
            self.buffer.push_str("\nSuggestions:\n");
            for (rank, hint) in hints.iter().enumerate() {
                self.buffer.push_str(&format!("  {}. {}\n", rank + 1, hint));
            }
        }

        print!("{}", self.buffer);
    }

    /// The last move is bracketed; suggested cells show their rank.
    fn write_board(&mut self, board: &Board, last_move: Option<Move>, hints: &[Suggestion]) {
        self.buffer.push_str("   ");
        for col in 0..BOARD_SIZE {
            self.buffer.push_str(&format!("{:>3}", col));
        }
        self.buffer.push('\n');

        for mv in Move::all() {
            if mv.col() == 0 {
                self.buffer.push_str(&format!("{:>3}", mv.row()));
            }
            let rank = hints.iter().position(|hint| hint.mv == mv);
            let glyph = match (board.get(mv), rank) {
                (Cell::Empty, Some(rank)) => {
                    std::char::from_digit(rank as u32 + 1, 10).unwrap_or('*')
                }
                (Cell::Empty, _) => '+',
                (cell, _) => cell.to_char(),
            };
            if Some(mv) == last_move {
                self.buffer.push_str(&format!("[{}]", glyph));
            } else {
                self.buffer.push_str(&format!("{:>3}", glyph));
            }
            if mv.col() == BOARD_SIZE - 1 {
                self.buffer.push('\n');
            }
        }
    }

    pub fn buffer(self) -> String {
        self.buffer
    }
}
