use std::time::Duration;

use crate::board::Color;
use crate::game::display::GameDisplay;
use crate::game::engine::Engine;
use crate::game::input::{parse_move_input, MoveInput};
use crate::suggest::Suggestion;

/// Who plays each color and how the game is shown.
pub trait GameMode {
    fn get_move(&self, current_turn: Color) -> Option<MoveInput>;
    fn render(&self, ui: &mut GameDisplay, engine: &Engine, hints: &[Suggestion]);
    fn frame_delay(&self) -> Option<Duration>;

    /// True if `turn` is played by the computer, so an undo should also take
    /// back the computer's reply.
    fn is_computer(&self, turn: Color) -> bool;
}

pub struct HumanVsComputer {
    pub human_color: Color,
}

pub struct ComputerVsComputer {
    /// The engine can calculate moves very quickly, so adding a slight delay
    /// between moves makes the game easier to observe.
    pub delay_between_moves: Option<Duration>,
}

pub struct HumanVsHuman;

const PROMPT: &str = "Enter a move as `row,col` (or `hint`, `undo`, `quit`):";

fn stats_display(engine: &Engine) -> String {
    let stats = engine.get_search_stats();
    format!(
        "* Difficulty: {}\n* Score: {}\n* Positions searched: {} (depth: {}, cutoffs: {})\n* Move took: {}",
        engine.difficulty(),
        stats.last_score.map_or("-".to_string(), |s| s.to_string()),
        stats.positions_searched,
        stats.depth.map_or("-".to_string(), |d| d.to_string()),
        stats.cutoffs,
        stats
            .last_search_duration
            .map_or("-".to_string(), |d| format!("{:?}", d))
    )
}

impl GameMode for HumanVsComputer {
    fn get_move(&self, current_turn: Color) -> Option<MoveInput> {
        if current_turn == self.human_color {
            parse_move_input().ok()
        } else {
            Some(MoveInput::UseEngine)
        }
    }

    fn render(&self, ui: &mut GameDisplay, engine: &Engine, hints: &[Suggestion]) {
        let stats = stats_display(engine);
        ui.render_game_state(
            engine.board(),
            engine.turn(),
            engine.last_move(),
            Some(&stats),
            hints,
        );
        if engine.turn() == self.human_color {
            println!("{}", PROMPT);
        }
    }

    fn frame_delay(&self) -> Option<Duration> {
        None
    }

    fn is_computer(&self, turn: Color) -> bool {
        turn != self.human_color
    }
}

impl GameMode for ComputerVsComputer {
    fn get_move(&self, _current_turn: Color) -> Option<MoveInput> {
        Some(MoveInput::UseEngine)
    }

    fn render(&self, ui: &mut GameDisplay, engine: &Engine, hints: &[Suggestion]) {
        let stats = stats_display(engine);
        ui.render_game_state(
            engine.board(),
            engine.turn(),
            engine.last_move(),
            Some(&stats),
            hints,
        );
    }

    fn frame_delay(&self) -> Option<Duration> {
        self.delay_between_moves
    }

    fn is_computer(&self, _turn: Color) -> bool {
        true
    }
}

impl GameMode for HumanVsHuman {
    fn get_move(&self, _current_turn: Color) -> Option<MoveInput> {
        parse_move_input().ok()
    }

    fn render(&self, ui: &mut GameDisplay, engine: &Engine, hints: &[Suggestion]) {
        ui.render_game_state(
            engine.board(),
            engine.turn(),
            engine.last_move(),
            None,
            hints,
        );
        println!("{}", PROMPT);
    }

    fn frame_delay(&self) -> Option<Duration> {
        None
    }

    fn is_computer(&self, _turn: Color) -> bool {
        false
    }
}
