use log::debug;

use crate::game::display::GameDisplay;
use crate::game::engine::{Engine, EngineConfig, GameEnding};
use crate::game::input::MoveInput;
use crate::suggest::{Suggestion, DEFAULT_TOP_K};

use super::mode::GameMode;

pub struct GameLoop<T: GameMode> {
    engine: Engine,
    ui: GameDisplay,
    mode: T,
    hints: Vec<Suggestion>,
}

impl<T: GameMode> GameLoop<T> {
    pub fn new(mode: T, config: EngineConfig) -> Self {
        Self {
            engine: Engine::with_config(config),
            ui: GameDisplay::new(),
            mode,
            hints: Vec::new(),
        }
    }

    pub fn run(&mut self) {
        // errors stay on screen until the next accepted input
        let mut redraw = true;
        loop {
            if redraw {
                self.mode.render(&mut self.ui, &self.engine, &self.hints);
            }

            if let Some(ending) = self.engine.check_game_over() {
                match ending {
                    GameEnding::Win(color) => println!("{} wins!", color),
                    GameEnding::Draw => println!("Draw!"),
                }
                break;
            }

            let input = match self.mode.get_move(self.engine.turn()) {
                Some(MoveInput::Quit) => break,
                Some(MoveInput::Hint) => {
                    self.hints = self.engine.suggestions(DEFAULT_TOP_K);
                    redraw = true;
                    continue;
                }
                Some(input) => input,
                None => {
                    println!("Invalid input");
                    redraw = false;
                    continue;
                }
            };

            match self.engine.make_move_from_input(input) {
                Ok(_) => {
                    self.hints.clear();
                    if input == MoveInput::Undo {
                        self.undo_computer_replies();
                    }
                    if let Some(delay) = self.mode.frame_delay() {
                        std::thread::sleep(delay);
                    }
                    redraw = true;
                }
                Err(error) => {
                    println!("error: {}", error);
                    redraw = false;
                }
            }
        }
    }

    /// Keeps undoing until a human is to move again.
    fn undo_computer_replies(&mut self) {
        while self.mode.is_computer(self.engine.turn()) {
            match self.engine.undo_move() {
                Ok(mv) => debug!("Took back computer move {}", mv),
                Err(_) => break,
            }
        }
    }
}
