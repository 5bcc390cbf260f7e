//! Interactive game session: text commands driving one [`GameState`].

use crate::config::DisplayConfig;
use time_travel_tictactoe::{GameState, GameView, Position};
use derive_more::{Display, Error};
use tracing::{debug, info, instrument};

/// A user command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Mark a cell for the next player.
    Play(usize),
    /// View an earlier or later step.
    Jump(usize),
    /// Flip the move list order.
    Sort,
    /// Start over with a fresh game.
    New,
    /// End the session.
    Quit,
}

/// A command line that could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unrecognized command: {:?}", input)]
pub struct CommandError {
    /// The offending input.
    pub input: String,
}

impl Command {
    /// Parses one command line.
    ///
    /// Accepts `<cell>`, `play <cell>`, `jump <step>`, `sort`, `new` and
    /// `quit`. Cells may be given as an index (0-8) or a label such as
    /// `center`.
    #[instrument]
    pub fn parse(line: &str) -> Result<Command, CommandError> {
        let err = || CommandError {
            input: line.to_string(),
        };
        let mut words = line.split_whitespace();
        let head = words.next().ok_or_else(err)?.to_lowercase();
        let rest = words.collect::<Vec<_>>().join(" ");

        let command = match (head.as_str(), rest.as_str()) {
            ("sort", "") => Command::Sort,
            ("new", "") => Command::New,
            ("quit" | "q" | "exit", "") => Command::Quit,
            ("jump", step) => Command::Jump(step.parse().map_err(|_| err())?),
            ("play", cell) => Command::Play(parse_cell(cell).ok_or_else(err)?),
            (cell, "") => Command::Play(parse_cell(cell).ok_or_else(err)?),
            _ => return Err(err()),
        };
        Ok(command)
    }
}

/// Numbers pass through unchecked so that out-of-range cells reach the
/// game and are ignored there.
fn parse_cell(s: &str) -> Option<usize> {
    s.parse::<usize>()
        .ok()
        .or_else(|| Position::from_label_or_number(s).map(Position::to_index))
}

/// Effect of applying a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Applied {
    /// The state changed.
    Updated,
    /// The command was a no-op; the reason is for display.
    Ignored(String),
    /// The session should end.
    Quit,
}

/// Owns the game state for one user.
#[derive(Debug, Clone)]
pub struct GameSession {
    state: GameState,
    config: DisplayConfig,
}

impl GameSession {
    /// Creates a session with a fresh game.
    #[instrument]
    pub fn new(config: DisplayConfig) -> Self {
        info!("Creating new game session");
        Self {
            state: Self::fresh_state(&config),
            config,
        }
    }

    fn fresh_state(config: &DisplayConfig) -> GameState {
        let state = GameState::new();
        if *config.sort_descending() {
            state.toggle_sort_order()
        } else {
            state
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Applies one command.
    #[instrument(skip(self), fields(step = self.state.current_step()))]
    pub fn apply(&mut self, command: Command) -> Applied {
        let next = match command {
            Command::Play(cell) => self.state.try_play_move(cell).map_err(|e| e.to_string()),
            Command::Jump(step) => self.state.try_jump_to(step).map_err(|e| e.to_string()),
            Command::Sort => Ok(self.state.toggle_sort_order()),
            Command::New => Ok(Self::fresh_state(&self.config)),
            Command::Quit => return Applied::Quit,
        };

        match next {
            Ok(state) => {
                debug!(step = state.current_step(), "State updated");
                self.state = state;
                Applied::Updated
            }
            Err(reason) => {
                debug!(%reason, "Command ignored");
                Applied::Ignored(reason)
            }
        }
    }

    /// Derived view of the current state.
    pub fn view(&self) -> GameView {
        self.state.view()
    }

    /// Renders the current view as configured.
    pub fn render(&self) -> Result<String, serde_json::Error> {
        let view = self.view();
        if *self.config.json() {
            serde_json::to_string_pretty(&view)
        } else {
            Ok(view.render_text())
        }
    }
}
