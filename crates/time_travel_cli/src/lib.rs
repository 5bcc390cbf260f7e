//! Command-line front end for time-travel tic-tac-toe.
//!
//! - **Session**: text commands driving one [`GameState`](time_travel_tictactoe::GameState)
//! - **Config**: display settings loaded from TOML

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod session;

// Crate-level exports - Configuration
pub use config::{ConfigError, DisplayConfig};

// Crate-level exports - Session management
pub use session::{Applied, Command as SessionCommand, CommandError, GameSession};
