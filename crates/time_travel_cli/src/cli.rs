//! Command-line interface for time_travel_tictactoe.

use clap::{Parser, Subcommand};

/// Tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "time_travel_tictactoe")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML display configuration
    #[arg(long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Print views as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Start with the move list newest first
    #[arg(long, global = true)]
    pub descending: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Apply a command script and print the final view
    Replay {
        /// Commands, e.g. `4 0 "jump 1" sort`
        #[arg(required = true)]
        commands: Vec<String>,
    },

    /// Read commands from stdin and print the view after each one
    Play,
}
