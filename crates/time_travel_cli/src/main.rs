//! Time-travel tic-tac-toe - command-line front end.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::io::{BufRead, Write};
use time_travel_cli::{Applied, DisplayConfig, GameSession, SessionCommand};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(cli.config.as_deref())?.with_overrides(cli.descending, cli.json);

    match cli.command {
        Command::Replay { commands } => run_replay(config, &commands),
        Command::Play => run_interactive(config),
    }
}

#[instrument(skip(path))]
fn load_config(path: Option<&std::path::Path>) -> Result<DisplayConfig> {
    match path {
        Some(path) => Ok(DisplayConfig::from_file(path)?),
        None => {
            info!("No config file given, using defaults");
            Ok(DisplayConfig::default())
        }
    }
}

/// Applies every command, then prints the final view.
#[instrument(skip(config))]
fn run_replay(config: DisplayConfig, commands: &[String]) -> Result<()> {
    let mut session = GameSession::new(config);

    for line in commands {
        let command = match SessionCommand::parse(line) {
            Ok(command) => command,
            Err(e) => {
                warn!(error = %e, "Skipping command");
                continue;
            }
        };
        match session.apply(command) {
            Applied::Updated => {}
            Applied::Ignored(reason) => warn!(command = %line, %reason, "Ignored"),
            Applied::Quit => break,
        }
    }

    println!("{}", session.render()?);
    Ok(())
}

/// Reads commands from stdin until `quit` or end of input.
#[instrument(skip(config))]
fn run_interactive(config: DisplayConfig) -> Result<()> {
    let mut session = GameSession::new(config);
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    writeln!(stdout, "{}", session.render()?)?;
    write!(stdout, "> ")?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line.context("Failed to read from stdin")?;
        if line.trim().is_empty() {
            write!(stdout, "> ")?;
            stdout.flush()?;
            continue;
        }

        match SessionCommand::parse(&line) {
            Ok(command) => match session.apply(command) {
                Applied::Updated => writeln!(stdout, "{}", session.render()?)?,
                Applied::Ignored(reason) => writeln!(stdout, "Ignored: {}", reason)?,
                Applied::Quit => break,
            },
            Err(e) => writeln!(
                stdout,
                "{} (try: 0-8, play <cell>, jump <n>, sort, new, quit)",
                e
            )?,
        }
        write!(stdout, "> ")?;
        stdout.flush()?;
    }

    info!("Session ended");
    Ok(())
}
