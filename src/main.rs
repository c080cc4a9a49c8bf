//! Tic-tac-toe Arena - CLI entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::sync::Arc;
use tictactoe_arena::{ArenaConfig, RoundMoves, SessionSnapshot, render_text, replay, run_tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = ArenaConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Play => run_play(&config),
        Command::Replay { rounds, json } => run_replay(&config, &rounds, json),
    }
}

fn env_filter(config: &ArenaConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
}

/// Run the interactive terminal UI
fn run_play(config: &ArenaConfig) -> Result<()> {
    // Log to a file; writing to the terminal would corrupt the UI.
    let log_file = std::fs::File::create(config.log_file())?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    run_tui(config)
}

/// Play scripted rounds and print the session
fn run_replay(config: &ArenaConfig, rounds: &[RoundMoves], json: bool) -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .try_init();

    info!(rounds = rounds.len(), "Replaying scripted rounds");
    let engine = replay(rounds);
    let snapshot = SessionSnapshot::capture(&engine, *config.history_limit());

    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        print!("{}", render_text(&snapshot));
    }
    Ok(())
}
