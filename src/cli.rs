//! Command-line interface for tictactoe_arena.

use clap::{Parser, Subcommand};
use tictactoe_arena::RoundMoves;

/// Tic-tac-toe Arena - two players, one keyboard, a running scoreboard
#[derive(Parser, Debug)]
#[command(name = "tictactoe_arena")]
#[command(about = "Two-player terminal tic-tac-toe with scoreboard and history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./tictactoe_arena.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play,

    /// Play scripted rounds and print the resulting session
    Replay {
        /// Cell indices (0-8) of one round, comma separated; repeat for more rounds
        #[arg(short, long = "round", required = true)]
        rounds: Vec<RoundMoves>,

        /// Print the session as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_replay_rounds() {
        let cli = Cli::try_parse_from([
            "tictactoe_arena",
            "replay",
            "--round",
            "0,3,1,4,2",
            "-r",
            "4",
            "--json",
        ])
        .expect("valid arguments");

        match cli.command {
            Command::Replay { rounds, json } => {
                assert_eq!(rounds, vec![RoundMoves(vec![0, 3, 1, 4, 2]), RoundMoves(vec![4])]);
                assert!(json);
            }
            Command::Play => panic!("expected replay"),
        }
    }

    #[test]
    fn test_bad_round_rejected() {
        let result = Cli::try_parse_from(["tictactoe_arena", "replay", "--round", "a,b"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::try_parse_from(["tictactoe_arena", "play", "--config", "arena.toml"])
            .expect("valid arguments");
        assert_eq!(cli.config, Some(std::path::PathBuf::from("arena.toml")));
    }
}
