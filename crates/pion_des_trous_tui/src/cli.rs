//! Command-line interface for pion_des_trous_tui.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Le pion des trous - two-player pawn game for the terminal
#[derive(Parser, Debug)]
#[command(name = "pion_des_trous_tui")]
#[command(about = "Play Le pion des trous in the terminal with the mouse", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game in the terminal
    Play {
        /// Path to a TOML game configuration
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Holes per side of the board (overrides the config file)
        #[arg(long)]
        size: Option<usize>,

        /// Pawns per side (overrides the config file)
        #[arg(long)]
        pawns: Option<u32>,

        /// File to write logs to, so they don't disturb the board
        #[arg(long, default_value = "pion_des_trous.log")]
        log_file: PathBuf,
    },

    /// Print the effective game configuration as TOML
    Config {
        /// Path to a TOML game configuration
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}
