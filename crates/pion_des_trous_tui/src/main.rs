//! Le pion des trous - terminal front-end
//!
//! Renders the board with ratatui and feeds mouse positions through the
//! core's pointer mapper.

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use pion_des_trous::GameConfig;
use std::path::Path;
use tracing::{debug, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            size,
            pawns,
            log_file,
        } => {
            tui::init_file_logging(&log_file)?;
            let config = load_config(config.as_deref(), size, pawns)?;
            tui::run_tui(config)
        }
        Command::Config { config } => {
            tracing_subscriber::fmt()
                .with_env_filter(EnvFilter::from_default_env())
                .with_writer(std::io::stderr)
                .init();

            let config = load_config(config.as_deref(), None, None)?;
            print!("{}", config.to_toml()?);
            Ok(())
        }
    }
}

/// Reads the config file, if any, and applies command-line overrides.
#[instrument]
fn load_config(path: Option<&Path>, size: Option<usize>, pawns: Option<u32>) -> Result<GameConfig> {
    let mut config = match path {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    };
    if let Some(size) = size {
        config = config.with_board_size(size)?;
    }
    if let Some(pawns) = pawns {
        config = config.with_pawn_supply(pawns)?;
    }
    debug!(?config, "Effective configuration");
    Ok(config)
}
