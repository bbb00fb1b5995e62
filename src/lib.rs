pub mod cli;
pub mod core;

use anyhow::Result;
use tracing::{debug, info};

/// Application commands that operate on a loaded configuration.
pub enum AppCommand {
    Screen,
}

pub fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("Financial statement screening starting...");

    let config = match config_path {
        Some(path) => core::config::AppConfig::load_from_path(path)?,
        None => core::config::AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    match command {
        AppCommand::Screen => cli::screen::run(&config),
    }
}
