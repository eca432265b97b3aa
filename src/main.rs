//! Assistant Bot - Main entry point
//!
//! Runs the interactive contact book on stdin/stdout. Logs go to stderr.

use anyhow::Result;
use assistant_bot::{router, CommandRouter, Config};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env();

    // RUST_LOG wins over LOG_LEVEL; stdout is reserved for the REPL
    let level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| Config::default().log_level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(upcoming_days = config.upcoming_days, "Starting assistant bot");

    let mut command_router = CommandRouter::from_config(&config);
    let stdin = io::stdin();
    let stdout = io::stdout();
    router::run(&mut command_router, stdin.lock(), stdout.lock(), &config.prompt)?;

    info!("Assistant bot shutdown complete");
    Ok(())
}
