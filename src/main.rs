//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `aws_ip_ranges` library that handles:
//! - Environment variable loading (.env file)
//! - Command-line argument parsing
//! - Logger initialization
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use aws_ip_ranges::initialization::init_logger_with;
use aws_ip_ranges::{run_server, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine; PORT and friends may come from the real environment
    let _ = dotenvy::dotenv();

    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    if let Err(e) = run_server(config).await {
        log::error!("aws_ip_ranges error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}
