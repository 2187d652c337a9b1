//! Main application entry point (server binary).
//!
//! This is a thin wrapper around the `dns_toolbox` library that handles:
//! - Environment variable loading (.env file)
//! - Command-line/environment configuration parsing
//! - Logger initialization
//! - Exit codes
//!
//! All service functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use dns_toolbox::initialization::init_logger_with;
use dns_toolbox::{run_server, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env from the current directory, falling back to the executable's directory
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let config = Config::parse();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    if let Err(e) = run_server(config).await {
        log::error!("{e:#}");
        eprintln!("dns_toolbox error: {:#}", e);
        process::exit(1);
    }

    Ok(())
}
