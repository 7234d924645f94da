// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Console logging for the `mintsearch` binary.
//!
//! Logs go to stderr so stdout stays clean for `--json` output and pipes.
//! `RUST_LOG` wins over the configured level; `-v` forces debug.

use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::error::{Result, SearchError};

/// Install the global subscriber. Fails if one is already installed.
pub fn setup_console_logging(log_level: &str, verbose: bool) -> Result<()> {
    let env_filter = if verbose {
        EnvFilter::new("debug")
    } else {
        let level = parse_log_level(log_level).unwrap_or(Level::WARN);
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()))
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(env_filter)
        .try_init()
        .map_err(|e| SearchError::Config(format!("failed to initialize logging: {}", e)))?;

    tracing::debug!(level = log_level, verbose, "logging initialized");
    Ok(())
}

/// Parse a level name. `warning` is accepted as `warn`.
pub fn parse_log_level(level: &str) -> Option<Level> {
    match level.trim().to_lowercase().as_str() {
        "trace" => Some(Level::TRACE),
        "debug" => Some(Level::DEBUG),
        "info" => Some(Level::INFO),
        "warn" | "warning" => Some(Level::WARN),
        "error" => Some(Level::ERROR),
        _ => None,
    }
}
