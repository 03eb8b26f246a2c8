//! Logging configuration for the nastrajacz CLI
//!
//! Status lines are the program's stdout output, so diagnostics go to stderr
//! and, optionally, to a log file.

use crate::Result;
use nastrajacz_core::Error;
use std::path::Path;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the logging system
///
/// # Arguments
/// * `verbose` - Enable debug level logging
/// * `log_file` - Optional path to write logs to a file
///
/// # Examples
/// ```ignore
/// // Warnings only
/// init(false, None)?;
///
/// // Verbose mode with debug level
/// init(true, None)?;
///
/// // Write logs to file
/// init(true, Some(Path::new("nastrajacz.log")))?;
/// ```
pub fn init(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    let level = if verbose { "debug" } else { "warn" };

    // RUST_LOG overrides the default filter
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => filter(&format!(
            "nastrajacz={level},nastrajacz_config={level},nastrajacz_engine={level}"
        ))?,
    };

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .with_line_number(false)
        .without_time()
        .compact()
        .with_ansi(true)
        .with_filter(env_filter);

    let file_layer = match log_file {
        Some(log_path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_path)?;

            Some(
                fmt::layer()
                    .with_writer(file)
                    .with_ansi(false)
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true)
                    .pretty()
                    .with_filter(filter("debug")?),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| Error::Message(format!("Failed to initialize logging: {e}")))
}

fn filter(directives: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(directives)
        .map_err(|e| Error::Message(format!("Invalid log filter '{directives}': {e}")))
}
