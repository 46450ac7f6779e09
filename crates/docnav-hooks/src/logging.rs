// Rust guideline compliant 2026-02-06

//! Diagnostic logging for the docnav binaries.
//!
//! Diagnostics go to stderr so they never mix with the progress lines the
//! hook prints on stdout.

use anyhow::{bail, Result};
use tracing::Level;
use tracing_subscriber::fmt;

/// Installs a global `tracing` subscriber writing to stderr.
///
/// Calling this more than once keeps the first subscriber.
///
/// # Errors
///
/// Returns an error if `level` is not a known log level.
pub fn init_tracing(level: &str) -> Result<()> {
    let level = parse_log_level(level)?;
    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
    Ok(())
}

/// Parses a case-insensitive log level name.
///
/// # Errors
///
/// Returns an error for names other than error, warn, info, debug, trace.
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        "trace" => Ok(Level::TRACE),
        other => bail!("Unknown log level '{}'", other),
    }
}
