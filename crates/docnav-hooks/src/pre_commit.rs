// Rust guideline compliant 2026-02-06

//! Pre-commit hook implementation.
//!
//! Rewrites the previous/next navigation of every documentation page linked
//! from the index document, so committed docs always reflect the index order.

use anyhow::Result;
use docnav_core::{process_documentation_files, Config, Report, RunMode, RunOptions};
use std::io::Write;
use std::path::Path;

/// Runs the pre-commit hook, printing progress to stdout.
///
/// # Arguments
///
/// * `repo_path` - Repository root containing the index document
/// * `config` - Loaded docnav configuration
///
/// # Returns
///
/// The run report. Missing documentation files are reported, not failed on.
///
/// # Errors
///
/// Returns an error if:
/// - The index document cannot be read
/// - A documentation file cannot be read or written
pub fn pre_commit_hook(repo_path: &Path, config: &Config) -> Result<Report> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_hook(repo_path, config, RunMode::Write, &mut out)
}

/// Runs the navigation pipeline for `repo_path`, writing progress to `out`.
///
/// # Errors
///
/// See [`pre_commit_hook`].
pub fn run_hook<W: Write>(
    repo_path: &Path,
    config: &Config,
    mode: RunMode,
    out: &mut W,
) -> Result<Report> {
    let index_path = repo_path.join(&config.index_file);
    let options = RunOptions {
        docs_dir: config.docs_dir.clone(),
        mode,
    };
    tracing::info!(index = %index_path.display(), ?mode, "running documentation navigator");

    let report = process_documentation_files(&index_path, &options, out)?;
    Ok(report)
}
