// Rust guideline compliant 2026-02-06

//! Implementation of the `docnav run` command.

use anyhow::Result;
use docnav_core::{Config, Report, RunMode};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Arguments of `docnav run`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunArgs {
    /// Index document overriding `index_file` from the config.
    pub index: Option<PathBuf>,
    /// Report instead of writing.
    pub check: bool,
    /// Print the report as JSON instead of progress lines.
    pub json: bool,
}

/// Executes the run command, printing to stdout.
///
/// # Errors
///
/// Returns an error if the pipeline fails, or in check mode when some page
/// has out-of-date navigation.
pub fn execute(repo_path: &Path, config: &Config, args: &RunArgs) -> Result<Report> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute_to(repo_path, config, args, &mut out)
}

/// Executes the run command, writing output to `out`.
///
/// # Errors
///
/// See [`execute`].
pub fn execute_to<W: Write>(
    repo_path: &Path,
    config: &Config,
    args: &RunArgs,
    out: &mut W,
) -> Result<Report> {
    let mut config = config.clone();
    if let Some(index) = &args.index {
        config.index_file = index.to_string_lossy().into_owned();
    }
    let mode = if args.check {
        RunMode::Check
    } else {
        RunMode::Write
    };

    let report = if args.json {
        let report = docnav_hooks::run_hook(repo_path, &config, mode, &mut std::io::sink())?;
        writeln!(out, "{}", report.to_json()?)?;
        report
    } else {
        docnav_hooks::run_hook(repo_path, &config, mode, out)?
    };

    if !report.is_clean() {
        anyhow::bail!("Documentation navigation is out of date. Run 'docnav run' to update it.");
    }

    Ok(report)
}
