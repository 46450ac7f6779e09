// Rust guideline compliant 2026-02-06

//! Hook command wrappers for invoking docnav Git hooks from the CLI.

use anyhow::Result;
use docnav_core::Config;
use std::path::Path;

/// Runs the requested hook action.
///
/// # Arguments
///
/// * `repo_path` - Repository root
/// * `config` - Loaded docnav configuration
/// * `action` - Hook to run
///
/// # Errors
///
/// Returns an error if the hook fails.
pub fn execute(repo_path: &Path, config: &Config, action: HookAction) -> Result<()> {
    match action {
        HookAction::PreCommit => docnav_hooks::pre_commit_hook(repo_path, config).map(|_| ()),
    }
}

/// Supported hook actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::Subcommand)]
pub enum HookAction {
    /// Run the pre-commit hook
    PreCommit,
}
