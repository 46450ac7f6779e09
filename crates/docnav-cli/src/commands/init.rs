// Rust guideline compliant 2026-02-06

//! Implementation of the `docnav init` command.
//!
//! Writes a default `.docnav.toml` and installs a Git pre-commit hook that runs
//! `docnav hooks pre-commit`.

use anyhow::Result;
use docnav_core::config::CONFIG_FILE;
use docnav_core::Config;
use git2::Repository;
use std::fs;
use std::path::{Path, PathBuf};

/// Command line the installed pre-commit hook runs.
pub const HOOK_COMMAND: &str = "docnav hooks pre-commit";

/// What `init` did to the pre-commit hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookInstall {
    /// A new hook script was written.
    Created,
    /// The docnav command was appended to an existing hook script.
    Appended,
    /// The existing hook already runs docnav.
    AlreadyPresent,
}

/// Initializes docnav in the repository containing `repo_path`.
///
/// # Returns
///
/// How the pre-commit hook was installed.
///
/// # Errors
///
/// Returns an error if:
/// - `repo_path` is not inside a Git repository
/// - The configuration file cannot be written
/// - The hook script cannot be written or made executable
pub fn execute(repo_path: &Path) -> Result<HookInstall> {
    let repo = Repository::discover(repo_path)
        .map_err(|_| anyhow::anyhow!("Not a git repository. Run 'git init' first."))?;

    let config_path = repo_path.join(CONFIG_FILE);
    if !config_path.exists() {
        Config::default().save(repo_path)?;
        println!("✓ Created {}", CONFIG_FILE);
    }

    let hook_path = hooks_dir(&repo).join("pre-commit");
    let install = install_hook(&hook_path, HOOK_COMMAND)?;
    tracing::debug!(hook = %hook_path.display(), ?install, "pre-commit hook installed");

    match install {
        HookInstall::Created => println!("✓ Installed pre-commit hook"),
        HookInstall::Appended => println!("✓ Added docnav to existing pre-commit hook"),
        HookInstall::AlreadyPresent => println!("✓ Pre-commit hook already runs docnav"),
    }

    Ok(install)
}

fn hooks_dir(repo: &Repository) -> PathBuf {
    repo.path().join("hooks")
}

fn install_hook(path: &Path, command: &str) -> Result<HookInstall> {
    let install = if path.exists() {
        let existing = fs::read_to_string(path)?;
        if existing.lines().any(|line| line.trim() == command) {
            return Ok(HookInstall::AlreadyPresent);
        }
        let separator = if existing.ends_with('\n') { "" } else { "\n" };
        fs::write(path, format!("{existing}{separator}{command}\n"))?;
        HookInstall::Appended
    } else {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, format!("#!/bin/sh\n{}\n", command))?;
        HookInstall::Created
    };

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(path)?.permissions();
        perms.set_mode(0o755);
        fs::set_permissions(path, perms)?;
    }

    Ok(install)
}
