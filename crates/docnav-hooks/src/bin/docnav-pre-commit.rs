// Rust guideline compliant 2026-02-06

//! CLI entry point for the docnav pre-commit hook.

use docnav_core::Config;

fn main() -> anyhow::Result<()> {
    let repo_path = std::env::current_dir()?;
    let config = Config::load(&repo_path)?;
    docnav_hooks::init_tracing(&config.log_level)?;
    docnav_hooks::pre_commit_hook(&repo_path, &config)?;
    Ok(())
}
