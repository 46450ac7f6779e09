// Rust guideline compliant 2026-02-06

//! Docnav CLI Application
//!
//! Command-line interface for the documentation navigator.

use clap::Parser;
use docnav_cli::commands;
use docnav_core::Config;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "docnav",
    version,
    about = "Docnav: previous/next navigation for markdown documentation",
    long_about = "Docnav reads the documentation links in README.md, treats their order as the reading order, and writes previous/next navigation lines at the top and bottom of every linked page.",
    after_help = "Examples:\n  docnav init\n  docnav run\n  docnav run --check\n  docnav run --index INDEX.md --json\n  docnav hooks pre-commit\n"
)]
struct Cli {
    /// Override the configured log level (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Write default configuration and install the pre-commit hook
    Init,

    /// Rewrite navigation in every documentation page linked from the index
    Run {
        /// Index document to read instead of the configured one
        #[arg(long)]
        index: Option<PathBuf>,

        /// Report out-of-date pages without writing; fail if any are found
        #[arg(long)]
        check: bool,

        /// Print the run report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run docnav Git hooks
    Hooks {
        #[command(subcommand)]
        action: commands::hooks::HookAction,
    },
}

fn load_config(repo_path: &Path, log_level: Option<String>) -> anyhow::Result<Config> {
    let mut config = Config::load(repo_path)?;
    if let Some(level) = log_level {
        config.log_level = level.to_lowercase();
        config.validate()?;
    }
    docnav_hooks::init_tracing(&config.log_level)?;
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let repo_path = std::env::current_dir()?;

    match cli.command {
        Some(Commands::Init) => {
            docnav_hooks::init_tracing(cli.log_level.as_deref().unwrap_or("warn"))?;
            commands::init::execute(&repo_path)?;
        }
        Some(Commands::Run { index, check, json }) => {
            let config = load_config(&repo_path, cli.log_level)?;
            let args = commands::run::RunArgs { index, check, json };
            commands::run::execute(&repo_path, &config, &args)?;
        }
        Some(Commands::Hooks { action }) => {
            let config = load_config(&repo_path, cli.log_level)?;
            commands::hooks::execute(&repo_path, &config, action)?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}
