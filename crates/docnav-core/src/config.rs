// Rust guideline compliant 2026-02-06

//! Configuration management for docnav.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File name of the configuration file at the repository root.
pub const CONFIG_FILE: &str = ".docnav.toml";

const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// Configuration for docnav behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Index document, relative to the repository root.
    #[serde(default = "default_index_file")]
    pub index_file: String,

    /// Folder prefix that documentation links must start with.
    #[serde(default = "default_docs_dir")]
    pub docs_dir: String,

    /// Maximum log level for diagnostics written to stderr.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_index_file() -> String {
    "README.md".to_string()
}

fn default_docs_dir() -> String {
    "docs".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            index_file: default_index_file(),
            docs_dir: default_docs_dir(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `.docnav.toml`
    /// 3. Environment variables with `DOCNAV_` prefix
    ///
    /// # Arguments
    ///
    /// * `repo_root` - Directory containing `.docnav.toml`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(repo_root: &Path) -> Result<Self> {
        Self::load_with(repo_root, |key| std::env::var(key).ok())
    }

    /// Same as [`Config::load`], reading overrides through `lookup` instead of
    /// the process environment.
    ///
    /// # Errors
    ///
    /// See [`Config::load`].
    pub fn load_with<F>(repo_root: &Path, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        let config_path = repo_root.join(CONFIG_FILE);
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            config = toml::from_str(&content)
                .map_err(|e| Error::InvalidConfig(format!("Invalid config file: {}", e)))?;
            config.log_level = config.log_level.to_lowercase();
        }

        config.apply_overrides(lookup);
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `DOCNAV_INDEX_FILE` - Index document path
    /// - `DOCNAV_DOCS_DIR` - Documentation folder prefix
    /// - `DOCNAV_LOG_LEVEL` - Log level (error/warn/info/debug/trace)
    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("DOCNAV_INDEX_FILE") {
            self.index_file = val;
        }
        if let Some(val) = lookup("DOCNAV_DOCS_DIR") {
            self.docs_dir = val;
        }
        if let Some(val) = lookup("DOCNAV_LOG_LEVEL") {
            self.log_level = val.to_lowercase();
        }
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `index_file` or `docs_dir` is empty
    /// - `docs_dir` starts or ends with `/`
    /// - `log_level` is not a known level
    pub fn validate(&self) -> Result<()> {
        if self.index_file.trim().is_empty() {
            return Err(Error::InvalidConfig(
                "index_file cannot be empty".to_string(),
            ));
        }

        if self.docs_dir.trim().is_empty() {
            return Err(Error::InvalidConfig("docs_dir cannot be empty".to_string()));
        }

        if self.docs_dir.starts_with('/') || self.docs_dir.ends_with('/') {
            return Err(Error::InvalidConfig(format!(
                "docs_dir must not start or end with '/', got '{}'",
                self.docs_dir
            )));
        }

        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(Error::InvalidConfig(format!(
                "log_level must be one of {}, got '{}'",
                LOG_LEVELS.join(", "),
                self.log_level
            )));
        }

        Ok(())
    }

    /// Saves the configuration to `.docnav.toml` in `repo_root`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be written.
    pub fn save(&self, repo_root: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::InvalidConfig(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(repo_root.join(CONFIG_FILE), content)?;
        Ok(())
    }
}
