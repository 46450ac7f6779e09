// Rust guideline compliant 2026-02-06

//! End-to-end navigation update driven by the index document.

use crate::links::{LinkExtractor, DEFAULT_DOCS_DIR};
use crate::navigation::add_navigation_links;
use crate::{Error, Result};
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Whether the pipeline rewrites files or only reports on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunMode {
    /// Overwrite every referenced file with updated navigation.
    #[default]
    Write,
    /// Leave files untouched and report which ones are out of date.
    Check,
}

/// Options controlling a pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    /// Folder prefix that documentation links must start with.
    pub docs_dir: String,
    /// Write or check mode.
    pub mode: RunMode,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            docs_dir: DEFAULT_DOCS_DIR.to_string(),
            mode: RunMode::default(),
        }
    }
}

/// What happened to one entry of the ordered link list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileStatus {
    /// File was rewritten with navigation.
    Updated,
    /// File is referenced by the index but does not exist.
    Missing,
    /// Check mode: navigation is out of date.
    Stale,
    /// Check mode: navigation is already up to date.
    Current,
}

/// Outcome for one documentation file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileOutcome {
    /// Path as written in the index document.
    pub path: String,
    /// Result of processing the file.
    pub status: FileStatus,
}

/// Summary of a pipeline run, in index order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Index document the run was driven by.
    pub index: PathBuf,
    /// Run mode.
    pub mode: RunMode,
    /// One outcome per entry of the ordered link list.
    pub files: Vec<FileOutcome>,
}

impl Report {
    /// Paths with the given status, in index order.
    pub fn paths_with(&self, status: FileStatus) -> Vec<&str> {
        self.files
            .iter()
            .filter(|f| f.status == status)
            .map(|f| f.path.as_str())
            .collect()
    }

    /// Returns `true` unless some file has stale navigation.
    pub fn is_clean(&self) -> bool {
        self.files.iter().all(|f| f.status != FileStatus::Stale)
    }

    /// Serializes the report as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Rewrites the navigation of every documentation file the index links to.
///
/// Referenced paths are resolved against the directory containing
/// `index_path`. A progress line per file is written to `out`:
/// `Updated <path>`, `Warning: <path> not found`, and in check mode
/// `Stale <path>` or `Current <path>`.
///
/// # Arguments
///
/// * `index_path` - Path to the index document (e.g. `README.md`)
/// * `options` - Documentation folder and run mode
/// * `out` - Destination for progress lines
///
/// # Errors
///
/// Returns an error if:
/// - The index document cannot be read
/// - A referenced file exists but cannot be read or written
/// - Progress output fails
///
/// Files written before a failure are left as they are.
pub fn process_documentation_files<W: Write>(
    index_path: &Path,
    options: &RunOptions,
    out: &mut W,
) -> Result<Report> {
    let index = fs::read_to_string(index_path).map_err(|source| Error::Index {
        path: index_path.to_path_buf(),
        source,
    })?;

    let extractor = LinkExtractor::new(&options.docs_dir)?;
    let doc_files = extractor.extract(&index);
    tracing::debug!(
        index = %index_path.display(),
        count = doc_files.len(),
        "extracted documentation links"
    );

    let base = index_path.parent().unwrap_or_else(|| Path::new(""));
    let mut files = Vec::with_capacity(doc_files.len());

    for (i, current) in doc_files.iter().enumerate() {
        let current_path = base.join(current);

        if !current_path.exists() {
            tracing::warn!(path = %current, "referenced documentation file not found");
            writeln!(out, "Warning: {} not found", current)?;
            files.push(FileOutcome {
                path: current.clone(),
                status: FileStatus::Missing,
            });
            continue;
        }

        let prev = i.checked_sub(1).map(|p| doc_files[p].as_str());
        let next = doc_files.get(i + 1).map(String::as_str);

        let content = fs::read_to_string(&current_path)?;
        let updated = add_navigation_links(&content, prev, next);

        let status = match options.mode {
            RunMode::Write => {
                fs::write(&current_path, &updated)?;
                writeln!(out, "Updated {}", current)?;
                FileStatus::Updated
            }
            RunMode::Check if updated != content => {
                writeln!(out, "Stale {}", current)?;
                FileStatus::Stale
            }
            RunMode::Check => {
                writeln!(out, "Current {}", current)?;
                FileStatus::Current
            }
        };
        tracing::debug!(path = %current, ?status, ?prev, ?next, "processed documentation file");

        files.push(FileOutcome {
            path: current.clone(),
            status,
        });
    }

    Ok(Report {
        index: index_path.to_path_buf(),
        mode: options.mode,
        files,
    })
}
