// Rust guideline compliant 2026-02-06

//! Link extraction from the index document.
//!
//! The index document (usually `README.md`) defines the reading order of the
//! documentation pages through the order in which it links to them.

use crate::Result;
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Default documentation folder prefix.
pub const DEFAULT_DOCS_DIR: &str = "docs";

static DEFAULT_EXTRACTOR: OnceLock<LinkExtractor> = OnceLock::new();

/// Finds markdown links whose target lives in a documentation folder.
#[derive(Debug, Clone)]
pub struct LinkExtractor {
    pattern: Regex,
}

impl LinkExtractor {
    /// Builds an extractor for links of the form `[label](<docs_dir>/<name>.md)`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Pattern`] if the pattern cannot be compiled.
    pub fn new(docs_dir: &str) -> Result<Self> {
        let pattern = Regex::new(&format!(
            r"\[.*?\]\(({}/.*?\.md)\)",
            regex::escape(docs_dir)
        ))?;
        Ok(Self { pattern })
    }

    /// Returns link targets in order of first appearance, without duplicates.
    ///
    /// Text that does not form a matching link is ignored.
    pub fn extract(&self, text: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        self.pattern
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str())
            .filter(|target| seen.insert(*target))
            .map(str::to_string)
            .collect()
    }
}

/// Extracts `docs/*.md` link targets from index document text.
///
/// Duplicate targets keep the position of their first occurrence.
///
/// # Examples
///
/// ```
/// let text = "[A](docs/a.md) [B](docs/b.md) [A again](docs/a.md)";
/// assert_eq!(docnav_core::extract_doc_links(text), vec!["docs/a.md", "docs/b.md"]);
/// ```
pub fn extract_doc_links(text: &str) -> Vec<String> {
    DEFAULT_EXTRACTOR
        .get_or_init(|| {
            LinkExtractor::new(DEFAULT_DOCS_DIR).expect("Invalid default link pattern")
        })
        .extract(text)
}
