// Rust guideline compliant 2026-02-06

//! Docnav Core Library
//!
//! This crate provides the building blocks for documentation navigation:
//! - Link extraction from the index document (ordered, deduplicated)
//! - Title derivation from documentation file names
//! - Navigation line injection (idempotent)
//! - The pipeline that rewrites documentation files in place
//! - Configuration and error types

pub mod config;
pub mod error;
pub mod links;
pub mod navigation;
pub mod pipeline;
pub mod title;

pub use config::Config;
pub use error::{Error, Result};
pub use links::{extract_doc_links, LinkExtractor};
pub use navigation::add_navigation_links;
pub use pipeline::{
    process_documentation_files, FileOutcome, FileStatus, Report, RunMode, RunOptions,
};
pub use title::{derive_title, relative_link};
