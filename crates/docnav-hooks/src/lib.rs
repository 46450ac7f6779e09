// Rust guideline compliant 2026-02-06

//! Docnav Git Hooks
//!
//! This crate provides the Git hook entry points for docnav:
//! - Pre-commit navigation rewrite
//! - Diagnostic logging setup shared by the docnav binaries

pub mod logging;
pub mod pre_commit;

pub use logging::init_tracing;
pub use pre_commit::{pre_commit_hook, run_hook};
