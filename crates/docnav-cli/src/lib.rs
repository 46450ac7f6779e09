// Rust guideline compliant 2026-02-06

//! Docnav CLI library.
//!
//! This library exposes the CLI commands for use in tests and external code.

pub mod commands;
