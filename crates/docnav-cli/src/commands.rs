// Rust guideline compliant 2026-02-06

//! Command implementations for the docnav CLI.

pub mod hooks;
pub mod init;
pub mod run;
