//! Core building blocks shared across commands
//!
//! - **config**: goship.toml parsing and CLI override merging
//! - **error**: categorized error types with exit codes and help text
//! - **git**: safe system-git subprocess wrapper for the version query

pub mod config;
pub mod error;
pub mod git;
