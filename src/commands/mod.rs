//! CLI commands for goship
//!
//! - **release**: build, archive and checksum the full target matrix
//! - **targets**: print the build matrix
//! - **version**: show the resolved project version

pub mod release;
pub mod targets;
pub mod version;

pub use release::run_release;
pub use targets::run_targets;
pub use version::run_version;
