//! Release pipeline building blocks
//!
//! - **matrix**: the fixed OS/architecture build matrix
//! - **naming**: deterministic artifact and manifest names
//! - **version**: git-backed version resolution with fallbacks
//! - **build**: per-target compiler orchestration
//! - **package**: archiving, checksums and the manifest

pub mod build;
pub mod matrix;
pub mod naming;
pub mod package;
pub mod version;
