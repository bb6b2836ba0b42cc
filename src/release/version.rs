//! Version resolution with an ordered fallback chain
//!
//! Strategies run against the project's git history in a fixed order;
//! the first success wins and the terminal fallback is a literal
//! sentinel. Resolution is read-only and never fails the run.

use crate::core::git::GitRunner;
use serde::Serialize;
use std::path::Path;

/// Version used when the repository yields neither a tag nor a commit
pub const DEFAULT_VERSION: &str = "v0.0.0";

/// Which strategy produced the resolved version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VersionSource {
  /// `git describe --tags`
  Tag,
  /// `git rev-parse --short HEAD`
  Commit,
  /// The literal default sentinel
  Default,
}

impl VersionSource {
  /// Human-readable label for operator output
  pub fn describe(self) -> &'static str {
    match self {
      VersionSource::Tag => "tag description",
      VersionSource::Commit => "commit hash",
      VersionSource::Default => "default sentinel",
    }
  }
}

/// A resolved project version; computed once per run, never empty
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedVersion {
  pub value: String,
  pub source: VersionSource,
}

/// Fallback strategies in attempt order; first success wins
const STRATEGIES: [(VersionSource, &[&str]); 2] = [
  (VersionSource::Tag, &["describe", "--tags"]),
  (VersionSource::Commit, &["rev-parse", "--short", "HEAD"]),
];

/// Resolves a human-readable version from source-control history
pub struct VersionResolver {
  git: GitRunner,
}

impl VersionResolver {
  pub fn new(project_root: &Path) -> Self {
    Self {
      git: GitRunner::new(project_root),
    }
  }

  /// Resolve the version
  ///
  /// Infallible: a repository without tags falls back to the short
  /// commit hash, and anything short of that falls back to
  /// [`DEFAULT_VERSION`].
  pub fn resolve(&self) -> ResolvedVersion {
    for (source, args) in STRATEGIES {
      match self.git.run(args) {
        Ok(value) if !value.is_empty() => return ResolvedVersion { value, source },
        _ => {}
      }
    }

    ResolvedVersion {
      value: DEFAULT_VERSION.to_string(),
      source: VersionSource::Default,
    }
  }
}
