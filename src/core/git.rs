//! System git backend for the version query (zero crate dependencies)
//!
//! Single-purpose subset of a plumbing wrapper: run one read-only git
//! command against a repository with an isolated environment and
//! capture trimmed stdout. The version resolver is the only caller.

use crate::core::error::{ShipError, ShipResult, ResultExt};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Runs read-only git queries against a repository
pub struct GitRunner {
  /// Repository working directory
  repo_path: PathBuf,
}

impl GitRunner {
  /// Create a runner for a repository path
  ///
  /// The path is not validated here; a missing repository simply makes
  /// every query fail, which callers treat as "no history available".
  pub fn new(repo_path: &Path) -> Self {
    Self {
      repo_path: repo_path.to_path_buf(),
    }
  }

  /// Run a git subcommand and return trimmed stdout
  pub fn run(&self, args: &[&str]) -> ShipResult<String> {
    let output = self
      .git_cmd()
      .args(args)
      .output()
      .context("Failed to execute git")?;

    if !output.status.success() {
      let stderr = String::from_utf8_lossy(&output.stderr);
      return Err(ShipError::message(format!(
        "git {} failed: {}",
        args.join(" "),
        stderr.trim()
      )));
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
  }

  /// Create a safe git command with isolated environment
  ///
  /// - Sets working directory to repo path
  /// - Clears environment variables
  /// - Whitelists only PATH and HOME
  fn git_cmd(&self) -> Command {
    let mut cmd = Command::new("git");

    cmd.arg("-C").arg(&self.repo_path);

    // Isolated environment (don't trust global config)
    cmd.env_clear();
    if let Ok(path) = std::env::var("PATH") {
      cmd.env("PATH", path);
    }
    if let Ok(home) = std::env::var("HOME") {
      cmd.env("HOME", home);
    }

    cmd.arg("-c").arg("advice.detachedHead=false");

    cmd
  }
}
