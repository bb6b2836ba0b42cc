//! goship configuration: goship.toml plus command-line overrides
//!
//! The file keys mirror the CLI flags one-to-one; flags win over file
//! values. The file is looked up as `goship.toml` in the invocation
//! directory, and `path` inside it is resolved relative to that
//! directory.

use crate::core::error::{ConfigError, ShipError, ShipResult, ResultExt};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file name searched in the invocation directory
pub const CONFIG_FILE: &str = "goship.toml";

/// On-disk configuration; every key is optional
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShipConfig {
  #[serde(default)]
  pub project: ProjectConfig,
  #[serde(default)]
  pub build: BuildConfig,
  #[serde(default)]
  pub package: PackageConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectConfig {
  /// Project/binary name prefix
  #[serde(default)]
  pub name: Option<String>,

  /// Project root (default: the invocation directory)
  #[serde(default)]
  pub path: Option<PathBuf>,

  /// Output directory, relative to the project root (default: "dist")
  #[serde(default)]
  pub dest: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuildConfig {
  /// Passed verbatim to the compiler as the -ldflags argument
  #[serde(default)]
  pub ldflags: Option<String>,

  /// Extra build flags, whitespace-separated, passed through verbatim
  #[serde(default)]
  pub flags: Option<String>,

  /// Compiler program (default: "go"; override useful for testing)
  #[serde(default)]
  pub go: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PackageConfig {
  /// Suffix for the checksum manifest file name (default: "checksums.txt")
  #[serde(default)]
  pub checksum: Option<String>,

  /// Embed the resolved version in artifact names (default: false)
  #[serde(default)]
  pub include_version: Option<bool>,
}

impl ShipConfig {
  /// Load goship.toml from a directory, or None when absent
  pub fn load(dir: &Path) -> ShipResult<Option<Self>> {
    let path = dir.join(CONFIG_FILE);
    if !path.exists() {
      return Ok(None);
    }

    let raw = fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))?;
    let config: ShipConfig = toml_edit::de::from_str(&raw).map_err(|e| {
      ShipError::Config(ConfigError::Invalid {
        path: path.clone(),
        message: e.to_string(),
      })
    })?;

    Ok(Some(config))
  }
}

/// Command-line values for a release run, prior to merging
#[derive(Debug, Clone, Default)]
pub struct ReleaseOverrides {
  pub name: Option<String>,
  pub path: Option<PathBuf>,
  pub dest: Option<PathBuf>,
  pub ldflags: Option<String>,
  pub flags: Option<String>,
  pub checksum: Option<String>,
  pub include_version: bool,
}

/// Fully merged and validated settings for one release run
///
/// `path` is absolute and must exist; `dest` is absolute and may not
/// exist yet (created by the release command before building).
#[derive(Debug, Clone)]
pub struct ReleaseSettings {
  pub name: String,
  pub path: PathBuf,
  pub dest: PathBuf,
  pub ldflags: String,
  pub flags: String,
  pub checksum: String,
  pub include_version: bool,
  pub go: String,
}

impl ReleaseSettings {
  /// Merge CLI overrides over file config and apply defaults
  pub fn merge(cli: ReleaseOverrides, file: Option<ShipConfig>) -> ShipResult<Self> {
    let file = file.unwrap_or_default();

    let name = cli
      .name
      .or(file.project.name)
      .ok_or(ShipError::Config(ConfigError::MissingName))?;

    let path = cli.path.or(file.project.path).unwrap_or_else(|| PathBuf::from("."));
    let path = fs::canonicalize(&path).map_err(|_| {
      ShipError::Config(ConfigError::ProjectPathMissing { path: path.clone() })
    })?;

    // Relative dest lands inside the project root; absolute dest wins
    let dest = cli.dest.or(file.project.dest).unwrap_or_else(|| PathBuf::from("dist"));
    let dest = path.join(dest);

    Ok(Self {
      name,
      path,
      dest,
      ldflags: cli.ldflags.or(file.build.ldflags).unwrap_or_default(),
      flags: cli.flags.or(file.build.flags).unwrap_or_default(),
      checksum: cli
        .checksum
        .or(file.package.checksum)
        .unwrap_or_else(|| "checksums.txt".to_string()),
      include_version: cli.include_version || file.package.include_version.unwrap_or(false),
      go: file.build.go.unwrap_or_else(|| "go".to_string()),
    })
  }
}
