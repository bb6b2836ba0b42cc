//! Deterministic artifact naming
//!
//! Pure string composition, no I/O: identical inputs always yield
//! identical names. The canonical separator is an underscore
//! throughout, for artifact names and the manifest name alike.

use crate::release::matrix::Target;
use serde::Serialize;

/// Derived names for one target's artifacts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactName {
  /// Joined name without suffixes: `project[_version]_os_arch`
  pub base_name: String,

  /// `base_name` plus `.exe` on windows
  pub binary_file_name: String,

  /// `base_name` plus `.zip` on windows, `.tar.gz` otherwise
  pub archive_file_name: String,
}

impl ArtifactName {
  /// Compose the names for one target
  ///
  /// `version` is absent when the run omits versions entirely. The
  /// architecture token uses the display alias, not the identifier the
  /// compiler sees.
  pub fn new(project: &str, version: Option<&str>, target: Target) -> Self {
    let mut base_name = String::from(project);
    if let Some(version) = version {
      base_name.push('_');
      base_name.push_str(version);
    }
    base_name.push('_');
    base_name.push_str(target.os.go_ident());
    base_name.push('_');
    base_name.push_str(target.arch.display_alias());

    let binary_suffix = if target.is_windows() { ".exe" } else { "" };
    let archive_suffix = if target.is_windows() { ".zip" } else { ".tar.gz" };

    Self {
      binary_file_name: format!("{}{}", base_name, binary_suffix),
      archive_file_name: format!("{}{}", base_name, archive_suffix),
      base_name,
    }
  }
}

/// Manifest file name: `project[_version]_suffix`
pub fn manifest_file_name(project: &str, version: Option<&str>, suffix: &str) -> String {
  match version {
    Some(version) => format!("{}_{}_{}", project, version, suffix),
    None => format!("{}_{}", project, suffix),
  }
}
