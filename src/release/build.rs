//! Build orchestration: one compiler invocation per matrix target
//!
//! Every invocation is a structured argument vector with an explicit
//! working directory and an absolute output path; nothing goes through
//! a shell and the process-wide working directory is never changed.
//! The first failing target aborts the run: a partial binary set is
//! not a valid release.

use crate::core::config::ReleaseSettings;
use crate::core::error::{BuildError, ShipError, ShipResult};
use crate::release::matrix::{Arch, Target};
use crate::release::naming::ArtifactName;
use crate::ui::progress::TargetProgress;
use serde::Serialize;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

/// One planned binary and the archive it will become
#[derive(Debug, Clone, Serialize)]
pub struct BuildRecord {
  pub target: Target,
  pub binary_file_name: String,
  pub archive_file_name: String,
  pub binary_path: PathBuf,
  pub archive_path: PathBuf,
}

/// Plan the records for every target without touching the filesystem
pub fn plan_records(project: &str, version: Option<&str>, dest: &Path, targets: &[Target]) -> Vec<BuildRecord> {
  targets
    .iter()
    .map(|&target| {
      let names = ArtifactName::new(project, version, target);
      BuildRecord {
        target,
        binary_path: dest.join(&names.binary_file_name),
        archive_path: dest.join(&names.archive_file_name),
        binary_file_name: names.binary_file_name,
        archive_file_name: names.archive_file_name,
      }
    })
    .collect()
}

/// Invokes the Go toolchain once per target, fail-fast
pub struct GoBuilder<'a> {
  settings: &'a ReleaseSettings,
}

impl<'a> GoBuilder<'a> {
  pub fn new(settings: &'a ReleaseSettings) -> Self {
    Self { settings }
  }

  /// Build every record in matrix order
  pub fn build_all(&self, records: &[BuildRecord], quiet: bool) -> ShipResult<()> {
    let mut progress = if quiet {
      TargetProgress::disabled()
    } else {
      TargetProgress::new(records.len(), format!("Building {}", self.settings.name))
    };

    for record in records {
      self.build_target(record)?;
      progress.inc();
    }

    Ok(())
  }

  /// Invoke the compiler for a single target
  fn build_target(&self, record: &BuildRecord) -> ShipResult<()> {
    let mut cmd = Command::new(&self.settings.go);
    cmd.current_dir(&self.settings.path);
    cmd.args(self.build_args(record));
    for (key, value) in target_env(record.target) {
      cmd.env(key, value);
    }

    let output = cmd.output().map_err(|e| match e.kind() {
      io::ErrorKind::NotFound => ShipError::Build(BuildError::CompilerNotFound {
        program: self.settings.go.clone(),
      }),
      _ => ShipError::Io(e),
    })?;

    if !output.status.success() {
      return Err(ShipError::Build(BuildError::CompilerFailed {
        target: record.target.to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
      }));
    }

    Ok(())
  }

  /// Argument vector after the program name
  ///
  /// `flags` is whitespace-split and passed through verbatim; `ldflags`
  /// stays a single argument and is omitted entirely when empty.
  fn build_args(&self, record: &BuildRecord) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec!["build".into()];

    for flag in self.settings.flags.split_whitespace() {
      args.push(flag.into());
    }

    if !self.settings.ldflags.is_empty() {
      args.push("-ldflags".into());
      args.push(self.settings.ldflags.as_str().into());
    }

    args.push("-o".into());
    args.push(record.binary_path.clone().into());

    args
  }
}

/// Environment selecting the cross-compilation target
///
/// CGO is disabled for every target so the binaries stay statically
/// linked and portable; GOARM pins the 32-bit ARM ABI level.
fn target_env(target: Target) -> Vec<(&'static str, String)> {
  let mut env = vec![
    ("GOOS", target.os.go_ident().to_string()),
    ("GOARCH", target.arch.go_ident().to_string()),
    ("CGO_ENABLED", "0".to_string()),
  ];

  if target.arch == Arch::Arm {
    env.push(("GOARM", "7".to_string()));
  }

  env
}
