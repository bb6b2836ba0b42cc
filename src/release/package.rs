//! Packaging orchestration: archive, checksum, manifest, cleanup
//!
//! One archiver invocation and one checksum invocation per build
//! record, strictly in build order. The manifest is opened in append
//! mode and created lazily; it is never truncated mid-run. On failure
//! the run aborts and archives already on disk stay there.

use crate::core::error::{PackageError, ShipError, ShipResult, ResultExt};
use crate::release::build::BuildRecord;
use crate::ui::progress::TargetProgress;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Default external checksum tool
pub const CHECKSUM_TOOL: &str = "sha256sum";

/// External archiver, selected by archive suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveKind {
  Zip,
  TarGz,
}

impl ArchiveKind {
  /// Select the archiver from the archive file name
  pub fn for_archive(file_name: &str) -> Self {
    if file_name.ends_with(".zip") {
      ArchiveKind::Zip
    } else {
      ArchiveKind::TarGz
    }
  }

  fn tool(self) -> &'static str {
    match self {
      ArchiveKind::Zip => "zip",
      ArchiveKind::TarGz => "tar",
    }
  }
}

/// Packages built binaries into archives plus one checksum manifest
pub struct Packager {
  dest: PathBuf,
  manifest_path: PathBuf,
  checksum_tool: String,
}

impl Packager {
  pub fn new(dest: &Path, manifest_name: &str) -> Self {
    Self {
      dest: dest.to_path_buf(),
      manifest_path: dest.join(manifest_name),
      checksum_tool: CHECKSUM_TOOL.to_string(),
    }
  }

  /// Override the checksum tool (useful for testing)
  #[allow(dead_code)]
  pub fn with_checksum_tool(mut self, tool: impl Into<String>) -> Self {
    self.checksum_tool = tool.into();
    self
  }

  /// Package every record in build order, fail-fast
  ///
  /// Per record: archive the binary, append its checksum line to the
  /// manifest, then delete the intermediate binary. Only the archives
  /// and the manifest persist.
  pub fn package_all(&self, records: &[BuildRecord], quiet: bool) -> ShipResult<()> {
    let mut progress = if quiet {
      TargetProgress::disabled()
    } else {
      TargetProgress::new(records.len(), "Packaging archives".to_string())
    };

    for record in records {
      self.archive(record)?;
      self.append_checksum(record)?;
      fs::remove_file(&record.binary_path)
        .with_context(|| format!("Failed to remove intermediate binary {}", record.binary_path.display()))?;
      progress.inc();
    }

    Ok(())
  }

  /// Wrap one binary into its archive
  fn archive(&self, record: &BuildRecord) -> ShipResult<()> {
    let kind = ArchiveKind::for_archive(&record.archive_file_name);
    let mut cmd = Command::new(kind.tool());
    match kind {
      // -j drops directory components from member names
      ArchiveKind::Zip => {
        cmd.arg("-j").arg(&record.archive_path).arg(&record.binary_path);
      }
      // -C keeps the member name bare without changing our own cwd
      ArchiveKind::TarGz => {
        cmd
          .arg("-czf")
          .arg(&record.archive_path)
          .arg("-C")
          .arg(&self.dest)
          .arg(&record.binary_file_name);
      }
    }

    let output = run_tool(cmd, kind.tool())?;
    if !output.status.success() {
      return Err(ShipError::Package(PackageError::ArchiverFailed {
        tool: kind.tool().to_string(),
        archive: record.archive_file_name.clone(),
        stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
      }));
    }

    Ok(())
  }

  /// Checksum one archive and append the raw tool output to the manifest
  fn append_checksum(&self, record: &BuildRecord) -> ShipResult<()> {
    let mut cmd = Command::new(&self.checksum_tool);
    // run inside dest so the output line names the bare archive file
    cmd.current_dir(&self.dest).arg(&record.archive_file_name);

    let output = run_tool(cmd, &self.checksum_tool)?;
    if !output.status.success() {
      return Err(ShipError::Package(PackageError::ChecksumFailed {
        tool: self.checksum_tool.clone(),
        archive: record.archive_file_name.clone(),
        stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
      }));
    }

    let mut manifest = OpenOptions::new()
      .create(true)
      .append(true)
      .open(&self.manifest_path)
      .with_context(|| format!("Failed to open manifest {}", self.manifest_path.display()))?;
    manifest
      .write_all(&output.stdout)
      .context("Failed to append to manifest")?;

    Ok(())
  }
}

fn run_tool(mut cmd: Command, program: &str) -> ShipResult<Output> {
  cmd.output().map_err(|e| match e.kind() {
    io::ErrorKind::NotFound => ShipError::Package(PackageError::ToolNotFound {
      program: program.to_string(),
    }),
    _ => ShipError::Io(e),
  })
}
