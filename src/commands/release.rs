//! `goship release` - build, archive and checksum the full matrix
//!
//! Composition of the release pipeline: merge settings, resolve the
//! version once, plan every artifact name, build every target, package
//! every binary, then print the final artifact listing. Any failure
//! after version resolution aborts the run.

use crate::core::config::{ReleaseOverrides, ReleaseSettings, ShipConfig};
use crate::core::error::{ShipResult, ResultExt};
use crate::release::build::{BuildRecord, GoBuilder, plan_records};
use crate::release::matrix::TARGETS;
use crate::release::naming::manifest_file_name;
use crate::release::package::Packager;
use crate::release::version::{ResolvedVersion, VersionResolver};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Machine-readable dry-run plan
#[derive(Debug, Serialize)]
struct ReleasePlan<'a> {
  name: &'a str,
  version: Option<&'a ResolvedVersion>,
  dest: &'a Path,
  manifest: &'a str,
  records: &'a [BuildRecord],
}

/// Machine-readable summary of a completed run
#[derive(Debug, Serialize)]
struct ReleaseSummary {
  name: String,
  version: Option<ResolvedVersion>,
  dest: PathBuf,
  manifest: String,
  artifacts: Vec<String>,
  completed_at: DateTime<Utc>,
}

/// Run the release command
pub fn run_release(overrides: ReleaseOverrides, dry_run: bool, json: bool) -> ShipResult<()> {
  let invocation_dir = env::current_dir()?;
  let config = ShipConfig::load(&invocation_dir)?;
  let settings = ReleaseSettings::merge(overrides, config)?;

  // Resolved once; immutable for the rest of the run
  let version = if settings.include_version {
    Some(VersionResolver::new(&settings.path).resolve())
  } else {
    None
  };
  let version_str = version.as_ref().map(|v| v.value.as_str());

  let manifest = manifest_file_name(&settings.name, version_str, &settings.checksum);
  let records = plan_records(&settings.name, version_str, &settings.dest, &TARGETS);

  if dry_run {
    return print_plan(&settings, version.as_ref(), &manifest, &records, json);
  }

  if !settings.dest.exists() {
    fs::create_dir_all(&settings.dest)
      .with_context(|| format!("Failed to create output directory {}", settings.dest.display()))?;
  }

  if !json {
    println!("🚀 Release build for '{}' ({} targets)", settings.name, records.len());
    if let Some(version) = &version {
      println!("   version: {} ({})", version.value, version.source.describe());
    }
  }

  GoBuilder::new(&settings).build_all(&records, json)?;
  Packager::new(&settings.dest, &manifest).package_all(&records, json)?;

  let artifacts = list_dest(&settings.dest)?;

  if json {
    let summary = ReleaseSummary {
      name: settings.name.clone(),
      version,
      dest: settings.dest.clone(),
      manifest,
      artifacts,
      completed_at: Utc::now(),
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);
  } else {
    println!();
    println!("✅ Release complete, artifacts in {}", settings.dest.display());
    for artifact in &artifacts {
      println!("   {}", artifact);
    }
  }

  Ok(())
}

/// Print the plan without invoking compiler, archiver or checksum tool
fn print_plan(
  settings: &ReleaseSettings,
  version: Option<&ResolvedVersion>,
  manifest: &str,
  records: &[BuildRecord],
  json: bool,
) -> ShipResult<()> {
  if json {
    let plan = ReleasePlan {
      name: &settings.name,
      version,
      dest: &settings.dest,
      manifest,
      records,
    };
    println!("{}", serde_json::to_string_pretty(&plan)?);
    return Ok(());
  }

  println!("📦 Release plan for '{}'", settings.name);
  if let Some(version) = version {
    println!("   version: {} ({})", version.value, version.source.describe());
  }
  println!();
  println!("DRY RUN: would produce:");
  for record in records {
    println!("  {:<15} → {}", record.target.to_string(), record.archive_file_name);
  }
  println!("  manifest        → {}", manifest);
  println!();
  println!("No compiler, archiver or checksum invocations performed.");

  Ok(())
}

/// Final listing of the output directory, sorted for stable output
fn list_dest(dest: &Path) -> ShipResult<Vec<String>> {
  let mut names = Vec::new();
  for entry in fs::read_dir(dest).with_context(|| format!("Failed to read output directory {}", dest.display()))? {
    let entry = entry?;
    names.push(entry.file_name().to_string_lossy().to_string());
  }
  names.sort();
  Ok(names)
}
