//! Integration tests for `goship version` and the fallback chain

use crate::helpers::{TestProject, run_goship};
use anyhow::Result;
use tempfile::TempDir;

#[test]
fn test_version_prefers_tag_description() -> Result<()> {
  let project = TestProject::new()?;
  project.commit("Initial commit")?;
  project.tag("v9.9.9")?;

  let output = run_goship(&project.path, &["version", "--json"])?;
  assert!(output.status.success());

  let resolved: serde_json::Value = serde_json::from_slice(&output.stdout)?;
  assert_eq!(resolved["value"], "v9.9.9");
  assert_eq!(resolved["source"], "tag");

  Ok(())
}

#[test]
fn test_version_falls_back_to_commit_hash() -> Result<()> {
  let project = TestProject::new()?;
  let sha = project.commit("Initial commit")?;

  // No tags: describe fails, rev-parse wins
  let output = run_goship(&project.path, &["version", "--json"])?;
  assert!(output.status.success());

  let resolved: serde_json::Value = serde_json::from_slice(&output.stdout)?;
  assert_eq!(resolved["value"], sha);
  assert_eq!(resolved["source"], "commit");

  Ok(())
}

#[test]
fn test_version_falls_back_to_default_sentinel() -> Result<()> {
  // Not a git repository at all: both strategies fail, nothing errors
  let dir = TempDir::new()?;

  let output = run_goship(dir.path(), &["version", "--json"])?;
  assert!(output.status.success());

  let resolved: serde_json::Value = serde_json::from_slice(&output.stdout)?;
  assert_eq!(resolved["value"], "v0.0.0");
  assert_eq!(resolved["source"], "default");

  Ok(())
}

#[test]
fn test_version_human_output_names_the_source() -> Result<()> {
  let project = TestProject::new()?;
  project.commit("Initial commit")?;
  project.tag("v1.0.0")?;

  let output = run_goship(&project.path, &["version"])?;
  assert!(output.status.success());

  let stdout = String::from_utf8_lossy(&output.stdout);
  assert!(stdout.contains("v1.0.0"));
  assert!(stdout.contains("tag description"));

  Ok(())
}
