//! Integration tests for `goship release`

use crate::helpers::{TestProject, run_goship, run_goship_with_path};
use anyhow::Result;

#[test]
fn test_release_full_run() -> Result<()> {
  let project = TestProject::new()?;
  project.commit("Initial commit")?;
  project.tag("v1.2.3")?;

  let go = project.fake_go(None)?;
  project.fake_zip()?;
  project.write_config(&format!(
    "[project]\nname = \"myapp\"\n\n[build]\ngo = \"{}\"\n\n[package]\ninclude_version = true\n",
    go.display()
  ))?;

  let output = run_goship_with_path(&project.path, &["release"], Some(&project.tools_dir()))?;
  assert!(
    output.status.success(),
    "release failed: {}",
    String::from_utf8_lossy(&output.stderr)
  );

  // One archive per matrix target, named with the aliased architecture
  let expected_archives = [
    "myapp_v1.2.3_linux_i386.tar.gz",
    "myapp_v1.2.3_linux_x86_64.tar.gz",
    "myapp_v1.2.3_linux_arm.tar.gz",
    "myapp_v1.2.3_linux_arm64.tar.gz",
    "myapp_v1.2.3_darwin_x86_64.tar.gz",
    "myapp_v1.2.3_darwin_arm64.tar.gz",
    "myapp_v1.2.3_windows_x86_64.zip",
    "myapp_v1.2.3_windows_arm64.zip",
  ];
  for archive in expected_archives {
    assert!(project.file_exists(&format!("dist/{}", archive)), "missing {}", archive);
  }

  // Intermediate binaries are gone: only archives plus the manifest remain
  let listing = project.list_dir("dist")?;
  assert_eq!(listing.len(), expected_archives.len() + 1);
  assert!(listing.contains(&"myapp_v1.2.3_checksums.txt".to_string()));

  Ok(())
}

#[test]
fn test_release_manifest_has_one_line_per_archive() -> Result<()> {
  let project = TestProject::new()?;
  project.commit("Initial commit")?;

  let go = project.fake_go(None)?;
  project.fake_zip()?;
  project.write_config(&format!("[project]\nname = \"app\"\n\n[build]\ngo = \"{}\"\n", go.display()))?;

  let output = run_goship_with_path(&project.path, &["release"], Some(&project.tools_dir()))?;
  assert!(output.status.success());

  let manifest = project.read_file("dist/app_checksums.txt")?;
  let lines: Vec<&str> = manifest.lines().collect();
  assert_eq!(lines.len(), 8);

  // Each line is the checksum tool's raw output: hash plus bare file name
  for line in &lines {
    let (hash, rest) = line.split_at(64);
    assert!(hash.chars().all(|c| c.is_ascii_hexdigit()), "bad hash in: {}", line);
    assert!(rest.trim_start().starts_with("app_"), "bad file name in: {}", line);
    assert!(!rest.contains('/'), "manifest line leaks a path: {}", line);
  }
  assert!(manifest.contains("app_linux_i386.tar.gz"));
  assert!(manifest.contains("app_windows_x86_64.zip"));

  Ok(())
}

#[test]
fn test_release_fail_fast_mid_matrix() -> Result<()> {
  let project = TestProject::new()?;
  project.commit("Initial commit")?;

  // Third target (linux/arm) fails; targets 4..8 must never build
  project.fake_go(Some(3))?;
  project.fake_zip()?;
  project.write_config("[project]\nname = \"app\"\n")?;

  let output = run_goship_with_path(&project.path, &["release"], Some(&project.tools_dir()))?;
  assert!(!output.status.success());
  assert_eq!(output.status.code(), Some(2));

  let stderr = String::from_utf8_lossy(&output.stderr);
  assert!(stderr.contains("simulated compiler failure"), "stderr: {}", stderr);
  assert!(stderr.contains("linux/arm"), "stderr: {}", stderr);

  // Packaging never ran: no archives, no manifest
  let listing = project.list_dir("dist")?;
  assert!(!listing.iter().any(|name| name.ends_with(".tar.gz") || name.ends_with(".zip")));
  assert!(!project.file_exists("dist/app_checksums.txt"));

  // The two targets built before the failure left their binaries behind
  assert_eq!(listing.len(), 2);

  Ok(())
}

#[test]
fn test_release_json_summary() -> Result<()> {
  let project = TestProject::new()?;
  project.commit("Initial commit")?;
  project.tag("v2.0.0")?;

  let go = project.fake_go(None)?;
  project.fake_zip()?;
  project.write_config(&format!("[build]\ngo = \"{}\"\n", go.display()))?;

  let output = run_goship_with_path(
    &project.path,
    &["release", "myapp", "--include-version", "--json"],
    Some(&project.tools_dir()),
  )?;
  assert!(
    output.status.success(),
    "release failed: {}",
    String::from_utf8_lossy(&output.stderr)
  );

  let summary: serde_json::Value = serde_json::from_slice(&output.stdout)?;
  assert_eq!(summary["name"], "myapp");
  assert_eq!(summary["version"]["value"], "v2.0.0");
  assert_eq!(summary["version"]["source"], "tag");
  assert_eq!(summary["manifest"], "myapp_v2.0.0_checksums.txt");
  assert_eq!(summary["artifacts"].as_array().unwrap().len(), 9);
  assert!(summary["completed_at"].is_string());

  Ok(())
}

#[test]
fn test_release_dry_run_invokes_nothing() -> Result<()> {
  let project = TestProject::new()?;
  project.commit("Initial commit")?;

  // A broken compiler proves dry-run never reaches it
  project.write_config("[build]\ngo = \"/nonexistent/go\"\n")?;

  let output = run_goship(&project.path, &["release", "myapp", "--dry-run"])?;
  assert!(output.status.success());

  let stdout = String::from_utf8_lossy(&output.stdout);
  assert!(stdout.contains("DRY RUN"));
  assert!(stdout.contains("myapp_linux_i386.tar.gz"));
  assert!(stdout.contains("myapp_checksums.txt"));

  // The output directory is not even created
  assert!(!project.file_exists("dist"));

  Ok(())
}

#[test]
fn test_release_dry_run_json_plan() -> Result<()> {
  let project = TestProject::new()?;
  project.commit("Initial commit")?;
  project.tag("v1.0.0")?;

  let output = run_goship(&project.path, &["release", "myapp", "--include-version", "--dry-run", "--json"])?;
  assert!(output.status.success());

  let plan: serde_json::Value = serde_json::from_slice(&output.stdout)?;
  assert_eq!(plan["version"]["value"], "v1.0.0");

  let records = plan["records"].as_array().unwrap();
  assert_eq!(records.len(), 8);

  let windows: Vec<_> = records
    .iter()
    .filter(|r| r["target"]["os"] == "windows")
    .collect();
  assert_eq!(windows.len(), 2);
  for record in windows {
    assert!(record["binary_file_name"].as_str().unwrap().ends_with(".exe"));
    assert!(record["archive_file_name"].as_str().unwrap().ends_with(".zip"));
  }

  Ok(())
}

#[test]
fn test_release_version_omitted_by_default() -> Result<()> {
  let project = TestProject::new()?;
  project.commit("Initial commit")?;
  project.tag("v5.0.0")?;

  let output = run_goship(&project.path, &["release", "myapp", "--dry-run", "--json"])?;
  assert!(output.status.success());

  let plan: serde_json::Value = serde_json::from_slice(&output.stdout)?;
  assert!(plan["version"].is_null());

  for record in plan["records"].as_array().unwrap() {
    let name = record["archive_file_name"].as_str().unwrap();
    assert!(!name.contains("v5.0.0"), "version leaked into {}", name);
  }

  Ok(())
}

#[test]
fn test_release_cli_overrides_config_name() -> Result<()> {
  let project = TestProject::new()?;
  project.commit("Initial commit")?;
  project.write_config("[project]\nname = \"from-config\"\n")?;

  let output = run_goship(&project.path, &["release", "from-cli", "--dry-run", "--json"])?;
  assert!(output.status.success());

  let plan: serde_json::Value = serde_json::from_slice(&output.stdout)?;
  assert_eq!(plan["name"], "from-cli");

  Ok(())
}

#[test]
fn test_release_requires_a_name() -> Result<()> {
  let project = TestProject::new()?;
  project.commit("Initial commit")?;

  let output = run_goship(&project.path, &["release"])?;
  assert!(!output.status.success());
  assert_eq!(output.status.code(), Some(1));

  let stderr = String::from_utf8_lossy(&output.stderr);
  assert!(stderr.contains("name"), "stderr: {}", stderr);

  Ok(())
}
