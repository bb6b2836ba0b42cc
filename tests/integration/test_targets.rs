//! Integration tests for `goship targets`

use crate::helpers::run_goship;
use anyhow::Result;
use tempfile::TempDir;

#[test]
fn test_targets_json_matrix() -> Result<()> {
  let dir = TempDir::new()?;

  let output = run_goship(dir.path(), &["targets", "--json"])?;
  assert!(output.status.success());

  let rows: serde_json::Value = serde_json::from_slice(&output.stdout)?;
  let rows = rows.as_array().unwrap();
  assert_eq!(rows.len(), 8);

  // Aliases diverge from the raw identifiers exactly where expected
  for row in rows {
    match row["arch"].as_str().unwrap() {
      "amd64" => assert_eq!(row["alias"], "x86_64"),
      "386" => assert_eq!(row["alias"], "i386"),
      arch => assert_eq!(row["alias"], arch),
    }

    if row["os"] == "windows" {
      assert_eq!(row["archive_suffix"], ".zip");
    } else {
      assert_eq!(row["archive_suffix"], ".tar.gz");
    }
  }

  let windows = rows.iter().filter(|r| r["os"] == "windows").count();
  assert_eq!(windows, 2);

  Ok(())
}

#[test]
fn test_targets_human_output() -> Result<()> {
  let dir = TempDir::new()?;

  let output = run_goship(dir.path(), &["targets"])?;
  assert!(output.status.success());

  let stdout = String::from_utf8_lossy(&output.stdout);
  assert!(stdout.contains("linux/386"));
  assert!(stdout.contains("i386"));
  assert!(stdout.contains("windows/arm64"));

  Ok(())
}
