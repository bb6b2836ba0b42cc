//! `goship targets` - print the build matrix

use crate::core::error::ShipResult;
use crate::release::matrix::TARGETS;
use serde::Serialize;

#[derive(Serialize)]
struct TargetRow {
  os: &'static str,
  arch: &'static str,
  alias: &'static str,
  archive_suffix: &'static str,
}

/// Run the targets command
pub fn run_targets(json: bool) -> ShipResult<()> {
  if json {
    let rows: Vec<TargetRow> = TARGETS
      .iter()
      .map(|t| TargetRow {
        os: t.os.go_ident(),
        arch: t.arch.go_ident(),
        alias: t.arch.display_alias(),
        archive_suffix: if t.is_windows() { ".zip" } else { ".tar.gz" },
      })
      .collect();
    println!("{}", serde_json::to_string_pretty(&rows)?);
    return Ok(());
  }

  println!("🎯 Build matrix ({} targets)", TARGETS.len());
  for target in TARGETS {
    let suffix = if target.is_windows() { ".zip" } else { ".tar.gz" };
    println!(
      "  {:<15} {:<8} {}",
      target.to_string(),
      target.arch.display_alias(),
      suffix
    );
  }

  Ok(())
}
