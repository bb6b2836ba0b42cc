//! `goship version` - show what the resolver would embed in names

use crate::core::error::ShipResult;
use crate::release::version::VersionResolver;
use std::env;
use std::path::PathBuf;

/// Run the version command
pub fn run_version(path: Option<PathBuf>, json: bool) -> ShipResult<()> {
  let root = match path {
    Some(path) => path,
    None => env::current_dir()?,
  };

  let resolved = VersionResolver::new(&root).resolve();

  if json {
    println!("{}", serde_json::to_string_pretty(&resolved)?);
  } else {
    println!("🔖 {} ({})", resolved.value, resolved.source.describe());
  }

  Ok(())
}
