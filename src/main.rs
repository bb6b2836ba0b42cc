mod commands;
mod core;
mod release;
mod ui;

use crate::core::config::ReleaseOverrides;
use crate::core::error::{ShipError, print_error};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Cross-compile a Go project and package versioned release artifacts
#[derive(Parser)]
#[command(name = "goship")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(styles = get_styles())]
struct Cli {
  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Build every matrix target, then archive and checksum the artifacts
  Release {
    /// Project/binary name prefix (falls back to goship.toml)
    name: Option<String>,
    /// Project root to build from (default: current directory)
    #[arg(long)]
    path: Option<PathBuf>,
    /// Output directory, relative to the project root (default: dist)
    #[arg(long)]
    dest: Option<PathBuf>,
    /// Linker flags passed verbatim to the compiler
    #[arg(long)]
    ldflags: Option<String>,
    /// Extra build flags, whitespace-separated, passed through verbatim
    #[arg(long)]
    flags: Option<String>,
    /// Suffix for the checksum manifest file name (default: checksums.txt)
    #[arg(long)]
    checksum: Option<String>,
    /// Embed the resolved version in artifact names
    #[arg(long)]
    include_version: bool,
    /// Show the plan without invoking compiler, archiver or checksum tool
    #[arg(long)]
    dry_run: bool,
    /// Output results in JSON format
    #[arg(long)]
    json: bool,
  },

  /// Print the build-target matrix
  Targets {
    /// Output the matrix in JSON format
    #[arg(long)]
    json: bool,
  },

  /// Print the resolved project version and where it came from
  Version {
    /// Project root to resolve in (default: current directory)
    #[arg(long)]
    path: Option<PathBuf>,
    /// Output in JSON format
    #[arg(long)]
    json: bool,
  },
}

fn get_styles() -> clap::builder::Styles {
  clap::builder::Styles::styled()
    .usage(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .header(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .literal(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))))
    .invalid(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .error(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .valid(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))),
    )
    .placeholder(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::White))))
}

fn main() {
  let cli = Cli::parse();

  let result = match cli.command {
    Commands::Release {
      name,
      path,
      dest,
      ldflags,
      flags,
      checksum,
      include_version,
      dry_run,
      json,
    } => {
      let overrides = ReleaseOverrides {
        name,
        path,
        dest,
        ldflags,
        flags,
        checksum,
        include_version,
      };
      commands::run_release(overrides, dry_run, json)
    }

    Commands::Targets { json } => commands::run_targets(json),

    Commands::Version { path, json } => commands::run_version(path, json),
  };

  if let Err(err) = result {
    handle_error(err);
  }
}

fn handle_error(err: ShipError) -> ! {
  print_error(&err);
  std::process::exit(err.exit_code().as_i32());
}
