//! Error types for goship with contextual messages and exit codes
//!
//! A single error type categorizes failures and carries a help message
//! where one exists. Version resolution recovers internally and never
//! surfaces here; everything else funnels into the top-level handler
//! in main.rs.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Exit codes for goship
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
  /// User error (config, invalid args, missing project)
  User = 1,
  /// System error (toolchain, archiver, checksum tool, I/O)
  System = 2,
}

impl ExitCode {
  /// Convert to i32 for process exit
  pub fn as_i32(self) -> i32 {
    self as i32
  }
}

/// Main error type for goship
#[derive(Debug)]
pub enum ShipError {
  /// Configuration errors
  Config(ConfigError),

  /// Compiler invocation errors
  Build(BuildError),

  /// Archiver, checksum or manifest errors
  Package(PackageError),

  /// I/O errors
  Io(io::Error),

  /// Generic error with message and optional context
  Message {
    message: String,
    context: Option<String>,
    help: Option<String>,
  },
}

impl ShipError {
  /// Create a simple error message
  pub fn message(msg: impl Into<String>) -> Self {
    ShipError::Message {
      message: msg.into(),
      context: None,
      help: None,
    }
  }

  /// Create an error with help text
  #[allow(dead_code)]
  pub fn with_help(msg: impl Into<String>, help: impl Into<String>) -> Self {
    ShipError::Message {
      message: msg.into(),
      context: None,
      help: Some(help.into()),
    }
  }

  /// Add context to an existing error
  pub fn context(self, ctx: impl Into<String>) -> Self {
    let ctx_str = ctx.into();
    match self {
      ShipError::Message { message, context, help } => ShipError::Message {
        message,
        context: Some(context.map(|c| format!("{}\n{}", ctx_str, c)).unwrap_or(ctx_str)),
        help,
      },
      _ => self,
    }
  }

  /// Get the appropriate exit code for this error
  pub fn exit_code(&self) -> ExitCode {
    match self {
      ShipError::Config(_) => ExitCode::User,
      ShipError::Build(_) => ExitCode::System,
      ShipError::Package(_) => ExitCode::System,
      ShipError::Io(_) => ExitCode::System,
      ShipError::Message { .. } => ExitCode::User,
    }
  }

  /// Get contextual help message for this error
  pub fn help_message(&self) -> Option<String> {
    match self {
      ShipError::Config(e) => e.help_message(),
      ShipError::Build(e) => e.help_message(),
      ShipError::Package(e) => e.help_message(),
      ShipError::Message { help, .. } => help.clone(),
      _ => None,
    }
  }
}

impl fmt::Display for ShipError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ShipError::Config(e) => write!(f, "{}", e),
      ShipError::Build(e) => write!(f, "{}", e),
      ShipError::Package(e) => write!(f, "{}", e),
      ShipError::Io(e) => write!(f, "I/O error: {}", e),
      ShipError::Message { message, context, .. } => {
        write!(f, "{}", message)?;
        if let Some(ctx) = context {
          write!(f, "\n{}", ctx)?;
        }
        Ok(())
      }
    }
  }
}

impl std::error::Error for ShipError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      ShipError::Io(e) => Some(e),
      _ => None,
    }
  }
}

impl From<io::Error> for ShipError {
  fn from(err: io::Error) -> Self {
    ShipError::Io(err)
  }
}

impl From<String> for ShipError {
  fn from(msg: String) -> Self {
    ShipError::message(msg)
  }
}

impl From<&str> for ShipError {
  fn from(msg: &str) -> Self {
    ShipError::message(msg)
  }
}

impl From<toml_edit::TomlError> for ShipError {
  fn from(err: toml_edit::TomlError) -> Self {
    ShipError::message(format!("TOML parse error: {}", err))
  }
}

impl From<toml_edit::de::Error> for ShipError {
  fn from(err: toml_edit::de::Error) -> Self {
    ShipError::message(format!("TOML deserialization error: {}", err))
  }
}

impl From<serde_json::Error> for ShipError {
  fn from(err: serde_json::Error) -> Self {
    ShipError::message(format!("JSON error: {}", err))
  }
}

impl From<std::string::FromUtf8Error> for ShipError {
  fn from(err: std::string::FromUtf8Error) -> Self {
    ShipError::message(format!("UTF-8 conversion error: {}", err))
  }
}

impl From<anyhow::Error> for ShipError {
  fn from(err: anyhow::Error) -> Self {
    ShipError::message(err.to_string())
  }
}

/// Configuration-related errors
#[derive(Debug)]
pub enum ConfigError {
  /// No project name on the command line or in goship.toml
  MissingName,

  /// Project root does not exist
  ProjectPathMissing { path: PathBuf },

  /// goship.toml could not be parsed
  Invalid { path: PathBuf, message: String },
}

impl ConfigError {
  fn help_message(&self) -> Option<String> {
    match self {
      ConfigError::MissingName => Some(
        "Pass a project name (`goship release myapp`) or set `name` under [project] in goship.toml.".to_string(),
      ),
      ConfigError::ProjectPathMissing { .. } => {
        Some("Check the --path argument or the [project] path key in goship.toml.".to_string())
      }
      ConfigError::Invalid { .. } => None,
    }
  }
}

impl fmt::Display for ConfigError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ConfigError::MissingName => {
        write!(f, "No project name configured")
      }
      ConfigError::ProjectPathMissing { path } => {
        write!(f, "Project path does not exist: {}", path.display())
      }
      ConfigError::Invalid { path, message } => {
        write!(f, "Invalid configuration in {}: {}", path.display(), message)
      }
    }
  }
}

/// Compiler invocation errors
#[derive(Debug)]
pub enum BuildError {
  /// Compiler exited non-zero for a target
  CompilerFailed { target: String, stderr: String },

  /// Compiler binary could not be spawned
  CompilerNotFound { program: String },
}

impl BuildError {
  fn help_message(&self) -> Option<String> {
    match self {
      BuildError::CompilerNotFound { program } => Some(format!(
        "'{}' is not on PATH. Install the Go toolchain or set `go` under [build] in goship.toml.",
        program
      )),
      BuildError::CompilerFailed { .. } => None,
    }
  }
}

impl fmt::Display for BuildError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      BuildError::CompilerFailed { target, stderr } => {
        write!(f, "Build failed for {}: {}", target, stderr)
      }
      BuildError::CompilerNotFound { program } => {
        write!(f, "Compiler '{}' not found", program)
      }
    }
  }
}

/// Archiver, checksum and manifest errors
#[derive(Debug)]
pub enum PackageError {
  /// Archiver exited non-zero
  ArchiverFailed {
    tool: String,
    archive: String,
    stderr: String,
  },

  /// Checksum tool exited non-zero
  ChecksumFailed {
    tool: String,
    archive: String,
    stderr: String,
  },

  /// Archiver or checksum binary could not be spawned
  ToolNotFound { program: String },
}

impl PackageError {
  fn help_message(&self) -> Option<String> {
    match self {
      PackageError::ToolNotFound { program } => Some(format!(
        "'{}' is not on PATH. zip, tar and sha256sum are required for packaging.",
        program
      )),
      _ => None,
    }
  }
}

impl fmt::Display for PackageError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      PackageError::ArchiverFailed { tool, archive, stderr } => {
        write!(f, "{} failed for {}: {}", tool, archive, stderr)
      }
      PackageError::ChecksumFailed { tool, archive, stderr } => {
        write!(f, "{} failed for {}: {}", tool, archive, stderr)
      }
      PackageError::ToolNotFound { program } => {
        write!(f, "Packaging tool '{}' not found", program)
      }
    }
  }
}

/// Result type alias for goship
pub type ShipResult<T> = Result<T, ShipError>;

/// Helper trait to add context to Results
pub trait ResultExt<T> {
  /// Add context to an error result
  fn context(self, ctx: impl Into<String>) -> ShipResult<T>;

  /// Add context using a closure (lazy evaluation)
  fn with_context<F>(self, f: F) -> ShipResult<T>
  where
    F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
  E: Into<ShipError>,
{
  fn context(self, ctx: impl Into<String>) -> ShipResult<T> {
    self.map_err(|e| e.into().context(ctx))
  }

  fn with_context<F>(self, f: F) -> ShipResult<T>
  where
    F: FnOnce() -> String,
  {
    self.map_err(|e| e.into().context(f()))
  }
}

/// Pretty-print an error to stderr with help text
pub fn print_error(error: &ShipError) {
  eprintln!("\n❌ {}\n", error);

  if let Some(help) = error.help_message() {
    eprintln!("💡 Help: {}\n", help);
  }
}
