//! The fixed build-target matrix
//!
//! A target is a (GOOS, GOARCH) pair. The matrix is hardcoded and
//! duplicate-free; iteration order determines the order of the
//! artifact listing and nothing else.

use serde::Serialize;
use std::fmt;

/// Operating-system half of a build target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Os {
  Linux,
  Darwin,
  Windows,
}

impl Os {
  /// Identifier passed to the compiler as GOOS
  pub fn go_ident(self) -> &'static str {
    match self {
      Os::Linux => "linux",
      Os::Darwin => "darwin",
      Os::Windows => "windows",
    }
  }
}

impl fmt::Display for Os {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.go_ident())
  }
}

/// Architecture half of a build target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Arch {
  /// 32-bit x86, GOARCH "386"
  #[serde(rename = "386")]
  X86,
  #[serde(rename = "amd64")]
  Amd64,
  #[serde(rename = "arm")]
  Arm,
  #[serde(rename = "arm64")]
  Arm64,
}

impl Arch {
  /// Identifier passed to the compiler as GOARCH
  pub fn go_ident(self) -> &'static str {
    match self {
      Arch::X86 => "386",
      Arch::Amd64 => "amd64",
      Arch::Arm => "arm",
      Arch::Arm64 => "arm64",
    }
  }

  /// Display alias used in artifact names; never reaches the compiler
  pub fn display_alias(self) -> &'static str {
    match self {
      Arch::X86 => "i386",
      Arch::Amd64 => "x86_64",
      Arch::Arm => "arm",
      Arch::Arm64 => "arm64",
    }
  }
}

impl fmt::Display for Arch {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.go_ident())
  }
}

/// A single build target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Target {
  pub os: Os,
  pub arch: Arch,
}

impl Target {
  pub const fn new(os: Os, arch: Arch) -> Self {
    Self { os, arch }
  }

  /// True when the target takes the windows binary/archive suffixes
  pub fn is_windows(self) -> bool {
    matches!(self.os, Os::Windows)
  }
}

impl fmt::Display for Target {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}/{}", self.os, self.arch)
  }
}

/// The release matrix, in build and listing order
pub const TARGETS: [Target; 8] = [
  Target::new(Os::Linux, Arch::X86),
  Target::new(Os::Linux, Arch::Amd64),
  Target::new(Os::Linux, Arch::Arm),
  Target::new(Os::Linux, Arch::Arm64),
  Target::new(Os::Darwin, Arch::Amd64),
  Target::new(Os::Darwin, Arch::Arm64),
  Target::new(Os::Windows, Arch::Amd64),
  Target::new(Os::Windows, Arch::Arm64),
];
