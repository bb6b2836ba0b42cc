//! Progress indicators for the sequential target loops
//!
//! Thin wrapper over `linya` with a disabled mode so `--json` and
//! dry runs keep stdout machine-readable.

use linya::{Bar, Progress};

/// Progress bar over the targets of a build or packaging loop
pub struct TargetProgress {
  inner: Option<(Progress, Bar)>,
}

impl TargetProgress {
  /// Create a progress bar over `total` targets
  pub fn new(total: usize, label: impl Into<String>) -> Self {
    let mut progress = Progress::new();
    let bar = progress.bar(total, label.into());
    Self {
      inner: Some((progress, bar)),
    }
  }

  /// A bar that draws nothing
  pub fn disabled() -> Self {
    Self { inner: None }
  }

  /// Increment progress by 1
  pub fn inc(&mut self) {
    if let Some((progress, bar)) = &mut self.inner {
      progress.inc_and_draw(bar, 1);
    }
  }
}
