//! Tracks failure timestamps for supervised actors.

mod restart_statistics_handle;

pub use restart_statistics_handle::RestartStatisticsHandle;


use alloc::vec::Vec;
use core::time::Duration;

/// Failure counter with monotonic timestamps, consulted by supervision
/// strategies to enforce restart limits.
#[derive(Clone, Debug, Default)]
pub struct RestartStatistics {
  failures: Vec<Duration>,
}

impl RestartStatistics {
  /// Creates an empty statistics container.
  #[must_use]
  pub const fn new() -> Self {
    Self { failures: Vec::new() }
  }

  /// Records a failure observed at `now`.
  pub fn record_failure(&mut self, now: Duration) {
    self.failures.push(now);
  }

  /// Returns the total number of recorded failures.
  #[must_use]
  pub const fn failure_count(&self) -> usize {
    self.failures.len()
  }

  /// Returns the number of failures within `window` looking back from `now`.
  ///
  /// A zero window counts every recorded failure.
  #[must_use]
  pub fn failures_within(&self, window: Duration, now: Duration) -> usize {
    if window.is_zero() {
      return self.failures.len();
    }
    let threshold = now.saturating_sub(window);
    self.failures.iter().filter(|&&timestamp| timestamp >= threshold).count()
  }

  /// Clears all tracked failures.
  pub fn reset(&mut self) {
    self.failures.clear();
  }
}
