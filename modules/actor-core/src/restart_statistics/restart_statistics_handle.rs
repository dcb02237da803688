//! Shared handle to an actor's restart statistics.

use alloc::sync::Arc;
use core::time::Duration;

use spin::Mutex;

use crate::restart_statistics::RestartStatistics;

/// Shared, lock-protected view of a failing actor's restart statistics.
///
/// The handle aliases the counter stored in the actor's own context, so a
/// strategy's mutations are visible to the next failure of the same actor.
#[derive(Clone, Debug, Default)]
pub struct RestartStatisticsHandle {
  inner: Arc<Mutex<RestartStatistics>>,
}

impl RestartStatisticsHandle {
  /// Creates a handle over a fresh counter.
  #[must_use]
  pub fn new() -> Self {
    Self { inner: Arc::new(Mutex::new(RestartStatistics::new())) }
  }

  /// Records a failure observed at `now`.
  pub fn record_failure(&self, now: Duration) {
    self.inner.lock().record_failure(now);
  }

  /// Returns the total number of recorded failures.
  #[must_use]
  pub fn failure_count(&self) -> usize {
    self.inner.lock().failure_count()
  }

  /// Returns the number of failures within `window` looking back from `now`.
  #[must_use]
  pub fn failures_within(&self, window: Duration, now: Duration) -> usize {
    self.inner.lock().failures_within(window, now)
  }

  /// Clears all tracked failures.
  pub fn reset(&self) {
    self.inner.lock().reset();
  }
}
