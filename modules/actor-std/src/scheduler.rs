//! One-shot timers driven by a tokio runtime.


use core::time::Duration;

use kaskad_actor_core_rs::{TimerHandle, TimerScheduler};
use tokio::runtime::Handle;

/// Timer scheduler spawning one task per armed timer.
///
/// Cancellation is cooperative: the task checks the handle right before
/// running, so a cancelled timer wakes its task once and then drops it.
pub struct TokioTimerScheduler {
  handle: Handle,
}

impl TokioTimerScheduler {
  /// Creates a scheduler spawning onto the given runtime handle.
  #[must_use]
  pub const fn new(handle: Handle) -> Self {
    Self { handle }
  }

  /// Creates a scheduler bound to the ambient runtime.
  ///
  /// # Panics
  ///
  /// Panics when called outside a tokio runtime.
  #[must_use]
  pub fn current() -> Self {
    Self::new(Handle::current())
  }
}

impl TimerScheduler for TokioTimerScheduler {
  fn schedule_once(&self, delay: Duration, task: Box<dyn FnOnce() + Send>) -> TimerHandle {
    let handle = TimerHandle::new();
    let cancelled = handle.clone();
    self.handle.spawn(async move {
      tokio::time::sleep(delay).await;
      if !cancelled.is_cancelled() {
        task();
      }
    });
    handle
  }
}
