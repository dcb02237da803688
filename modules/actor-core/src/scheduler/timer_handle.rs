//! Cancellation handle for scheduled timers.

use alloc::sync::Arc;

use portable_atomic::{AtomicBool, Ordering};

/// Handle to a scheduled one-shot timer.
///
/// Cancellation is cooperative: the flag is checked by the driver right
/// before the task would run, so a cancel that races a fire may still
/// observe the task executing.
#[derive(Clone, Debug)]
pub struct TimerHandle {
  cancelled: Arc<AtomicBool>,
}

impl TimerHandle {
  /// Creates a live (not yet cancelled) handle.
  #[must_use]
  pub fn new() -> Self {
    Self { cancelled: Arc::new(AtomicBool::new(false)) }
  }

  /// Requests that the timer never fires.
  pub fn cancel(&self) {
    self.cancelled.store(true, Ordering::Release);
  }

  /// Returns `true` when the timer has been cancelled.
  #[must_use]
  pub fn is_cancelled(&self) -> bool {
    self.cancelled.load(Ordering::Acquire)
  }
}

impl Default for TimerHandle {
  fn default() -> Self {
    Self::new()
  }
}
