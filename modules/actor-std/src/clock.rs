//! Monotonic clock backed by [`std::time::Instant`].

use std::time::{Duration, Instant};

use kaskad_actor_core_rs::MonotonicClock;

/// Clock measuring elapsed time since its creation.
#[derive(Debug)]
pub struct InstantClock {
  origin: Instant,
}

impl InstantClock {
  /// Creates a clock anchored at the current instant.
  #[must_use]
  pub fn new() -> Self {
    Self { origin: Instant::now() }
  }
}

impl Default for InstantClock {
  fn default() -> Self {
    Self::new()
  }
}

impl MonotonicClock for InstantClock {
  fn now(&self) -> Duration {
    self.origin.elapsed()
  }
}
