//! Builder wiring the core actor system onto std drivers.

#[cfg(test)]
mod tests;

use std::sync::Arc;

use kaskad_actor_core_rs::{ActorSystem, ActorSystemConfig, LogLevel};
use tokio::runtime::Handle;

use crate::{clock::InstantClock, logging::TracingLoggerSubscriber, scheduler::TokioTimerScheduler};

/// Builds an [`ActorSystem`] backed by a tokio runtime.
///
/// Timers run on the runtime handle, the clock is `Instant`-based, and log
/// events can optionally be bridged into `tracing`.
pub struct ActorSystemBuilder {
  handle:        Option<Handle>,
  config:        ActorSystemConfig,
  tracing_level: Option<LogLevel>,
}

impl ActorSystemBuilder {
  /// Creates a builder with default configuration.
  #[must_use]
  pub const fn new() -> Self {
    Self { handle: None, config: ActorSystemConfig::new(), tracing_level: None }
  }

  /// Uses the given runtime handle instead of the ambient one.
  #[must_use]
  pub fn with_handle(mut self, handle: Handle) -> Self {
    self.handle = Some(handle);
    self
  }

  /// Replaces the system configuration.
  #[must_use]
  pub fn with_config(mut self, config: ActorSystemConfig) -> Self {
    self.config = config;
    self
  }

  /// Bridges runtime log events at `min_level` and above into `tracing`.
  #[must_use]
  pub fn with_tracing(mut self, min_level: LogLevel) -> Self {
    self.tracing_level = Some(min_level);
    self
  }

  /// Builds the system.
  ///
  /// # Panics
  ///
  /// Panics when no handle was provided and the call happens outside a
  /// tokio runtime.
  #[must_use]
  pub fn build(self) -> ActorSystem {
    let handle = self.handle.unwrap_or_else(Handle::current);
    let scheduler = Arc::new(TokioTimerScheduler::new(handle));
    let clock = Arc::new(InstantClock::new());
    let system = ActorSystem::with_config(scheduler, clock, self.config);

    if let Some(min_level) = self.tracing_level {
      let bridge = Arc::new(TracingLoggerSubscriber::new(min_level));
      let _subscription = system.state().event_stream().subscribe(bridge);
    }

    system
  }
}

impl Default for ActorSystemBuilder {
  fn default() -> Self {
    Self::new()
  }
}
