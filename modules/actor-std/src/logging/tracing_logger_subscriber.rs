//! Event-stream subscriber forwarding log events to `tracing`.

#[cfg(test)]
mod tests;

use kaskad_actor_core_rs::{EventStreamEvent, EventStreamSubscriber, LogLevel};
use tracing::Level;

/// Forwards runtime log events to the `tracing` ecosystem.
///
/// Events below the configured threshold are dropped before they reach any
/// `tracing` subscriber.
pub struct TracingLoggerSubscriber {
  min_level: LogLevel,
}

impl TracingLoggerSubscriber {
  /// Target attached to every forwarded event.
  pub const DEFAULT_TARGET: &'static str = "kaskad::actor";

  /// Creates a bridge forwarding events at `min_level` and above.
  #[must_use]
  pub const fn new(min_level: LogLevel) -> Self {
    Self { min_level }
  }
}

impl EventStreamSubscriber for TracingLoggerSubscriber {
  fn on_event(&self, event: &EventStreamEvent) {
    let EventStreamEvent::Log(log) = event else {
      return;
    };
    if log.level() < self.min_level {
      return;
    }

    let origin = log.origin().map_or_else(|| String::from("n/a"), ToString::to_string);
    let timestamp_micros = u64::try_from(log.timestamp().as_micros()).unwrap_or(u64::MAX);

    // The event macro needs a const level, hence one arm per severity.
    match log.level() {
      | LogLevel::Trace => tracing::event!(
        target: TracingLoggerSubscriber::DEFAULT_TARGET,
        Level::TRACE,
        origin = origin.as_str(),
        timestamp_micros,
        "{}",
        log.message()
      ),
      | LogLevel::Debug => tracing::event!(
        target: TracingLoggerSubscriber::DEFAULT_TARGET,
        Level::DEBUG,
        origin = origin.as_str(),
        timestamp_micros,
        "{}",
        log.message()
      ),
      | LogLevel::Info => tracing::event!(
        target: TracingLoggerSubscriber::DEFAULT_TARGET,
        Level::INFO,
        origin = origin.as_str(),
        timestamp_micros,
        "{}",
        log.message()
      ),
      | LogLevel::Warn => tracing::event!(
        target: TracingLoggerSubscriber::DEFAULT_TARGET,
        Level::WARN,
        origin = origin.as_str(),
        timestamp_micros,
        "{}",
        log.message()
      ),
      | LogLevel::Error => tracing::event!(
        target: TracingLoggerSubscriber::DEFAULT_TARGET,
        Level::ERROR,
        origin = origin.as_str(),
        timestamp_micros,
        "{}",
        log.message()
      ),
    }
  }
}
