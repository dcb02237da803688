//! Severity levels for runtime log events.

/// Severity of a runtime log event, ordered from most to least verbose.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
  /// Fine-grained tracing output.
  Trace,
  /// Diagnostic output useful during development.
  Debug,
  /// Normal operational messages.
  Info,
  /// Something unexpected that the runtime recovered from.
  Warn,
  /// A failure that lost work or dropped a message.
  Error,
}
