//! Events carried by the runtime event stream.

use crate::{event_stream::DeadLetterEvent, logging::LogEvent};

/// Event published on the runtime event stream.
#[derive(Clone, Debug)]
pub enum EventStreamEvent {
  /// A message could not be delivered to a live process.
  DeadLetter(DeadLetterEvent),
  /// A structured log entry emitted by the runtime or an actor.
  Log(LogEvent),
}
