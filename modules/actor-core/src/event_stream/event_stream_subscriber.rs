//! Subscriber contract for the event stream.

use crate::event_stream::EventStreamEvent;

/// Receives every event published on the stream it is subscribed to.
pub trait EventStreamSubscriber: Send + Sync {
  /// Handles a single published event.
  fn on_event(&self, event: &EventStreamEvent);
}
