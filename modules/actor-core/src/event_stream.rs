//! In-process pub/sub bus carrying dead letters and log events.

mod dead_letter_event;
mod event_stream_event;
mod event_stream_subscriber;
mod event_stream_subscription;

pub use dead_letter_event::DeadLetterEvent;
pub use event_stream_event::EventStreamEvent;
pub use event_stream_subscriber::EventStreamSubscriber;
pub use event_stream_subscription::EventStreamSubscription;

#[cfg(test)]
mod tests;

use alloc::{sync::Arc, vec::Vec};

use portable_atomic::{AtomicU64, Ordering};
use spin::Mutex;

struct SubscriberEntry {
  id:         u64,
  subscriber: Arc<dyn EventStreamSubscriber>,
}

/// Lock-protected fanout of runtime events to registered subscribers.
pub struct EventStream {
  subscribers: Mutex<Vec<SubscriberEntry>>,
  next_id:     AtomicU64,
}

impl EventStream {
  /// Creates an empty stream.
  #[must_use]
  pub const fn new() -> Self {
    Self { subscribers: Mutex::new(Vec::new()), next_id: AtomicU64::new(1) }
  }

  /// Registers the subscriber and returns a subscription used to remove it.
  #[must_use]
  pub fn subscribe(&self, subscriber: Arc<dyn EventStreamSubscriber>) -> EventStreamSubscription {
    let id = self.next_id.fetch_add(1, Ordering::Relaxed);
    self.subscribers.lock().push(SubscriberEntry { id, subscriber });
    EventStreamSubscription::new(id)
  }

  /// Removes the subscriber associated with the subscription.
  pub fn unsubscribe(&self, subscription: &EventStreamSubscription) {
    let mut subscribers = self.subscribers.lock();
    if let Some(position) = subscribers.iter().position(|entry| entry.id == subscription.id()) {
      subscribers.swap_remove(position);
    }
  }

  /// Publishes the event to every registered subscriber.
  ///
  /// The subscriber list is snapshotted first so subscribers may themselves
  /// subscribe or unsubscribe while handling an event.
  pub fn publish(&self, event: &EventStreamEvent) {
    let snapshot: Vec<Arc<dyn EventStreamSubscriber>> =
      self.subscribers.lock().iter().map(|entry| entry.subscriber.clone()).collect();
    for subscriber in snapshot {
      subscriber.on_event(event);
    }
  }
}

impl Default for EventStream {
  fn default() -> Self {
    Self::new()
  }
}
