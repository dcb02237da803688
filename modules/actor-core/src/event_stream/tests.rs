use alloc::{string::String, sync::Arc, vec::Vec};
use core::time::Duration;

use spin::Mutex;

use super::{EventStream, EventStreamEvent, EventStreamSubscriber};
use crate::logging::{LogEvent, LogLevel};

#[derive(Default)]
struct RecordingSubscriber {
  messages: Mutex<Vec<String>>,
}

impl RecordingSubscriber {
  fn messages(&self) -> Vec<String> {
    self.messages.lock().clone()
  }
}

impl EventStreamSubscriber for RecordingSubscriber {
  fn on_event(&self, event: &EventStreamEvent) {
    if let EventStreamEvent::Log(log) = event {
      self.messages.lock().push(String::from(log.message()));
    }
  }
}

fn log_event(message: &str) -> EventStreamEvent {
  EventStreamEvent::Log(LogEvent::new(LogLevel::Info, String::from(message), Duration::ZERO, None))
}

#[test]
fn delivers_published_events_to_subscribers() {
  let stream = EventStream::new();
  let subscriber = Arc::new(RecordingSubscriber::default());
  let _subscription = stream.subscribe(subscriber.clone());

  stream.publish(&log_event("first"));
  stream.publish(&log_event("second"));

  assert_eq!(subscriber.messages(), ["first", "second"]);
}

#[test]
fn unsubscribed_subscribers_stop_receiving() {
  let stream = EventStream::new();
  let subscriber = Arc::new(RecordingSubscriber::default());
  let subscription = stream.subscribe(subscriber.clone());

  stream.publish(&log_event("first"));
  stream.unsubscribe(&subscription);
  stream.publish(&log_event("second"));

  assert_eq!(subscriber.messages(), ["first"]);
}
