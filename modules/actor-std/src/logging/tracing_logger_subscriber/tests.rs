use std::{
  fmt,
  sync::{Arc, Mutex},
  time::Duration,
};

use kaskad_actor_core_rs::{EventStreamEvent, EventStreamSubscriber, LogEvent, LogLevel};
use tracing::{
  Event, Level, Metadata, Subscriber,
  field::{Field, Visit},
  span::{Attributes, Id, Record},
  subscriber::with_default,
};

use super::TracingLoggerSubscriber;

#[test]
fn forwards_log_events_to_tracing() {
  let collector = RecordingSubscriber::default();
  let shared = collector.clone();
  with_default(shared, || {
    let subscriber = TracingLoggerSubscriber::new(LogLevel::Trace);
    let log = LogEvent::new(LogLevel::Info, String::from("hello"), Duration::from_micros(42), None);
    subscriber.on_event(&EventStreamEvent::Log(log));
  });

  let events = collector.events();
  assert_eq!(events.len(), 1);
  let event = &events[0];
  assert_eq!(event.level, Level::INFO);
  assert_eq!(event.target, TracingLoggerSubscriber::DEFAULT_TARGET);
  assert_eq!(event.message, "hello");
  assert_eq!(event.timestamp_micros, Some(42));
  assert_eq!(event.origin, Some(String::from("n/a")));
}

#[test]
fn filters_events_below_the_threshold() {
  let collector = RecordingSubscriber::default();
  let shared = collector.clone();
  with_default(shared, || {
    let subscriber = TracingLoggerSubscriber::new(LogLevel::Warn);
    let info = LogEvent::new(LogLevel::Info, String::from("info"), Duration::ZERO, None);
    subscriber.on_event(&EventStreamEvent::Log(info));
    let warn = LogEvent::new(LogLevel::Warn, String::from("warn"), Duration::ZERO, None);
    subscriber.on_event(&EventStreamEvent::Log(warn));
  });

  let events = collector.events();
  assert_eq!(events.len(), 1);
  assert_eq!(events[0].message, "warn");
}

#[derive(Clone, Default)]
struct RecordingSubscriber {
  events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl RecordingSubscriber {
  fn events(&self) -> Vec<CapturedEvent> {
    self.events.lock().expect("lock").clone()
  }
}

impl Subscriber for RecordingSubscriber {
  fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
    true
  }

  fn new_span(&self, _attributes: &Attributes<'_>) -> Id {
    Id::from_u64(1)
  }

  fn record(&self, _id: &Id, _record: &Record<'_>) {}

  fn record_follows_from(&self, _id: &Id, _follows: &Id) {}

  fn event(&self, event: &Event<'_>) {
    let metadata = event.metadata();
    let mut visitor = EventVisitor::default();
    event.record(&mut visitor);
    let captured = CapturedEvent {
      level:            *metadata.level(),
      target:           metadata.target().to_owned(),
      message:          visitor.message.unwrap_or_default(),
      origin:           visitor.origin,
      timestamp_micros: visitor.timestamp_micros,
    };
    self.events.lock().expect("lock").push(captured);
  }

  fn enter(&self, _id: &Id) {}

  fn exit(&self, _id: &Id) {}
}

#[derive(Clone, Debug)]
struct CapturedEvent {
  level:            Level,
  target:           String,
  message:          String,
  origin:           Option<String>,
  timestamp_micros: Option<u64>,
}

#[derive(Default)]
struct EventVisitor {
  message:          Option<String>,
  origin:           Option<String>,
  timestamp_micros: Option<u64>,
}

impl Visit for EventVisitor {
  fn record_str(&mut self, field: &Field, value: &str) {
    match field.name() {
      | "message" => self.message = Some(value.to_owned()),
      | "origin" => self.origin = Some(value.to_owned()),
      | _ => {},
    }
  }

  fn record_u64(&mut self, field: &Field, value: u64) {
    if field.name() == "timestamp_micros" {
      self.timestamp_micros = Some(value);
    }
  }

  fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
    let rendered = format!("{value:?}");
    let rendered = rendered.trim_matches('"').to_owned();
    if field.name() == "message" && self.message.is_none() {
      self.message = Some(rendered);
    } else if field.name() == "origin" && self.origin.is_none() {
      self.origin = Some(rendered);
    }
  }
}
