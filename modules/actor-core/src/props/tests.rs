use alloc::{format, string::String, sync::Arc, vec::Vec};

use spin::Mutex;

use super::{ContextDecorator, Props, ReceiverMiddleware, SenderMiddleware};
use crate::{
  actor::Actor,
  clock::ManualClock,
  context::Context,
  error::ActorError,
  messaging::{AnyMessage, Message},
  pid::Pid,
  scheduler::ManualTimerScheduler,
  system::ActorSystem,
};

type Log = Arc<Mutex<Vec<String>>>;

#[derive(Debug)]
struct Note(&'static str);

impl Message for Note {}

#[derive(Debug)]
struct Relay {
  target: Pid,
}

impl Message for Relay {}

struct Echo {
  log: Log,
}

impl Actor for Echo {
  fn receive(&mut self, ctx: &dyn Context) -> Result<(), ActorError> {
    let Some(message) = ctx.message() else {
      return Ok(());
    };
    if let Some(note) = message.downcast_ref::<Note>() {
      self.log.lock().push(format!("received:{}", note.0));
    } else if let Some(relay) = message.downcast_ref::<Relay>() {
      ctx.send(&relay.target, AnyMessage::new(Note("relayed")));
    }
    Ok(())
  }
}

fn test_system() -> ActorSystem {
  let clock = Arc::new(ManualClock::new());
  ActorSystem::new(Arc::new(ManualTimerScheduler::new(clock.clone())), clock)
}

fn echo_props(log: &Log) -> Props {
  let log = log.clone();
  Props::from_fn(move || Echo { log: log.clone() })
}

fn sender_layer(log: &Log, tag: &'static str) -> SenderMiddleware {
  let log = log.clone();
  Arc::new(move |next| {
    let log = log.clone();
    Arc::new(move |ctx, target, envelope| {
      log.lock().push(format!("send:{tag}"));
      (*next)(ctx, target, envelope);
    })
  })
}

fn receiver_layer(log: &Log, tag: &'static str) -> ReceiverMiddleware {
  let log = log.clone();
  Arc::new(move |next| {
    let log = log.clone();
    Arc::new(move |ctx, envelope| {
      log.lock().push(format!("recv:{tag}"));
      (*next)(ctx, envelope)
    })
  })
}

fn counting_decorator(log: &Log) -> ContextDecorator {
  let log = log.clone();
  Arc::new(move |next| {
    let log = log.clone();
    Arc::new(move |context| {
      log.lock().push(String::from("decorated"));
      (*next)(context)
    })
  })
}

#[test]
fn sender_middleware_wraps_sends_outermost_first() {
  let system = test_system();
  let log: Log = Log::default();

  let target = system.spawn(echo_props(&log));
  let sender = system.spawn(
    echo_props(&log).with_sender_middleware([sender_layer(&log, "outer"), sender_layer(&log, "inner")]),
  );

  system.state().send_user_message(&sender, AnyMessage::new(Relay { target }).into());

  assert_eq!(log.lock().clone(), ["send:outer", "send:inner", "received:relayed"]);
}

#[test]
fn receiver_middleware_wraps_every_delivery() {
  let system = test_system();
  let log: Log = Log::default();

  let pid = system.spawn(
    echo_props(&log).with_receiver_middleware([receiver_layer(&log, "outer"), receiver_layer(&log, "inner")]),
  );
  system.state().send_user_message(&pid, AnyMessage::new(Note("x")).into());

  // One outer/inner pair for Started, one for the note.
  assert_eq!(
    log.lock().clone(),
    ["recv:outer", "recv:inner", "recv:outer", "recv:inner", "received:x"]
  );
}

#[test]
fn context_decorators_build_the_view_once() {
  let system = test_system();
  let log: Log = Log::default();

  let pid = system.spawn(echo_props(&log).with_context_decorator(counting_decorator(&log)));
  system.state().send_user_message(&pid, AnyMessage::new(Note("first")).into());
  system.state().send_user_message(&pid, AnyMessage::new(Note("second")).into());

  let entries = log.lock().clone();
  assert_eq!(entries.iter().filter(|entry| *entry == "decorated").count(), 1);
  assert!(entries.contains(&String::from("received:first")));
  assert!(entries.contains(&String::from("received:second")));
}

#[test]
fn props_are_reusable_across_spawns() {
  let system = test_system();
  let log: Log = Log::default();
  let props = echo_props(&log);

  let first = system.spawn(props.clone());
  let second = system.spawn(props);

  assert_ne!(first, second);
  system.state().send_user_message(&first, AnyMessage::new(Note("a")).into());
  system.state().send_user_message(&second, AnyMessage::new(Note("b")).into());
  assert_eq!(log.lock().clone(), ["received:a", "received:b"]);
}
