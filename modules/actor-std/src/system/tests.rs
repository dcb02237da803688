use std::{
  sync::{Arc, Mutex},
  time::{Duration, Instant},
};

use kaskad_actor_core_rs::{
  Actor, ActorFutureProcess, AnyMessage, Context, ActorError, Message, MessageEnvelope, Props, ReceiveTimeout,
  Started,
};

use crate::{dispatcher::TokioDispatcher, system::ActorSystemBuilder};

#[derive(Debug)]
struct Ping;

impl Message for Ping {}

#[derive(Debug)]
struct Pong;

impl Message for Pong {}

#[derive(Debug)]
struct Tick;

impl Message for Tick {
  fn influences_receive_timeout(&self) -> bool {
    false
  }
}

struct Responder;

impl Actor for Responder {
  fn receive(&mut self, ctx: &dyn Context) -> Result<(), ActorError> {
    if ctx.message().is_some_and(|message| message.is::<Ping>()) {
      ctx.respond(AnyMessage::new(Pong));
    }
    Ok(())
  }
}

type Timeline = Arc<Mutex<Vec<(&'static str, Instant)>>>;

struct Idler {
  timeline: Timeline,
  timeout:  Duration,
}

impl Actor for Idler {
  fn receive(&mut self, ctx: &dyn Context) -> Result<(), ActorError> {
    let Some(message) = ctx.message() else {
      return Ok(());
    };
    if message.is::<Started>() {
      ctx.set_receive_timeout(self.timeout);
      self.timeline.lock().expect("lock").push(("started", Instant::now()));
    } else if message.is::<Tick>() {
      self.timeline.lock().expect("lock").push(("tick", Instant::now()));
    } else if message.is::<ReceiveTimeout>() {
      self.timeline.lock().expect("lock").push(("timeout", Instant::now()));
    }
    Ok(())
  }
}

#[tokio::test(flavor = "multi_thread")]
async fn request_reply_round_trips_through_a_future() {
  let system = ActorSystemBuilder::new().build();
  let responder = system.spawn(Props::from_fn(|| Responder));

  let future = ActorFutureProcess::spawn(system.state(), Duration::from_secs(1));
  let envelope = MessageEnvelope::new(AnyMessage::new(Ping)).with_sender(future.pid().clone());
  system.state().send_user_message(&responder, envelope.into());

  let outcome = future.wait();
  assert!(outcome.is_ok_and(|message| message.is::<Pong>()));
}

#[tokio::test(flavor = "multi_thread")]
async fn receive_timeout_fires_at_the_original_deadline() {
  let system = ActorSystemBuilder::new().build();
  let timeline: Timeline = Timeline::default();
  let start = Instant::now();

  let idler = {
    let timeline = timeline.clone();
    system.spawn(Props::from_fn(move || Idler { timeline: timeline.clone(), timeout: Duration::from_millis(300) }))
  };

  tokio::time::sleep(Duration::from_millis(120)).await;
  system.state().send_user_message(&idler, AnyMessage::new(Tick).into());
  tokio::time::sleep(Duration::from_millis(480)).await;

  let events = timeline.lock().expect("lock").clone();
  let timeouts: Vec<&(&'static str, Instant)> = events.iter().filter(|(label, _)| *label == "timeout").collect();
  assert_eq!(timeouts.len(), 1, "expected exactly one receive timeout, got {events:?}");

  // The non-influencing tick must not have pushed the deadline to ~420ms.
  let elapsed = timeouts[0].1.duration_since(start);
  assert!(elapsed >= Duration::from_millis(280), "fired too early: {elapsed:?}");
  assert!(elapsed < Duration::from_millis(420), "tick postponed the deadline: {elapsed:?}");
}

#[tokio::test(flavor = "multi_thread")]
async fn actors_run_on_a_tokio_dispatcher() {
  let system = ActorSystemBuilder::new().build();
  let timeline: Timeline = Timeline::default();

  let _idler = {
    let timeline = timeline.clone();
    system.spawn(
      Props::from_fn(move || Idler { timeline: timeline.clone(), timeout: Duration::from_secs(5) })
        .with_dispatcher(Arc::new(TokioDispatcher::current(300))),
    )
  };

  for _ in 0_u32..200 {
    if timeline.lock().expect("lock").iter().any(|(label, _)| *label == "started") {
      return;
    }
    tokio::time::sleep(Duration::from_millis(10)).await;
  }
  panic!("the dispatcher never delivered Started");
}
