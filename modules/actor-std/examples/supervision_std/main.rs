//! A supervisor restarting a crashing worker.

use std::{thread, time::Duration};

use kaskad_actor_core_rs::{
  Actor, ActorError, AnyMessage, Context, LogLevel, Message, Pid, Props, Restarting, Started,
};
use kaskad_actor_std_rs::ActorSystemBuilder;

#[derive(Debug)]
struct SpawnWorker;

impl Message for SpawnWorker {}

#[derive(Debug)]
struct Crash;

impl Message for Crash {}

struct Guardian {
  worker_props: Props,
}

impl Actor for Guardian {
  fn receive(&mut self, ctx: &dyn Context) -> Result<(), ActorError> {
    if ctx.message().is_some_and(|message| message.is::<SpawnWorker>()) {
      let worker: Pid = ctx.spawn(self.worker_props.clone());
      ctx.log(LogLevel::Info, "worker spawned, provoking a crash");
      ctx.send(&worker, AnyMessage::new(Crash));
    }
    Ok(())
  }
}

struct Worker;

impl Actor for Worker {
  fn receive(&mut self, ctx: &dyn Context) -> Result<(), ActorError> {
    let Some(message) = ctx.message() else {
      return Ok(());
    };
    if message.is::<Started>() {
      ctx.log(LogLevel::Info, "worker incarnation started");
    } else if message.is::<Restarting>() {
      ctx.log(LogLevel::Info, "worker restarting");
    } else if message.is::<Crash>() {
      return Err(ActorError::recoverable("intentional crash"));
    }
    Ok(())
  }
}

#[tokio::main]
async fn main() {
  let system = ActorSystemBuilder::new().with_tracing(LogLevel::Info).build();
  let guardian = system.spawn(Props::from_fn(|| Guardian { worker_props: Props::from_fn(|| Worker) }));

  system.state().send_user_message(&guardian, AnyMessage::new(SpawnWorker).into());

  // Give the restart a moment before tearing the system down.
  thread::sleep(Duration::from_millis(100));
  system.stop(&guardian);
}
