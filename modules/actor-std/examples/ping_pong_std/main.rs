//! Ask-style round trip between two processes on a tokio runtime.

use std::time::Duration;

use kaskad_actor_core_rs::{
  Actor, ActorError, ActorFutureProcess, AnyMessage, Context, LogLevel, Message, MessageEnvelope, Props,
};
use kaskad_actor_std_rs::ActorSystemBuilder;

#[derive(Debug)]
struct Ping;

impl Message for Ping {}

#[derive(Debug)]
struct Pong;

impl Message for Pong {}

struct Ponger;

impl Actor for Ponger {
  fn receive(&mut self, ctx: &dyn Context) -> Result<(), ActorError> {
    if ctx.message().is_some_and(|message| message.is::<Ping>()) {
      ctx.log(LogLevel::Info, "ping received, answering");
      ctx.respond(AnyMessage::new(Pong));
    }
    Ok(())
  }
}

#[tokio::main]
async fn main() {
  let system = ActorSystemBuilder::new().with_tracing(LogLevel::Info).build();
  let ponger = system.spawn(Props::from_fn(|| Ponger));

  let future = ActorFutureProcess::spawn(system.state(), Duration::from_secs(1));
  let envelope = MessageEnvelope::new(AnyMessage::new(Ping)).with_sender(future.pid().clone());
  system.state().send_user_message(&ponger, envelope.into());

  match future.wait() {
    Ok(_) => println!("pong received"),
    Err(error) => println!("no answer: {error}"),
  }

  system.stop(&ponger);
}
