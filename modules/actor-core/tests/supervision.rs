use std::sync::{Arc, Mutex};

use kaskad_actor_core_rs::{
  Actor, ActorError, ActorSystem, AnyMessage, Context, ManualClock, ManualTimerScheduler, Message, Pid, Props,
  Restarting, Started,
};

#[derive(Debug)]
struct SpawnWorker;

impl Message for SpawnWorker {}

#[derive(Debug)]
struct Work(&'static str);

impl Message for Work {}

struct Supervisor {
  worker_props: Props,
  worker_slot:  Arc<Mutex<Option<Pid>>>,
}

impl Actor for Supervisor {
  fn receive(&mut self, ctx: &dyn Context) -> Result<(), ActorError> {
    if ctx.message().is_some_and(|message| message.is::<SpawnWorker>()) {
      let worker = ctx.spawn_named(self.worker_props.clone(), "worker").expect("fresh child name");
      *self.worker_slot.lock().unwrap() = Some(worker);
    }
    Ok(())
  }
}

struct FlakyWorker {
  observed: Arc<Mutex<Vec<String>>>,
}

impl Actor for FlakyWorker {
  fn receive(&mut self, ctx: &dyn Context) -> Result<(), ActorError> {
    let Some(message) = ctx.message() else {
      return Ok(());
    };
    if message.is::<Started>() {
      self.observed.lock().unwrap().push(String::from("started"));
    } else if message.is::<Restarting>() {
      self.observed.lock().unwrap().push(String::from("restarting"));
    } else if let Some(work) = message.downcast_ref::<Work>() {
      self.observed.lock().unwrap().push(String::from(work.0));
      if work.0 == "boom" {
        return Err(ActorError::recoverable("worker failure"));
      }
    }
    Ok(())
  }
}

#[test]
fn a_failing_worker_is_restarted_and_keeps_serving() {
  let clock = Arc::new(ManualClock::new());
  let system = ActorSystem::new(Arc::new(ManualTimerScheduler::new(clock.clone())), clock);

  let observed = Arc::new(Mutex::new(Vec::new()));
  let worker_props = {
    let observed = observed.clone();
    Props::from_fn(move || FlakyWorker { observed: observed.clone() })
  };
  let worker_slot = Arc::new(Mutex::new(None));
  let supervisor = {
    let worker_slot = worker_slot.clone();
    system.spawn(Props::from_fn(move || Supervisor {
      worker_props: worker_props.clone(),
      worker_slot:  worker_slot.clone(),
    }))
  };

  system.state().send_user_message(&supervisor, AnyMessage::new(SpawnWorker).into());
  let worker = worker_slot.lock().unwrap().clone().expect("worker spawned");

  system.state().send_user_message(&worker, AnyMessage::new(Work("boom")).into());
  system.state().send_user_message(&worker, AnyMessage::new(Work("again")).into());

  assert_eq!(
    observed.lock().unwrap().clone(),
    ["started", "boom", "restarting", "started", "again"]
  );
}
