use std::sync::{Arc, Mutex};

use kaskad_actor_core_rs::{
  Actor, ActorError, ActorSystem, AnyMessage, Context, ManualClock, ManualTimerScheduler, Message, Pid, Props,
  Terminated,
};

#[derive(Debug)]
struct WatchTarget {
  target: Pid,
}

impl Message for WatchTarget {}

struct Sentinel {
  notifications: Arc<Mutex<Vec<Pid>>>,
}

impl Actor for Sentinel {
  fn receive(&mut self, ctx: &dyn Context) -> Result<(), ActorError> {
    let Some(message) = ctx.message() else {
      return Ok(());
    };
    if let Some(watch) = message.downcast_ref::<WatchTarget>() {
      ctx.watch(&watch.target);
    } else if let Some(terminated) = message.downcast_ref::<Terminated>() {
      self.notifications.lock().unwrap().push(terminated.who.clone());
    }
    Ok(())
  }
}

struct Passive;

impl Actor for Passive {
  fn receive(&mut self, _ctx: &dyn Context) -> Result<(), ActorError> {
    Ok(())
  }
}

fn test_system() -> ActorSystem {
  let clock = Arc::new(ManualClock::new());
  ActorSystem::new(Arc::new(ManualTimerScheduler::new(clock.clone())), clock)
}

fn sentinel_props(notifications: &Arc<Mutex<Vec<Pid>>>) -> Props {
  let notifications = notifications.clone();
  Props::from_fn(move || Sentinel { notifications: notifications.clone() })
}

#[test]
fn a_watcher_is_notified_exactly_once() {
  let system = test_system();
  let notifications = Arc::new(Mutex::new(Vec::new()));
  let sentinel = system.spawn(sentinel_props(&notifications));
  let subject = system.spawn(Props::from_fn(|| Passive));

  system.state().send_user_message(&sentinel, AnyMessage::new(WatchTarget { target: subject.clone() }).into());
  system.stop(&subject);
  system.stop(&subject);

  assert_eq!(notifications.lock().unwrap().clone(), [subject]);
}

#[test]
fn watching_a_gone_pid_is_answered_from_dead_letters() {
  let system = test_system();
  let notifications = Arc::new(Mutex::new(Vec::new()));
  let subject = system.spawn(Props::from_fn(|| Passive));
  system.stop(&subject);

  let sentinel = system.spawn(sentinel_props(&notifications));
  system.state().send_user_message(&sentinel, AnyMessage::new(WatchTarget { target: subject.clone() }).into());

  assert_eq!(notifications.lock().unwrap().clone(), [subject]);
}
