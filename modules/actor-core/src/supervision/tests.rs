use alloc::{sync::Arc, vec::Vec};
use core::time::Duration;

use spin::Mutex;

use super::{AllForOneStrategy, OneForOneStrategy, Supervisor, SupervisorDirective, SupervisorStrategy};
use crate::{
  error::ActorError,
  messaging::MessageOrEnvelope,
  pid::Pid,
  restart_statistics::RestartStatisticsHandle,
};

#[derive(Clone, Debug, PartialEq, Eq)]
enum SupervisorCall {
  Restart(Vec<Pid>),
  Stop(Vec<Pid>),
  Resume(Vec<Pid>),
  Escalate,
}

struct FakeSupervisor {
  children: Vec<Pid>,
  now:      Mutex<Duration>,
  calls:    Mutex<Vec<SupervisorCall>>,
}

impl FakeSupervisor {
  fn new(children: Vec<Pid>) -> Self {
    Self { children, now: Mutex::new(Duration::ZERO), calls: Mutex::new(Vec::new()) }
  }

  fn advance(&self, delta: Duration) {
    let mut now = self.now.lock();
    *now = now.saturating_add(delta);
  }

  fn calls(&self) -> Vec<SupervisorCall> {
    self.calls.lock().clone()
  }
}

impl Supervisor for FakeSupervisor {
  fn children(&self) -> Vec<Pid> {
    self.children.clone()
  }

  fn escalate_failure(&self, _reason: ActorError, _message: Option<MessageOrEnvelope>) {
    self.calls.lock().push(SupervisorCall::Escalate);
  }

  fn restart_children(&self, pids: &[Pid]) {
    self.calls.lock().push(SupervisorCall::Restart(pids.to_vec()));
  }

  fn stop_children(&self, pids: &[Pid]) {
    self.calls.lock().push(SupervisorCall::Stop(pids.to_vec()));
  }

  fn resume_children(&self, pids: &[Pid]) {
    self.calls.lock().push(SupervisorCall::Resume(pids.to_vec()));
  }

  fn monotonic_now(&self) -> Duration {
    *self.now.lock()
  }
}

fn child() -> Pid {
  Pid::new("user/parent/worker")
}

#[test]
fn recoverable_failures_restart_the_failing_child() {
  let supervisor = FakeSupervisor::new(alloc::vec![child()]);
  let strategy = OneForOneStrategy::new(3, Duration::from_secs(10));
  let stats = RestartStatisticsHandle::new();

  strategy.handle_failure(&supervisor, &child(), &stats, &ActorError::recoverable("boom"), None);

  assert_eq!(supervisor.calls(), [SupervisorCall::Restart(alloc::vec![child()])]);
  assert_eq!(stats.failure_count(), 1);
}

#[test]
fn fatal_failures_stop_the_failing_child() {
  let supervisor = FakeSupervisor::new(alloc::vec![child()]);
  let strategy = OneForOneStrategy::new(3, Duration::from_secs(10));
  let stats = RestartStatisticsHandle::new();

  strategy.handle_failure(&supervisor, &child(), &stats, &ActorError::fatal("corrupt"), None);

  assert_eq!(supervisor.calls(), [SupervisorCall::Stop(alloc::vec![child()])]);
}

#[test]
fn exceeding_the_restart_window_stops_and_resets() {
  let supervisor = FakeSupervisor::new(alloc::vec![child()]);
  let strategy = OneForOneStrategy::new(1, Duration::from_secs(10));
  let stats = RestartStatisticsHandle::new();
  let reason = ActorError::recoverable("boom");

  strategy.handle_failure(&supervisor, &child(), &stats, &reason, None);
  supervisor.advance(Duration::from_secs(1));
  strategy.handle_failure(&supervisor, &child(), &stats, &reason, None);

  assert_eq!(
    supervisor.calls(),
    [
      SupervisorCall::Restart(alloc::vec![child()]),
      SupervisorCall::Stop(alloc::vec![child()]),
    ]
  );
  assert_eq!(stats.failure_count(), 0);
}

#[test]
fn failures_outside_the_window_keep_restarting() {
  let supervisor = FakeSupervisor::new(alloc::vec![child()]);
  let strategy = OneForOneStrategy::new(1, Duration::from_secs(10));
  let stats = RestartStatisticsHandle::new();
  let reason = ActorError::recoverable("boom");

  strategy.handle_failure(&supervisor, &child(), &stats, &reason, None);
  supervisor.advance(Duration::from_secs(60));
  strategy.handle_failure(&supervisor, &child(), &stats, &reason, None);

  assert_eq!(
    supervisor.calls(),
    [
      SupervisorCall::Restart(alloc::vec![child()]),
      SupervisorCall::Restart(alloc::vec![child()]),
    ]
  );
}

#[test]
fn custom_deciders_can_resume_or_escalate() {
  let supervisor = FakeSupervisor::new(alloc::vec![child()]);
  let strategy = OneForOneStrategy::new(3, Duration::from_secs(10))
    .with_decider(Arc::new(|_| SupervisorDirective::Resume));
  let stats = RestartStatisticsHandle::new();

  strategy.handle_failure(&supervisor, &child(), &stats, &ActorError::recoverable("boom"), None);
  assert_eq!(supervisor.calls(), [SupervisorCall::Resume(alloc::vec![child()])]);

  let escalating = OneForOneStrategy::new(3, Duration::from_secs(10))
    .with_decider(Arc::new(|_| SupervisorDirective::Escalate));
  escalating.handle_failure(&supervisor, &child(), &stats, &ActorError::recoverable("boom"), None);
  assert_eq!(supervisor.calls().last(), Some(&SupervisorCall::Escalate));
}

#[test]
fn all_for_one_acts_on_every_child() {
  let siblings = alloc::vec![Pid::new("user/parent/a"), Pid::new("user/parent/b")];
  let supervisor = FakeSupervisor::new(siblings.clone());
  let strategy = AllForOneStrategy::new(3, Duration::from_secs(10));
  let stats = RestartStatisticsHandle::new();

  strategy.handle_failure(&supervisor, &siblings[0], &stats, &ActorError::recoverable("boom"), None);

  assert_eq!(supervisor.calls(), [SupervisorCall::Restart(siblings)]);
}
