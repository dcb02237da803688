//! Strategy acting on every sibling of the failing child.

use core::time::Duration;

use crate::{
  error::ActorError,
  messaging::MessageOrEnvelope,
  pid::Pid,
  restart_statistics::RestartStatisticsHandle,
  supervision::{Decider, OneForOneStrategy, Supervisor, SupervisorDirective, SupervisorStrategy},
};

/// Applies the chosen directive to all of the supervisor's children at
/// once, for sibling groups that cannot outlive each other's state.
pub struct AllForOneStrategy {
  inner: OneForOneStrategy,
}

impl AllForOneStrategy {
  /// Creates a strategy allowing `max_restarts` restarts within `within`
  /// before stopping the whole sibling group.
  #[must_use]
  pub fn new(max_restarts: usize, within: Duration) -> Self {
    Self { inner: OneForOneStrategy::new(max_restarts, within) }
  }

  /// Replaces the decider mapping failure reasons to directives.
  #[must_use]
  pub fn with_decider(mut self, decider: Decider) -> Self {
    self.inner = self.inner.with_decider(decider);
    self
  }
}

impl SupervisorStrategy for AllForOneStrategy {
  fn handle_failure(
    &self,
    supervisor: &dyn Supervisor,
    who: &Pid,
    stats: &RestartStatisticsHandle,
    reason: &ActorError,
    message: Option<&MessageOrEnvelope>,
  ) {
    let mut targets = supervisor.children();
    if targets.is_empty() {
      targets.push(who.clone());
    }

    match self.inner.decide(reason) {
      | SupervisorDirective::Resume => supervisor.resume_children(&targets),
      | SupervisorDirective::Restart => self.inner.request_restart(supervisor, &targets, stats),
      | SupervisorDirective::Stop => supervisor.stop_children(&targets),
      | SupervisorDirective::Escalate => supervisor.escalate_failure(reason.clone(), message.cloned()),
    }
  }
}
