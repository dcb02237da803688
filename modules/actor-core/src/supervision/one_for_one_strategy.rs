//! Strategy acting on the failing child alone.

use core::{slice, time::Duration};

use crate::{
  error::ActorError,
  messaging::MessageOrEnvelope,
  pid::Pid,
  restart_statistics::RestartStatisticsHandle,
  supervision::{Decider, Supervisor, SupervisorDirective, SupervisorStrategy, supervisor_strategy::default_decider},
};

/// Handles each failure in isolation: only the failing child is resumed,
/// restarted or stopped.
pub struct OneForOneStrategy {
  max_restarts: usize,
  within:       Duration,
  decider:      Decider,
}

impl OneForOneStrategy {
  /// Creates a strategy allowing `max_restarts` restarts within `within`
  /// before giving up and stopping the child.
  #[must_use]
  pub fn new(max_restarts: usize, within: Duration) -> Self {
    Self { max_restarts, within, decider: default_decider() }
  }

  /// Replaces the decider mapping failure reasons to directives.
  #[must_use]
  pub fn with_decider(mut self, decider: Decider) -> Self {
    self.decider = decider;
    self
  }

  pub(crate) fn request_restart(
    &self,
    supervisor: &dyn Supervisor,
    targets: &[Pid],
    stats: &RestartStatisticsHandle,
  ) {
    let now = supervisor.monotonic_now();
    stats.record_failure(now);
    if stats.failures_within(self.within, now) > self.max_restarts {
      stats.reset();
      supervisor.stop_children(targets);
    } else {
      supervisor.restart_children(targets);
    }
  }

  pub(crate) fn decide(&self, reason: &ActorError) -> SupervisorDirective {
    (*self.decider)(reason)
  }
}

impl SupervisorStrategy for OneForOneStrategy {
  fn handle_failure(
    &self,
    supervisor: &dyn Supervisor,
    who: &Pid,
    stats: &RestartStatisticsHandle,
    reason: &ActorError,
    message: Option<&MessageOrEnvelope>,
  ) {
    match self.decide(reason) {
      | SupervisorDirective::Resume => supervisor.resume_children(slice::from_ref(who)),
      | SupervisorDirective::Restart => self.request_restart(supervisor, slice::from_ref(who), stats),
      | SupervisorDirective::Stop => supervisor.stop_children(slice::from_ref(who)),
      | SupervisorDirective::Escalate => supervisor.escalate_failure(reason.clone(), message.cloned()),
    }
  }
}
