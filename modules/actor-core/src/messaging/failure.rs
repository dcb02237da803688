//! Failure notification escalated to a supervisor.

use crate::{
  error::ActorError,
  messaging::MessageOrEnvelope,
  pid::Pid,
  restart_statistics::RestartStatisticsHandle,
};

/// Escalated failure of an actor, delivered to its parent as a system
/// message.
///
/// The statistics handle aliases the failing actor's own counter so the
/// supervisor's bookkeeping carries across repeated failures.
#[derive(Clone, Debug)]
pub struct Failure {
  who:           Pid,
  reason:        ActorError,
  restart_stats: RestartStatisticsHandle,
  message:       Option<MessageOrEnvelope>,
}

impl Failure {
  /// Creates a failure notification.
  #[must_use]
  pub const fn new(
    who: Pid,
    reason: ActorError,
    restart_stats: RestartStatisticsHandle,
    message: Option<MessageOrEnvelope>,
  ) -> Self {
    Self { who, reason, restart_stats, message }
  }

  /// Returns the pid of the failing actor.
  #[must_use]
  pub const fn who(&self) -> &Pid {
    &self.who
  }

  /// Returns the failure reason.
  #[must_use]
  pub const fn reason(&self) -> &ActorError {
    &self.reason
  }

  /// Returns the failing actor's restart statistics.
  #[must_use]
  pub const fn restart_stats(&self) -> &RestartStatisticsHandle {
    &self.restart_stats
  }

  /// Returns the message being processed when the failure occurred.
  #[must_use]
  pub const fn message(&self) -> Option<&MessageOrEnvelope> {
    self.message.as_ref()
  }
}
