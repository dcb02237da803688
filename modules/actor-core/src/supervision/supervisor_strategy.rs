//! Pluggable failure-handling policy.

use alloc::sync::Arc;

use crate::{
  error::ActorError,
  messaging::MessageOrEnvelope,
  pid::Pid,
  restart_statistics::RestartStatisticsHandle,
  supervision::{Supervisor, SupervisorDirective},
};

/// Maps a failure reason to a directive.
pub type Decider = Arc<dyn Fn(&ActorError) -> SupervisorDirective + Send + Sync>;

/// Decides the fate of a failing actor.
pub trait SupervisorStrategy: Send + Sync {
  /// Handles the failure of `who`, acting through `supervisor`.
  ///
  /// `stats` aliases the failing actor's restart counter; `message` is the
  /// message that was being processed when the failure occurred.
  fn handle_failure(
    &self,
    supervisor: &dyn Supervisor,
    who: &Pid,
    stats: &RestartStatisticsHandle,
    reason: &ActorError,
    message: Option<&MessageOrEnvelope>,
  );
}

/// Returns the decider applied when none is configured: restart on
/// recoverable failures, stop on fatal ones.
#[must_use]
pub fn default_decider() -> Decider {
  Arc::new(|reason| {
    if reason.is_fatal() {
      SupervisorDirective::Stop
    } else {
      SupervisorDirective::Restart
    }
  })
}
