//! Control surface a strategy uses to act on supervised actors.

use alloc::vec::Vec;
use core::time::Duration;

use crate::{error::ActorError, messaging::MessageOrEnvelope, pid::Pid};

/// Operations available to a [`crate::supervision::SupervisorStrategy`]
/// while it handles a failure.
///
/// Implemented by the actor context: the broadcast operations simply send
/// the corresponding system signals, so they accept arbitrary pids (the
/// root-failure path points them at the failing actor itself).
pub trait Supervisor: Send + Sync {
  /// Returns a snapshot of the supervised children.
  fn children(&self) -> Vec<Pid>;

  /// Suspends this actor's mailbox and escalates the failure to its parent.
  fn escalate_failure(&self, reason: ActorError, message: Option<MessageOrEnvelope>);

  /// Sends a restart signal to each pid.
  fn restart_children(&self, pids: &[Pid]);

  /// Sends a stop signal to each pid.
  fn stop_children(&self, pids: &[Pid]);

  /// Resumes the mailbox of each pid.
  fn resume_children(&self, pids: &[Pid]);

  /// Returns the runtime's monotonic clock reading.
  ///
  /// Strategies time their restart windows with this instead of an ambient
  /// wall clock, which the core does not have.
  fn monotonic_now(&self) -> Duration;
}
