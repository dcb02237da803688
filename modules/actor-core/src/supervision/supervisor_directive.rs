//! Outcome chosen by a supervision strategy.

/// What to do with a failing actor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SupervisorDirective {
  /// Keep the current incarnation and resume message processing.
  Resume,
  /// Replace the actor with a fresh incarnation.
  Restart,
  /// Stop the actor permanently.
  Stop,
  /// Pass the failure further up the supervision tree.
  Escalate,
}
