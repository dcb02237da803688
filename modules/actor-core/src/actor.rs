//! Behavior contract implemented by user code.

use alloc::sync::Arc;

use crate::{context::Context, error::ActorError, supervision::SupervisorStrategy};

/// A unit of behavior processing one message at a time.
///
/// The current message, its sender and every runtime operation are reached
/// through the [`Context`] handed to [`receive`](Self::receive). Lifecycle
/// transitions arrive as ordinary messages (`Started`, `Stopping`,
/// `Restarting`, `Stopped`), so most actors need nothing beyond `receive`.
pub trait Actor: Send {
  /// Processes the message currently held by `ctx`.
  ///
  /// # Errors
  ///
  /// Returning an error suspends the mailbox and escalates the failure to
  /// the supervisor, which decides whether to resume, restart or stop this
  /// actor.
  fn receive(&mut self, ctx: &dyn Context) -> Result<(), ActorError>;

  /// Strategy applied to failures of this actor's children.
  ///
  /// Returning `None` falls back to the strategy configured on the props,
  /// or the runtime default.
  fn supervisor_strategy(&self) -> Option<Arc<dyn SupervisorStrategy>> {
    None
  }
}
