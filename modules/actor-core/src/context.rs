//! Public contract of the per-actor execution context.

use alloc::{boxed::Box, sync::Arc};
use core::time::Duration;

use crate::{
  actor::Actor,
  actor_future::{ActorFutureError, ActorFutureProcess},
  error::{ActorError, SpawnError},
  logging::LogLevel,
  messaging::{AnyMessage, MessageEnvelope, MessageHeader},
  pid::Pid,
  props::Props,
  supervision::Supervisor,
};

/// Shared handle to a context, as seen through decorator chains.
pub type ContextHandle = Arc<dyn Context>;

/// Operations available to user code while an actor processes a message.
///
/// The supertrait carries the supervision surface (`escalate_failure`,
/// the child broadcast operations and the runtime clock).
///
/// All methods take `&self`: the mailbox serializes invocations, so the
/// context mutates its state behind interior locks and never needs an
/// exclusive borrow. Calling mutating operations from outside the actor's
/// own receive path is unsupported.
pub trait Context: Supervisor {
  /// Returns this actor's pid.
  fn self_pid(&self) -> &Pid;

  /// Returns the parent's pid, absent for top-level actors.
  fn parent(&self) -> Option<&Pid>;

  /// Returns the payload of the message currently being processed.
  fn message(&self) -> Option<AnyMessage>;

  /// Returns the sender of the current message, when the envelope carried
  /// one. A bare message has no sender.
  fn sender(&self) -> Option<Pid>;

  /// Returns the headers of the current message, when the envelope carried
  /// any.
  fn headers(&self) -> Option<MessageHeader>;

  /// Sends a fire-and-forget message.
  fn send(&self, target: &Pid, message: AnyMessage);

  /// Sends a message whose envelope names this actor as the sender, so the
  /// target can [`respond`](Self::respond).
  fn request(&self, target: &Pid, message: AnyMessage);

  /// Sends a message whose envelope names a fresh one-shot future as the
  /// sender and returns that future. The timeout is enforced by the future
  /// itself.
  fn request_future(&self, target: &Pid, message: AnyMessage, timeout: Duration) -> Arc<ActorFutureProcess>;

  /// Re-sends the current message to `target`, preserving the original
  /// sender and headers. Auto-receive messages are not forwarded; the
  /// attempt is logged and dropped.
  fn forward(&self, target: &Pid);

  /// Sends `response` to the current message's sender, or to the
  /// dead-letter sink when there is none.
  fn respond(&self, response: AnyMessage);

  /// Pushes the current message onto the stash. Stashed messages survive a
  /// restart and are re-delivered LIFO to the new incarnation.
  fn stash(&self);

  /// Asks to be notified with a `Terminated` message when `who` stops.
  fn watch(&self, who: &Pid);

  /// Cancels a previous [`watch`](Self::watch).
  fn unwatch(&self, who: &Pid);

  /// Configures the idle timeout after which a `ReceiveTimeout` message is
  /// delivered. Values under one millisecond disable the timeout;
  /// reconfiguring to the current value is a no-op.
  ///
  /// # Panics
  ///
  /// Panics when `duration` is zero, which is a usage error.
  fn set_receive_timeout(&self, duration: Duration);

  /// Returns the configured receive timeout, zero when disabled.
  fn receive_timeout(&self) -> Duration;

  /// Spawns a child under a registry-generated name.
  ///
  /// # Panics
  ///
  /// Panics when the props carry a guardian strategy, or on the
  /// unreachable collision of a freshly generated id.
  fn spawn(&self, props: Props) -> Pid;

  /// Spawns a child under a name starting with `prefix`.
  ///
  /// # Panics
  ///
  /// Panics when the props carry a guardian strategy, or on the
  /// unreachable collision of a freshly generated id.
  fn spawn_prefix(&self, props: Props, prefix: &str) -> Pid;

  /// Spawns a child under the given name; the child's id is this actor's id
  /// and the name joined with `/`.
  ///
  /// # Errors
  ///
  /// Returns [`SpawnError::NameExists`] when the composed id is taken; no
  /// child is registered in that case.
  ///
  /// # Panics
  ///
  /// Panics when the props carry a guardian strategy, which is only valid
  /// for top-level supervisors.
  fn spawn_named(&self, props: Props, name: &str) -> Result<Pid, SpawnError>;

  /// Sends a stop signal to the process identified by `pid`.
  fn stop(&self, pid: &Pid);

  /// Enqueues a `PoisonPill` user message, stopping the target after the
  /// messages already ahead of it.
  fn poison(&self, pid: &Pid);

  /// Runs the regular receive pipeline on `envelope`.
  ///
  /// This is the re-entry point used by context decorators; application
  /// code normally never calls it.
  ///
  /// # Errors
  ///
  /// Propagates the failure returned by the actor's receive.
  fn receive(&self, envelope: MessageEnvelope) -> Result<(), ActorError>;

  /// Attaches `continuation` to `future`. When the future completes, the
  /// continuation is enqueued back to this actor and runs on its own
  /// execution thread with the current message restored, so `message()`
  /// and `sender()` keep their await-time values inside it.
  fn await_future(
    &self,
    future: &Arc<ActorFutureProcess>,
    continuation: Box<dyn FnOnce(Result<AnyMessage, ActorFutureError>) + Send>,
  );

  /// Emits a log event attributed to this actor.
  fn log(&self, level: LogLevel, message: &str);

  /// Grants scoped access to the behavior object. The closure is skipped
  /// when no incarnation is live.
  fn with_actor(&self, f: &mut dyn FnMut(&mut dyn Actor));

  /// Returns a shared handle to this context, for closures that outlive
  /// the current borrow (continuations, decorators).
  fn context_handle(&self) -> ContextHandle;
}
