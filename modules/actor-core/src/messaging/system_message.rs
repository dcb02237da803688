//! Internal control messages processed with priority over user traffic.

use alloc::sync::Arc;

use crate::{
  messaging::{Continuation, Failure},
  pid::Pid,
};

/// Control message delivered through the system queue of a mailbox.
///
/// `Suspend` and `Resume` are consumed by the mailbox itself; every other
/// variant reaches the context's system-message handler.
#[derive(Clone, Debug)]
pub enum SystemMessage {
  /// Kicks off the freshly spawned actor; forwarded to user code.
  Started,
  /// Requests a graceful stop.
  Stop,
  /// Requests a restart with a fresh incarnation.
  Restart,
  /// Pauses user message delivery.
  Suspend,
  /// Resumes user message delivery.
  Resume,
  /// Registers the pid as a watcher for termination notifications.
  Watch(Pid),
  /// Removes the pid from the watcher set.
  Unwatch(Pid),
  /// Notifies that the referenced process has terminated.
  Terminated(Pid),
  /// Escalates a child failure to the supervising actor.
  Failure(Arc<Failure>),
  /// Resumes post-await user code with its saved envelope.
  Continuation(Arc<Continuation>),
}
