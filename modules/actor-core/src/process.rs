//! Process handles owned by the registry.

mod actor_process;
mod dead_letter_process;

pub use actor_process::ActorProcess;
pub use dead_letter_process::DeadLetterProcess;

use crate::{
  messaging::{MessageOrEnvelope, SystemMessage},
  pid::Pid,
};

/// Receiving end of a pid: accepts user and system messages for the process
/// registered under it.
///
/// `target` repeats the pid the message was addressed to, so shared
/// processes (the dead-letter sink) know who the intended recipient was.
pub trait Process: Send + Sync {
  /// Enqueues a user message.
  fn send_user_message(&self, target: &Pid, message: MessageOrEnvelope);

  /// Enqueues a system message.
  fn send_system_message(&self, target: &Pid, message: SystemMessage);

  /// Requests a graceful stop.
  fn stop(&self, target: &Pid);
}
