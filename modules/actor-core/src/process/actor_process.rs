//! Mailbox-backed process handle for a running actor.

use alloc::sync::Arc;

use crate::{
  mailbox::Mailbox,
  messaging::{MessageOrEnvelope, SystemMessage},
  pid::Pid,
  process::Process,
};

/// Delivers messages for one actor by posting them to its mailbox.
pub struct ActorProcess {
  mailbox: Arc<Mailbox>,
}

impl ActorProcess {
  /// Creates a process over the given mailbox.
  #[must_use]
  pub const fn new(mailbox: Arc<Mailbox>) -> Self {
    Self { mailbox }
  }

  /// Returns the mailbox backing this process.
  #[must_use]
  pub const fn mailbox(&self) -> &Arc<Mailbox> {
    &self.mailbox
  }
}

impl Process for ActorProcess {
  fn send_user_message(&self, _target: &Pid, message: MessageOrEnvelope) {
    self.mailbox.post_user_message(message);
  }

  fn send_system_message(&self, _target: &Pid, message: SystemMessage) {
    self.mailbox.post_system_message(message);
  }

  fn stop(&self, _target: &Pid) {
    self.mailbox.post_system_message(SystemMessage::Stop);
  }
}
