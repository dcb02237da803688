//! Description of a message that could not be delivered.

use crate::{messaging::MessageOrEnvelope, pid::Pid};

/// Captures an undeliverable message together with its intended target.
#[derive(Clone, Debug)]
pub struct DeadLetterEvent {
  target:  Option<Pid>,
  message: MessageOrEnvelope,
}

impl DeadLetterEvent {
  /// Creates a new dead-letter record.
  #[must_use]
  pub const fn new(target: Option<Pid>, message: MessageOrEnvelope) -> Self {
    Self { target, message }
  }

  /// Returns the pid the message was addressed to, when one was known.
  #[must_use]
  pub const fn target(&self) -> Option<&Pid> {
    self.target.as_ref()
  }

  /// Returns the undelivered message.
  #[must_use]
  pub const fn message(&self) -> &MessageOrEnvelope {
    &self.message
  }

  /// Returns the sender recorded on the undelivered message, if any.
  #[must_use]
  pub fn sender(&self) -> Option<&Pid> {
    self.message.sender()
  }
}
