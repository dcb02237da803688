//! Message wrapper carrying optional headers and sender.

use crate::{
  messaging::{AnyMessage, MessageHeader},
  pid::Pid,
};

/// Tuple of optional headers, payload and optional sender pid.
#[derive(Clone, Debug)]
pub struct MessageEnvelope {
  header:  Option<MessageHeader>,
  message: AnyMessage,
  sender:  Option<Pid>,
}

impl MessageEnvelope {
  /// Creates an envelope around a bare payload.
  #[must_use]
  pub const fn new(message: AnyMessage) -> Self {
    Self { header: None, message, sender: None }
  }

  /// Attaches the sending actor's pid.
  #[must_use]
  pub fn with_sender(mut self, sender: Pid) -> Self {
    self.sender = Some(sender);
    self
  }

  /// Attaches header metadata.
  #[must_use]
  pub fn with_header(mut self, header: MessageHeader) -> Self {
    self.header = Some(header);
    self
  }

  /// Returns the payload.
  #[must_use]
  pub const fn message(&self) -> &AnyMessage {
    &self.message
  }

  /// Returns the sender pid, if one was recorded.
  #[must_use]
  pub const fn sender(&self) -> Option<&Pid> {
    self.sender.as_ref()
  }

  /// Returns the header metadata, if any.
  #[must_use]
  pub const fn header(&self) -> Option<&MessageHeader> {
    self.header.as_ref()
  }
}
