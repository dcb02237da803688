//! Transparent union of a bare message and a full envelope.

use crate::{
  messaging::{AnyMessage, MessageEnvelope, MessageHeader},
  pid::Pid,
};

/// A user message as it travels through a mailbox.
///
/// Unwrapping is transparent: a bare message is its own payload with no
/// sender and no headers.
#[derive(Clone, Debug)]
pub enum MessageOrEnvelope {
  /// A payload sent without envelope metadata.
  Message(AnyMessage),
  /// A payload wrapped with headers and/or a sender.
  Envelope(MessageEnvelope),
}

impl MessageOrEnvelope {
  /// Returns the payload regardless of wrapping.
  #[must_use]
  pub const fn message(&self) -> &AnyMessage {
    match self {
      | MessageOrEnvelope::Message(message) => message,
      | MessageOrEnvelope::Envelope(envelope) => envelope.message(),
    }
  }

  /// Returns the sender pid when the envelope recorded one.
  #[must_use]
  pub const fn sender(&self) -> Option<&Pid> {
    match self {
      | MessageOrEnvelope::Message(_) => None,
      | MessageOrEnvelope::Envelope(envelope) => envelope.sender(),
    }
  }

  /// Returns the header metadata when the envelope carries any.
  #[must_use]
  pub const fn header(&self) -> Option<&MessageHeader> {
    match self {
      | MessageOrEnvelope::Message(_) => None,
      | MessageOrEnvelope::Envelope(envelope) => envelope.header(),
    }
  }

  /// Wraps into an envelope, preserving existing metadata.
  #[must_use]
  pub fn into_envelope(self) -> MessageEnvelope {
    match self {
      | MessageOrEnvelope::Message(message) => MessageEnvelope::new(message),
      | MessageOrEnvelope::Envelope(envelope) => envelope,
    }
  }
}

impl From<MessageEnvelope> for MessageOrEnvelope {
  fn from(envelope: MessageEnvelope) -> Self {
    MessageOrEnvelope::Envelope(envelope)
  }
}

impl From<AnyMessage> for MessageOrEnvelope {
  fn from(message: AnyMessage) -> Self {
    MessageOrEnvelope::Message(message)
  }
}
