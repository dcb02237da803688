//! Callback surface the mailbox delivers messages through.

use crate::messaging::{MessageOrEnvelope, SystemMessage};

/// Receives messages one at a time from a mailbox.
///
/// Implemented by the actor context. Failures never cross this boundary:
/// the invoker converts them into supervision traffic itself.
pub trait MessageInvoker: Send + Sync {
  /// Processes one user message.
  fn invoke_user_message(&self, message: MessageOrEnvelope);

  /// Processes one system message. `Suspend` and `Resume` never arrive
  /// here; the mailbox consumes them.
  fn invoke_system_message(&self, message: SystemMessage);
}
