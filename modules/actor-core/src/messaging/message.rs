//! Capability trait implemented by every user message type.

/// Marks a type as sendable to actors and declares its message capabilities.
///
/// Most implementations are empty; the defaults describe an ordinary user
/// message. Override [`influences_receive_timeout`](Self::influences_receive_timeout)
/// to keep a message from resetting an idle timer, the way a periodic
/// housekeeping tick would.
pub trait Message: Send + Sync + 'static {
  /// Whether processing this message resets the receive-timeout timer.
  fn influences_receive_timeout(&self) -> bool {
    true
  }

  /// Whether this is a runtime-originated lifecycle notification.
  ///
  /// Auto-receive messages are delivered to user code but refuse to be
  /// forwarded to other actors.
  fn is_auto_receive(&self) -> bool {
    false
  }
}
