//! Dynamically typed, shareable message payload.

use alloc::sync::Arc;
use core::{
  any::{Any, type_name},
  fmt,
};

use crate::messaging::Message;

/// Owned, dynamically typed message payload.
///
/// Capabilities declared by the payload's [`Message`] implementation are
/// captured at wrap time so the runtime never needs the concrete type back;
/// receivers recover it with [`downcast_ref`](Self::downcast_ref). Cloning
/// shares the payload.
#[derive(Clone)]
pub struct AnyMessage {
  payload:      Arc<dyn Any + Send + Sync>,
  type_name:    &'static str,
  influential:  bool,
  auto_receive: bool,
}

impl AnyMessage {
  /// Wraps a user message.
  #[must_use]
  pub fn new<M: Message>(payload: M) -> Self {
    let influential = payload.influences_receive_timeout();
    let auto_receive = payload.is_auto_receive();
    Self { payload: Arc::new(payload), type_name: type_name::<M>(), influential, auto_receive }
  }

  /// Attempts to view the payload as `M`.
  #[must_use]
  pub fn downcast_ref<M: Any>(&self) -> Option<&M> {
    self.payload.downcast_ref::<M>()
  }

  /// Returns `true` when the payload is of type `M`.
  #[must_use]
  pub fn is<M: Any>(&self) -> bool {
    self.payload.is::<M>()
  }

  /// Returns the payload's type name, for diagnostics only.
  #[must_use]
  pub const fn type_name(&self) -> &'static str {
    self.type_name
  }

  /// Whether processing this message resets the receive-timeout timer.
  #[must_use]
  pub const fn influences_receive_timeout(&self) -> bool {
    self.influential
  }

  /// Whether this is a runtime-originated lifecycle notification.
  #[must_use]
  pub const fn is_auto_receive(&self) -> bool {
    self.auto_receive
  }
}

impl fmt::Debug for AnyMessage {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("AnyMessage").field("type", &self.type_name).finish()
  }
}
