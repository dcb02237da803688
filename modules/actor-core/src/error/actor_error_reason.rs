//! Human-readable reason attached to an actor failure.

use alloc::string::String;
use core::fmt;

/// Reason text carried by an [`crate::error::ActorError`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActorErrorReason {
  message: String,
}

impl ActorErrorReason {
  /// Creates a reason from the provided text.
  #[must_use]
  pub fn new(message: impl Into<String>) -> Self {
    Self { message: message.into() }
  }

  /// Returns the reason text.
  #[must_use]
  pub fn as_str(&self) -> &str {
    &self.message
  }
}

impl From<&str> for ActorErrorReason {
  fn from(message: &str) -> Self {
    Self::new(message)
  }
}

impl From<String> for ActorErrorReason {
  fn from(message: String) -> Self {
    Self::new(message)
  }
}

impl fmt::Display for ActorErrorReason {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.message)
  }
}
