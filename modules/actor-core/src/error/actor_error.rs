//! Error classification returned by actor message handlers.

use core::fmt;

use crate::error::ActorErrorReason;

/// Failure reported by user code while processing a message.
///
/// The classification is what the default supervision decider keys on:
/// recoverable failures restart the actor, fatal failures stop it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActorError {
  /// Failure that a restart is expected to clear.
  Recoverable(ActorErrorReason),
  /// Failure that restarting cannot fix.
  Fatal(ActorErrorReason),
}

impl ActorError {
  /// Creates a recoverable error with the provided reason.
  #[must_use]
  pub fn recoverable(reason: impl Into<ActorErrorReason>) -> Self {
    Self::Recoverable(reason.into())
  }

  /// Creates a fatal error with the provided reason.
  #[must_use]
  pub fn fatal(reason: impl Into<ActorErrorReason>) -> Self {
    Self::Fatal(reason.into())
  }

  /// Returns the underlying reason regardless of classification.
  #[must_use]
  pub const fn reason(&self) -> &ActorErrorReason {
    match self {
      | ActorError::Recoverable(reason) | ActorError::Fatal(reason) => reason,
    }
  }

  /// Returns `true` for fatal failures.
  #[must_use]
  pub const fn is_fatal(&self) -> bool {
    matches!(self, ActorError::Fatal(_))
  }
}

impl fmt::Display for ActorError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | ActorError::Recoverable(reason) => write!(f, "recoverable actor failure: {reason}"),
      | ActorError::Fatal(reason) => write!(f, "fatal actor failure: {reason}"),
    }
  }
}
