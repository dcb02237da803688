//! Failure modes of an actor future.

use core::fmt;

/// Why a future settled without a result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActorFutureError {
  /// No response arrived before the configured timeout.
  DeadlineExceeded,
}

impl fmt::Display for ActorFutureError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | ActorFutureError::DeadlineExceeded => f.write_str("future deadline exceeded"),
    }
  }
}
