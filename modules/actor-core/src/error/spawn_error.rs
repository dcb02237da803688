//! Errors returned when spawning an actor fails.

use alloc::string::String;
use core::fmt;

/// Failure reported by the spawn path before any child is registered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpawnError {
  /// Another process is already registered under the requested id.
  NameExists(String),
}

impl SpawnError {
  /// Creates an error for a duplicate registry id.
  #[must_use]
  pub fn name_exists(id: impl Into<String>) -> Self {
    Self::NameExists(id.into())
  }
}

impl fmt::Display for SpawnError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | SpawnError::NameExists(id) => write!(f, "process id already taken: {id}"),
    }
  }
}
