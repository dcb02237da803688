//! Process identifier allocated by the process registry.

#[cfg(test)]
mod tests;

use alloc::{string::String, sync::Arc};
use core::fmt;

/// Identifies a running process within the runtime.
///
/// Pids are opaque keys: the registry owns the process handles and contexts
/// refer to each other only by id, which keeps the cyclic parent/child graph
/// free of ownership links. Child ids compose as `parent-id/name`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Pid {
  id: Arc<str>,
}

impl Pid {
  /// Creates a pid wrapping the provided registry id.
  #[must_use]
  pub fn new(id: impl Into<String>) -> Self {
    Self { id: Arc::from(id.into()) }
  }

  /// Returns the registry id backing this pid.
  #[must_use]
  pub fn id(&self) -> &str {
    &self.id
  }
}

impl fmt::Display for Pid {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.id)
  }
}
