//! Ordered lifecycle states of an actor context.

/// Lifecycle position of a context.
///
/// The ordering backs "at or past" checks such as "already stopping".
/// Transitions are monotonic except that `Restarting` returns to `Alive`
/// through re-incarnation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum ContextState {
  /// Created but not yet incarnated.
  None      = 0,
  /// Processing messages normally.
  Alive     = 1,
  /// Quiescing children ahead of re-incarnation.
  Restarting = 2,
  /// Quiescing children ahead of final removal.
  Stopping  = 3,
  /// Removed from the registry; user messages are inert.
  Stopped   = 4,
}

impl ContextState {
  pub(crate) const fn as_u8(self) -> u8 {
    self as u8
  }

  pub(crate) const fn from_u8(value: u8) -> Self {
    match value {
      | 0 => ContextState::None,
      | 1 => ContextState::Alive,
      | 2 => ContextState::Restarting,
      | 3 => ContextState::Stopping,
      | _ => ContextState::Stopped,
    }
  }
}
