//! Distinguished messages delivered around lifecycle transitions.

use crate::{messaging::Message, pid::Pid};

/// First message every incarnation receives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Started;

impl Message for Started {
  fn is_auto_receive(&self) -> bool {
    true
  }
}

/// Delivered when the actor begins stopping, before children are stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stopping;

impl Message for Stopping {
  fn is_auto_receive(&self) -> bool {
    true
  }
}

/// Delivered after all children terminated, right before final removal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stopped;

impl Message for Stopped {
  fn is_auto_receive(&self) -> bool {
    true
  }
}

/// Delivered to the old incarnation when a restart begins.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Restarting;

impl Message for Restarting {
  fn is_auto_receive(&self) -> bool {
    true
  }
}

/// Notification that a watched process terminated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Terminated {
  /// Pid of the process that terminated.
  pub who: Pid,
}

impl Message for Terminated {
  fn is_auto_receive(&self) -> bool {
    true
  }
}

/// Delivered when the receive-timeout timer fires.
///
/// Does not influence the timer by construction: the timer was already
/// cancelled when this message was enqueued, and processing it must not
/// re-arm.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReceiveTimeout;

impl Message for ReceiveTimeout {
  fn influences_receive_timeout(&self) -> bool {
    false
  }

  fn is_auto_receive(&self) -> bool {
    true
  }
}

/// User message that stops the receiving actor, observably identical to an
/// explicit stop signal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PoisonPill;

impl Message for PoisonPill {}
