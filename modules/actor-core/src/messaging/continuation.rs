//! Resumption of post-await user code on the actor's own thread.

use alloc::boxed::Box;
use core::fmt;

use spin::Mutex;

use crate::messaging::MessageOrEnvelope;

/// Deferred thunk enqueued when an awaited future completes.
///
/// Carries the envelope that was being processed at await time so the
/// context can restore it for the duration of the thunk, keeping
/// `message()` and `sender()` meaningful inside the continuation.
pub struct Continuation {
  task:    Mutex<Option<Box<dyn FnOnce() + Send>>>,
  message: Option<MessageOrEnvelope>,
}

impl Continuation {
  /// Creates a continuation around `task`, saving the active envelope.
  #[must_use]
  pub const fn new(task: Box<dyn FnOnce() + Send>, message: Option<MessageOrEnvelope>) -> Self {
    Self { task: Mutex::new(Some(task)), message }
  }

  /// Takes the thunk; subsequent calls return `None`.
  #[must_use]
  pub fn take_task(&self) -> Option<Box<dyn FnOnce() + Send>> {
    self.task.lock().take()
  }

  /// Returns the envelope saved at await time.
  #[must_use]
  pub const fn message(&self) -> Option<&MessageOrEnvelope> {
    self.message.as_ref()
  }
}

impl fmt::Debug for Continuation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Continuation").field("message", &self.message).finish()
  }
}
