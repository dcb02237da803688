//! Mailbox scheduling on a tokio runtime.

use kaskad_actor_core_rs::Dispatcher;
use tokio::runtime::Handle;

/// Dispatcher running each mailbox batch as a spawned tokio task.
///
/// Batches are short synchronous bursts bounded by the throughput, so
/// running them on the async runtime keeps actors responsive without a
/// dedicated thread pool.
pub struct TokioDispatcher {
  handle:     Handle,
  throughput: usize,
}

impl TokioDispatcher {
  /// Creates a dispatcher spawning onto the given runtime handle.
  #[must_use]
  pub const fn new(handle: Handle, throughput: usize) -> Self {
    Self { handle, throughput }
  }

  /// Creates a dispatcher bound to the ambient runtime.
  ///
  /// # Panics
  ///
  /// Panics when called outside a tokio runtime.
  #[must_use]
  pub fn current(throughput: usize) -> Self {
    Self::new(Handle::current(), throughput)
  }
}

impl Dispatcher for TokioDispatcher {
  fn schedule(&self, runnable: Box<dyn FnOnce() + Send>) {
    self.handle.spawn(async move {
      runnable();
    });
  }

  fn throughput(&self) -> usize {
    self.throughput
  }
}
