//! Maps pids to the process handles that receive their messages.


use alloc::{format, string::String, sync::Arc};

use hashbrown::HashMap;
use portable_atomic::{AtomicU64, Ordering};
use spin::Mutex;

use crate::{error::SpawnError, pid::Pid, process::Process};

/// Registry owning every live process handle.
///
/// Contexts and pids never own each other; all routing goes through this
/// map. Removal on final stop is what makes a pid dead.
pub struct ProcessRegistry {
  sequence:  AtomicU64,
  processes: Mutex<HashMap<Pid, Arc<dyn Process>>>,
}

impl ProcessRegistry {
  /// Creates an empty registry.
  #[must_use]
  pub fn new() -> Self {
    Self { sequence: AtomicU64::new(0), processes: Mutex::new(HashMap::new()) }
  }

  /// Returns a fresh unique id.
  #[must_use]
  pub fn next_id(&self) -> String {
    let sequence = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
    format!("${sequence}")
  }

  /// Registers `process` under `id` and returns its pid.
  ///
  /// # Errors
  ///
  /// Returns [`SpawnError::NameExists`] when the id is already taken.
  pub fn add(&self, id: &str, process: Arc<dyn Process>) -> Result<Pid, SpawnError> {
    let pid = Pid::new(id);
    let mut processes = self.processes.lock();
    if processes.contains_key(&pid) {
      return Err(SpawnError::name_exists(id));
    }
    processes.insert(pid.clone(), process);
    Ok(pid)
  }

  /// Removes the handle registered under `pid`, returning it if present.
  pub fn remove(&self, pid: &Pid) -> Option<Arc<dyn Process>> {
    self.processes.lock().remove(pid)
  }

  /// Returns the handle registered under `pid`.
  #[must_use]
  pub fn get(&self, pid: &Pid) -> Option<Arc<dyn Process>> {
    self.processes.lock().get(pid).cloned()
  }

  /// Returns `true` while `pid` maps to a live process.
  #[must_use]
  pub fn contains(&self, pid: &Pid) -> bool {
    self.processes.lock().contains_key(pid)
  }

  /// Returns the number of live processes.
  #[must_use]
  pub fn len(&self) -> usize {
    self.processes.lock().len()
  }

  /// Returns `true` when no processes are registered.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.processes.lock().is_empty()
  }
}

impl Default for ProcessRegistry {
  fn default() -> Self {
    Self::new()
  }
}
