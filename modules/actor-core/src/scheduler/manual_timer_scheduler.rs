//! Deterministic timer driver fired by the owner instead of a thread.

use alloc::{sync::Arc, vec::Vec};
use core::time::Duration;

use portable_atomic::{AtomicU64, Ordering};
use spin::Mutex;

use crate::{
  clock::{ManualClock, MonotonicClock},
  scheduler::{TimerHandle, TimerScheduler, TimerTask},
};

struct ManualTimerEntry {
  deadline: Duration,
  task:     TimerTask,
  handle:   TimerHandle,
}

/// Timer scheduler whose timers only fire when [`run_due`](Self::run_due) is
/// called, against a [`ManualClock`] the test owns.
///
/// Every arming operation is counted, which lets tests assert that a no-op
/// reconfiguration armed nothing.
pub struct ManualTimerScheduler {
  clock:       Arc<ManualClock>,
  entries:     Mutex<Vec<ManualTimerEntry>>,
  armed_total: AtomicU64,
}

impl ManualTimerScheduler {
  /// Creates a scheduler that computes deadlines against `clock`.
  #[must_use]
  pub const fn new(clock: Arc<ManualClock>) -> Self {
    Self { clock, entries: Mutex::new(Vec::new()), armed_total: AtomicU64::new(0) }
  }

  /// Runs every pending timer whose deadline has been reached.
  ///
  /// Due entries are drained before their tasks run, so a task that arms a
  /// fresh timer does not observe itself.
  pub fn run_due(&self) {
    let now = self.clock.now();
    let due: Vec<ManualTimerEntry> = {
      let mut entries = self.entries.lock();
      let mut drained = Vec::new();
      let mut index = 0;
      while index < entries.len() {
        if entries[index].deadline <= now {
          drained.push(entries.remove(index));
        } else {
          index += 1;
        }
      }
      drained
    };

    for entry in due {
      if !entry.handle.is_cancelled() {
        (entry.task)();
      }
    }
  }

  /// Returns how many timers have ever been armed.
  #[must_use]
  pub fn armed_total(&self) -> u64 {
    self.armed_total.load(Ordering::Acquire)
  }

  /// Returns the deadlines of timers that are pending and not cancelled.
  #[must_use]
  pub fn pending_deadlines(&self) -> Vec<Duration> {
    self
      .entries
      .lock()
      .iter()
      .filter(|entry| !entry.handle.is_cancelled())
      .map(|entry| entry.deadline)
      .collect()
  }
}

impl TimerScheduler for ManualTimerScheduler {
  fn schedule_once(&self, delay: Duration, task: TimerTask) -> TimerHandle {
    let handle = TimerHandle::new();
    let deadline = self.clock.now().saturating_add(delay);
    self.armed_total.fetch_add(1, Ordering::AcqRel);
    self.entries.lock().push(ManualTimerEntry { deadline, task, handle: handle.clone() });
    handle
  }
}
