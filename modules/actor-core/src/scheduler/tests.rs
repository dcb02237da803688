use alloc::{boxed::Box, sync::Arc, vec};
use core::time::Duration;

use portable_atomic::{AtomicU32, Ordering};

use super::{ManualTimerScheduler, TimerScheduler};
use crate::clock::ManualClock;

fn fired_counter() -> (Arc<AtomicU32>, impl FnOnce() + Send) {
  let counter = Arc::new(AtomicU32::new(0));
  let cloned = counter.clone();
  (counter, move || {
    cloned.fetch_add(1, Ordering::AcqRel);
  })
}

#[test]
fn fires_only_once_the_deadline_is_reached() {
  let clock = Arc::new(ManualClock::new());
  let scheduler = ManualTimerScheduler::new(clock.clone());
  let (fired, task) = fired_counter();

  let _handle = scheduler.schedule_once(Duration::from_millis(50), Box::new(task));
  assert_eq!(scheduler.pending_deadlines(), vec![Duration::from_millis(50)]);

  clock.advance(Duration::from_millis(20));
  scheduler.run_due();
  assert_eq!(fired.load(Ordering::Acquire), 0);

  clock.advance(Duration::from_millis(30));
  scheduler.run_due();
  assert_eq!(fired.load(Ordering::Acquire), 1);
  assert!(scheduler.pending_deadlines().is_empty());
}

#[test]
fn cancelled_timers_never_fire() {
  let clock = Arc::new(ManualClock::new());
  let scheduler = ManualTimerScheduler::new(clock.clone());
  let (fired, task) = fired_counter();

  let handle = scheduler.schedule_once(Duration::from_millis(10), Box::new(task));
  handle.cancel();

  clock.advance(Duration::from_millis(10));
  scheduler.run_due();
  assert_eq!(fired.load(Ordering::Acquire), 0);
}

#[test]
fn counts_every_arming_operation() {
  let clock = Arc::new(ManualClock::new());
  let scheduler = ManualTimerScheduler::new(clock);

  assert_eq!(scheduler.armed_total(), 0);
  let _first = scheduler.schedule_once(Duration::from_millis(1), Box::new(|| {}));
  let _second = scheduler.schedule_once(Duration::from_millis(2), Box::new(|| {}));
  assert_eq!(scheduler.armed_total(), 2);
}
