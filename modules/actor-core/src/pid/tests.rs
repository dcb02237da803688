use alloc::format;

use super::Pid;

#[test]
fn pids_compare_by_id() {
  let left = Pid::new("user/worker-1");
  let right = Pid::new("user/worker-1");
  let other = Pid::new("user/worker-2");

  assert_eq!(left, right);
  assert_ne!(left, other);
}

#[test]
fn display_renders_the_id() {
  let pid = Pid::new("user/worker-1");
  assert_eq!(format!("{pid}"), "user/worker-1");
  assert_eq!(pid.id(), "user/worker-1");
}
