use alloc::format;

use super::{ActorError, SpawnError};

#[test]
fn reason_is_shared_between_classifications() {
  let recoverable = ActorError::recoverable("queue overflow");
  let fatal = ActorError::fatal("queue overflow");

  assert_eq!(recoverable.reason(), fatal.reason());
  assert!(!recoverable.is_fatal());
  assert!(fatal.is_fatal());
}

#[test]
fn display_includes_classification_and_reason() {
  let error = ActorError::fatal("corrupt state");
  assert_eq!(format!("{error}"), "fatal actor failure: corrupt state");

  let spawn = SpawnError::name_exists("user/worker");
  assert_eq!(format!("{spawn}"), "process id already taken: user/worker");
}
