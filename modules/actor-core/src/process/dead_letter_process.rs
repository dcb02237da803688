//! Sink for messages that no live process can receive.

use alloc::{format, string::String, sync::Weak};

use crate::{
  event_stream::{DeadLetterEvent, EventStreamEvent},
  logging::LogLevel,
  messaging::{MessageOrEnvelope, SystemMessage},
  pid::Pid,
  process::Process,
  system::SystemState,
};

/// Terminal destination for undeliverable messages.
///
/// Every dead letter is published on the event stream; a `Watch` of a pid
/// that no longer exists is answered with an immediate `Terminated`, so a
/// watcher of an already-stopped actor still gets exactly one
/// notification.
pub struct DeadLetterProcess {
  system: Weak<SystemState>,
}

impl DeadLetterProcess {
  pub(crate) const fn new(system: Weak<SystemState>) -> Self {
    Self { system }
  }

  /// Records an undeliverable user message.
  pub fn record(&self, target: Option<Pid>, message: MessageOrEnvelope) {
    let Some(system) = self.system.upgrade() else {
      return;
    };

    let event = DeadLetterEvent::new(target, message);
    if system.config().log_dead_letters() {
      let destination = event.target().map_or_else(|| String::from("nobody"), |pid| format!("{pid}"));
      system.emit_log(
        LogLevel::Debug,
        format!("dead letter: {} to {destination}", event.message().message().type_name()),
        None,
      );
    }
    system.event_stream().publish(&EventStreamEvent::DeadLetter(event));
  }
}

impl Process for DeadLetterProcess {
  fn send_user_message(&self, target: &Pid, message: MessageOrEnvelope) {
    self.record(Some(target.clone()), message);
  }

  fn send_system_message(&self, target: &Pid, message: SystemMessage) {
    let Some(system) = self.system.upgrade() else {
      return;
    };

    match message {
      | SystemMessage::Watch(watcher) => {
        system.send_system_message(&watcher, SystemMessage::Terminated(target.clone()));
      },
      | other => {
        system.emit_log(LogLevel::Debug, format!("dead letter system message: {other:?} to {target}"), None);
      },
    }
  }

  fn stop(&self, _target: &Pid) {}
}
