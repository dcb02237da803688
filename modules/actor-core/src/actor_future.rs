//! One-shot completion primitive whose pid doubles as a reply address.

mod actor_future_error;

pub use actor_future_error::ActorFutureError;


use alloc::{boxed::Box, format, sync::Arc, vec::Vec};
use core::{hint::spin_loop, time::Duration};

use spin::Mutex;

use crate::{
  messaging::{AnyMessage, MessageOrEnvelope, SystemMessage},
  pid::Pid,
  process::Process,
  scheduler::TimerHandle,
  system::SystemState,
};

/// Callback invoked once with the future's outcome.
pub type FutureListener = Box<dyn FnOnce(Result<AnyMessage, ActorFutureError>) + Send>;

struct FutureState {
  result:    Option<AnyMessage>,
  error:     Option<ActorFutureError>,
  done:      bool,
  listeners: Vec<FutureListener>,
}

/// Registry-visible process that completes with the first user message it
/// receives.
///
/// Created by `request_future`: the future's pid is used as the envelope
/// sender, so whoever responds completes it. The timeout is enforced by the
/// future itself through a scheduler deadline; once completed or expired
/// the pid is removed from the registry.
pub struct ActorFutureProcess {
  pid:    Pid,
  system: Arc<SystemState>,
  state:  Mutex<FutureState>,
  timer:  Mutex<Option<TimerHandle>>,
}

impl ActorFutureProcess {
  /// Registers a fresh future, arming its deadline when `timeout` is
  /// non-zero.
  ///
  /// # Panics
  ///
  /// Panics when the freshly generated future id collides in the registry,
  /// which the id allocator rules out.
  #[must_use]
  pub fn spawn(system: &Arc<SystemState>, timeout: Duration) -> Arc<Self> {
    let id = format!("future{}", system.registry().next_id());
    let future = Arc::new(Self {
      pid:    Pid::new(id.as_str()),
      system: system.clone(),
      state:  Mutex::new(FutureState { result: None, error: None, done: false, listeners: Vec::new() }),
      timer:  Mutex::new(None),
    });

    let registered: Arc<dyn Process> = future.clone();
    if let Err(error) = system.registry().add(&id, registered) {
      panic!("fresh future id collided: {error}");
    }

    if !timeout.is_zero() {
      let expiring = future.clone();
      let handle = system
        .scheduler()
        .schedule_once(timeout, Box::new(move || expiring.fail(ActorFutureError::DeadlineExceeded)));
      *future.timer.lock() = Some(handle);
    }

    future
  }

  /// Returns the pid responses should be addressed to.
  #[must_use]
  pub const fn pid(&self) -> &Pid {
    &self.pid
  }

  /// Completes the future with `message`; later completions are ignored.
  pub fn complete(&self, message: AnyMessage) {
    self.settle(Ok(message));
  }

  /// Fails the future with `error`; later completions are ignored.
  pub fn fail(&self, error: ActorFutureError) {
    self.settle(Err(error));
  }

  /// Attaches a listener, invoked immediately when already settled.
  pub fn continue_with(&self, listener: FutureListener) {
    let outcome = {
      let mut state = self.state.lock();
      if state.done {
        self.outcome_locked(&state)
      } else {
        state.listeners.push(listener);
        return;
      }
    };
    if let Some(outcome) = outcome {
      listener_call(listener, outcome);
    }
  }

  /// Returns the successful result, when settled with one.
  #[must_use]
  pub fn result(&self) -> Option<AnyMessage> {
    self.state.lock().result.clone()
  }

  /// Returns the error, when settled with one.
  #[must_use]
  pub fn err(&self) -> Option<ActorFutureError> {
    self.state.lock().error.clone()
  }

  /// Returns the outcome when the future has settled.
  #[must_use]
  pub fn try_outcome(&self) -> Option<Result<AnyMessage, ActorFutureError>> {
    let state = self.state.lock();
    if state.done { self.outcome_locked(&state) } else { None }
  }

  /// Busy-waits until the future settles.
  ///
  /// Only sensible when a deadline was armed or completion is driven by
  /// another thread.
  #[must_use]
  pub fn wait(&self) -> Result<AnyMessage, ActorFutureError> {
    loop {
      if let Some(outcome) = self.try_outcome() {
        return outcome;
      }
      spin_loop();
    }
  }

  #[allow(clippy::unused_self)]
  fn outcome_locked(&self, state: &FutureState) -> Option<Result<AnyMessage, ActorFutureError>> {
    if let Some(result) = &state.result {
      return Some(Ok(result.clone()));
    }
    state.error.clone().map(Err)
  }

  fn settle(&self, outcome: Result<AnyMessage, ActorFutureError>) {
    let listeners = {
      let mut state = self.state.lock();
      if state.done {
        return;
      }
      state.done = true;
      match &outcome {
        | Ok(message) => state.result = Some(message.clone()),
        | Err(error) => state.error = Some(error.clone()),
      }
      core::mem::take(&mut state.listeners)
    };

    if let Some(timer) = self.timer.lock().take() {
      timer.cancel();
    }
    self.system.registry().remove(&self.pid);

    for listener in listeners {
      listener_call(listener, outcome.clone());
    }
  }
}

fn listener_call(listener: FutureListener, outcome: Result<AnyMessage, ActorFutureError>) {
  listener(outcome);
}

impl Process for ActorFutureProcess {
  fn send_user_message(&self, _target: &Pid, message: MessageOrEnvelope) {
    self.complete(message.message().clone());
  }

  fn send_system_message(&self, _target: &Pid, _message: SystemMessage) {}

  fn stop(&self, _target: &Pid) {
    self.fail(ActorFutureError::DeadlineExceeded);
  }
}
