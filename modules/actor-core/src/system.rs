//! The umbrella object owning registry, event stream and runtime drivers.

mod actor_system_config;

pub use actor_system_config::ActorSystemConfig;


use alloc::{string::String, sync::Arc};
use core::time::Duration;

use crate::{
  clock::MonotonicClock,
  error::SpawnError,
  event_stream::{EventStream, EventStreamEvent},
  logging::{LogEvent, LogLevel},
  mailbox::{CallingThreadDispatcher, Dispatcher},
  messaging::{AnyMessage, MessageOrEnvelope, PoisonPill, SystemMessage},
  pid::Pid,
  process::{DeadLetterProcess, Process},
  process_registry::ProcessRegistry,
  props::Props,
  scheduler::TimerScheduler,
};

/// Shared state every context reaches through its system handle.
pub struct SystemState {
  registry:           ProcessRegistry,
  event_stream:       Arc<EventStream>,
  dead_letter:        Arc<DeadLetterProcess>,
  scheduler:          Arc<dyn TimerScheduler>,
  clock:              Arc<dyn MonotonicClock>,
  config:             ActorSystemConfig,
  default_dispatcher: Arc<dyn Dispatcher>,
}

impl SystemState {
  fn new(
    scheduler: Arc<dyn TimerScheduler>,
    clock: Arc<dyn MonotonicClock>,
    config: ActorSystemConfig,
  ) -> Arc<Self> {
    let default_dispatcher: Arc<dyn Dispatcher> = Arc::new(CallingThreadDispatcher::new(config.throughput()));
    Arc::new_cyclic(|state| Self {
      registry: ProcessRegistry::new(),
      event_stream: Arc::new(EventStream::new()),
      dead_letter: Arc::new(DeadLetterProcess::new(state.clone())),
      scheduler,
      clock,
      config,
      default_dispatcher,
    })
  }

  /// Returns the process registry.
  #[must_use]
  pub const fn registry(&self) -> &ProcessRegistry {
    &self.registry
  }

  /// Returns the event stream.
  #[must_use]
  pub const fn event_stream(&self) -> &Arc<EventStream> {
    &self.event_stream
  }

  /// Returns the dead-letter sink.
  #[must_use]
  pub const fn dead_letter(&self) -> &Arc<DeadLetterProcess> {
    &self.dead_letter
  }

  /// Returns the timer scheduler.
  #[must_use]
  pub const fn scheduler(&self) -> &Arc<dyn TimerScheduler> {
    &self.scheduler
  }

  /// Returns the system configuration.
  #[must_use]
  pub const fn config(&self) -> &ActorSystemConfig {
    &self.config
  }

  /// Returns the dispatcher used when props do not override it.
  #[must_use]
  pub fn default_dispatcher(&self) -> Arc<dyn Dispatcher> {
    self.default_dispatcher.clone()
  }

  /// Returns the monotonic clock reading.
  #[must_use]
  pub fn monotonic_now(&self) -> Duration {
    self.clock.now()
  }

  /// Resolves `pid` to its process handle, falling back to dead letters.
  #[must_use]
  pub fn process(&self, pid: &Pid) -> Arc<dyn Process> {
    match self.registry.get(pid) {
      | Some(process) => process,
      | None => self.dead_letter.clone(),
    }
  }

  /// Delivers a user message to `pid` or to dead letters.
  pub fn send_user_message(&self, pid: &Pid, message: MessageOrEnvelope) {
    self.process(pid).send_user_message(pid, message);
  }

  /// Delivers a system message to `pid` or to dead letters.
  pub fn send_system_message(&self, pid: &Pid, message: SystemMessage) {
    self.process(pid).send_system_message(pid, message);
  }

  /// Publishes a log event on the event stream.
  pub fn emit_log(&self, level: LogLevel, message: String, origin: Option<Pid>) {
    let event = LogEvent::new(level, message, self.clock.now(), origin);
    self.event_stream.publish(&EventStreamEvent::Log(event));
  }
}

/// Handle to a running actor system.
#[derive(Clone)]
pub struct ActorSystem {
  state: Arc<SystemState>,
}

impl ActorSystem {
  /// Creates a system with default configuration.
  #[must_use]
  pub fn new(scheduler: Arc<dyn TimerScheduler>, clock: Arc<dyn MonotonicClock>) -> Self {
    Self::with_config(scheduler, clock, ActorSystemConfig::default())
  }

  /// Creates a system with the provided configuration.
  #[must_use]
  pub fn with_config(
    scheduler: Arc<dyn TimerScheduler>,
    clock: Arc<dyn MonotonicClock>,
    config: ActorSystemConfig,
  ) -> Self {
    Self { state: SystemState::new(scheduler, clock, config) }
  }

  /// Returns the shared system state.
  #[must_use]
  pub const fn state(&self) -> &Arc<SystemState> {
    &self.state
  }

  /// Spawns a top-level actor under a registry-generated name.
  ///
  /// # Panics
  ///
  /// Panics on the unreachable collision of a freshly generated id.
  #[must_use]
  pub fn spawn(&self, props: Props) -> Pid {
    let name = self.state.registry().next_id();
    match self.spawn_named(props, &name) {
      | Ok(pid) => pid,
      | Err(error) => panic!("fresh top-level id collided: {error}"),
    }
  }

  /// Spawns a top-level actor under the given name.
  ///
  /// Unlike child spawns, top-level props may carry a guardian strategy;
  /// it then handles failures escalated past this actor.
  ///
  /// # Errors
  ///
  /// Returns [`SpawnError::NameExists`] when the name is already taken.
  pub fn spawn_named(&self, props: Props, name: &str) -> Result<Pid, SpawnError> {
    let props = Arc::new(props);
    Props::spawn(&props, name, None, &self.state)
  }

  /// Sends a stop signal to `pid`.
  pub fn stop(&self, pid: &Pid) {
    self.state.process(pid).stop(pid);
  }

  /// Enqueues a `PoisonPill` user message for `pid`.
  pub fn poison(&self, pid: &Pid) {
    self.state.send_user_message(pid, MessageOrEnvelope::Message(AnyMessage::new(PoisonPill)));
  }
}
