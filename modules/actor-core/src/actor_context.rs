//! The per-actor execution context and its lifecycle state machine.

mod context_extras;
mod context_state;


use alloc::{
  boxed::Box,
  format,
  string::String,
  sync::{Arc, Weak},
  vec::Vec,
};
use core::time::Duration;

use portable_atomic::{AtomicU8, Ordering};
use spin::Mutex;

use crate::{
  actor::Actor,
  actor_context::{context_extras::ContextExtras, context_state::ContextState},
  actor_future::{ActorFutureError, ActorFutureProcess},
  context::{Context, ContextHandle},
  error::{ActorError, SpawnError},
  logging::LogLevel,
  mailbox::MessageInvoker,
  messaging::{
    AnyMessage, Continuation, Failure, MessageEnvelope, MessageHeader, MessageOrEnvelope, PoisonPill, ReceiveTimeout,
    Restarting, Started, Stopped, Stopping, SystemMessage, Terminated,
  },
  pid::Pid,
  props::{
    ContextDecoratorFunc, Props, ReceiverFunc, SenderFunc,
    middleware::{compose_decorator_chain, compose_receiver_chain, compose_sender_chain},
  },
  supervision::{Supervisor, SupervisorStrategy, default_supervisor_strategy},
  system::SystemState,
};

const RECEIVE_TIMEOUT_FLOOR: Duration = Duration::from_millis(1);

/// Runtime container driving one actor through its lifecycle.
///
/// The mailbox serializes calls into [`MessageInvoker::invoke_user_message`]
/// and [`MessageInvoker::invoke_system_message`]; every field mutation
/// happens inside such an invocation, behind narrow interior locks that are
/// never held across calls into user code or sends.
pub struct ActorContext {
  myself:              Weak<ActorContext>,
  system:              Arc<SystemState>,
  props:               Arc<Props>,
  parent:              Option<Pid>,
  self_pid:            Pid,
  supervisor:          Arc<dyn SupervisorStrategy>,
  actor:               Mutex<Option<Box<dyn Actor>>>,
  state:               AtomicU8,
  receive_timeout:     Mutex<Duration>,
  message_or_envelope: Mutex<Option<MessageOrEnvelope>>,
  extras:              Mutex<Option<ContextExtras>>,
  sender_chain:        Option<SenderFunc>,
  receiver_chain:      Option<ReceiverFunc>,
  decorator_chain:     Option<ContextDecoratorFunc>,
}

impl ActorContext {
  pub(crate) fn new(system: Arc<SystemState>, props: Arc<Props>, parent: Option<Pid>, self_pid: Pid) -> Arc<Self> {
    let sender_chain = if props.sender_middleware().is_empty() {
      None
    } else {
      Some(compose_sender_chain(props.sender_middleware(), delivery_tail(system.clone())))
    };
    let receiver_chain = if props.receiver_middleware().is_empty() {
      None
    } else {
      Some(compose_receiver_chain(props.receiver_middleware(), receive_tail()))
    };
    let decorator_chain = if props.context_decorators().is_empty() {
      None
    } else {
      Some(compose_decorator_chain(props.context_decorators()))
    };
    let supervisor = props.supervisor_strategy().cloned().unwrap_or_else(default_supervisor_strategy);

    let context = Arc::new_cyclic(|myself| Self {
      myself: myself.clone(),
      system,
      props,
      parent,
      self_pid,
      supervisor,
      actor: Mutex::new(None),
      state: AtomicU8::new(ContextState::None.as_u8()),
      receive_timeout: Mutex::new(Duration::ZERO),
      message_or_envelope: Mutex::new(None),
      extras: Mutex::new(None),
      sender_chain,
      receiver_chain,
      decorator_chain,
    });
    context.incarnate();
    context
  }

  /// Processes one user message delivered by the mailbox.
  ///
  /// Brackets the receive-timeout timer around processing: an influencing
  /// message stops the timer first and re-arms it afterwards, a
  /// non-influencing one leaves it untouched. Failures returned by the
  /// actor are converted into supervision traffic.
  pub fn invoke_user_message(&self, message: MessageOrEnvelope) {
    if self.state() == ContextState::Stopped {
      return;
    }

    let mut influenced = false;
    if !self.configured_receive_timeout().is_zero() {
      influenced = message.message().influences_receive_timeout();
      if influenced {
        self.stop_receive_timeout_timer();
      }
    }

    let snapshot = message.clone();
    match self.process_message(message) {
      | Ok(()) => {
        let timeout = self.configured_receive_timeout();
        if influenced && !timeout.is_zero() {
          self.arm_receive_timeout(timeout);
        }
      },
      | Err(reason) => self.escalate_failure(reason, Some(snapshot)),
    }
  }

  /// Processes one system message delivered by the mailbox.
  pub fn invoke_system_message(&self, message: SystemMessage) {
    match message {
      | SystemMessage::Started => {
        self.invoke_user_message(MessageOrEnvelope::Message(AnyMessage::new(Started)));
      },
      | SystemMessage::Watch(watcher) => self.handle_watch(watcher),
      | SystemMessage::Unwatch(watcher) => self.handle_unwatch(&watcher),
      | SystemMessage::Stop => self.handle_stop(),
      | SystemMessage::Restart => self.handle_restart(),
      | SystemMessage::Terminated(who) => self.handle_terminated(who),
      | SystemMessage::Failure(failure) => self.handle_failure(&failure),
      | SystemMessage::Continuation(continuation) => self.handle_continuation(&continuation),
      // The mailbox consumes suspension signals before they reach us.
      | SystemMessage::Suspend | SystemMessage::Resume => {},
    }
  }

  pub(crate) fn state(&self) -> ContextState {
    ContextState::from_u8(self.state.load(Ordering::Acquire))
  }

  fn set_state(&self, state: ContextState) {
    self.state.store(state.as_u8(), Ordering::Release);
  }

  fn incarnate(&self) {
    self.set_state(ContextState::Alive);
    *self.actor.lock() = Some(self.props.produce());
  }

  fn configured_receive_timeout(&self) -> Duration {
    *self.receive_timeout.lock()
  }

  fn self_handle(&self) -> ContextHandle {
    match self.myself.upgrade() {
      | Some(context) => context,
      | None => panic!("actor context accessed after release"),
    }
  }

  fn with_extras<R>(&self, f: impl FnOnce(&mut ContextExtras) -> R) -> Option<R> {
    self.extras.lock().as_mut().map(f)
  }

  fn ensure_extras(&self) {
    if self.extras.lock().is_some() {
      return;
    }
    // The decorated view is built outside the lock: decorators run user code.
    let mut view = self.self_handle();
    if let Some(chain) = &self.decorator_chain {
      view = (**chain)(view);
    }
    let mut extras = self.extras.lock();
    if extras.is_none() {
      *extras = Some(ContextExtras::new(view));
    }
  }

  fn decorated_context(&self) -> ContextHandle {
    self.ensure_extras();
    match self.with_extras(|extras| extras.context_handle()) {
      | Some(handle) => handle,
      | None => self.self_handle(),
    }
  }

  fn current_message(&self) -> Option<MessageOrEnvelope> {
    self.message_or_envelope.lock().clone()
  }

  fn send_user_message(&self, target: &Pid, message: MessageOrEnvelope) {
    if let Some(chain) = &self.sender_chain {
      let handle = self.decorated_context();
      (**chain)(handle.as_ref(), target, message.into_envelope());
    } else {
      self.system.send_user_message(target, message);
    }
  }

  fn process_message(&self, message: MessageOrEnvelope) -> Result<(), ActorError> {
    if let Some(chain) = &self.receiver_chain {
      let handle = self.decorated_context();
      return (**chain)(handle.as_ref(), message.into_envelope());
    }

    if self.decorator_chain.is_some() {
      let handle = self.decorated_context();
      return handle.receive(message.into_envelope());
    }

    *self.message_or_envelope.lock() = Some(message);
    let result = self.default_receive();
    *self.message_or_envelope.lock() = None;
    result
  }

  fn default_receive(&self) -> Result<(), ActorError> {
    let poisoned = self.current_message().is_some_and(|message| message.message().is::<PoisonPill>());
    if poisoned {
      self.system.process(&self.self_pid).stop(&self.self_pid);
      return Ok(());
    }

    if self.decorator_chain.is_some() {
      let handle = self.decorated_context();
      self.invoke_actor(handle.as_ref())
    } else {
      self.invoke_actor(self)
    }
  }

  fn invoke_actor(&self, view: &dyn Context) -> Result<(), ActorError> {
    // Taken out of the cell so the actor can reach back into this context
    // without holding its own lock.
    let taken = self.actor.lock().take();
    let Some(mut actor) = taken else {
      return Ok(());
    };
    let result = actor.receive(view);
    let mut cell = self.actor.lock();
    if cell.is_none() {
      *cell = Some(actor);
    }
    result
  }

  fn handle_watch(&self, watcher: Pid) {
    if self.state() >= ContextState::Stopping {
      self.system.send_system_message(&watcher, SystemMessage::Terminated(self.self_pid.clone()));
    } else {
      self.ensure_extras();
      self.with_extras(move |extras| extras.watch(watcher));
    }
  }

  fn handle_unwatch(&self, watcher: &Pid) {
    self.with_extras(|extras| extras.unwatch(watcher));
  }

  fn handle_stop(&self) {
    if self.state() >= ContextState::Stopping {
      return;
    }
    self.set_state(ContextState::Stopping);
    self.invoke_user_message(MessageOrEnvelope::Message(AnyMessage::new(Stopping)));
    self.stop_all_children();
    self.try_restart_or_terminate();
  }

  fn handle_restart(&self) {
    self.set_state(ContextState::Restarting);
    self.invoke_user_message(MessageOrEnvelope::Message(AnyMessage::new(Restarting)));
    self.stop_all_children();
    self.try_restart_or_terminate();
  }

  fn handle_terminated(&self, who: Pid) {
    self.with_extras(|extras| extras.remove_child(&who));
    self.invoke_user_message(MessageOrEnvelope::Message(AnyMessage::new(Terminated { who })));
    self.try_restart_or_terminate();
  }

  fn handle_failure(&self, failure: &Failure) {
    let actor_strategy = {
      let actor = self.actor.lock();
      actor.as_ref().and_then(|actor| actor.supervisor_strategy())
    };
    let strategy = actor_strategy.unwrap_or_else(|| self.supervisor.clone());
    strategy.handle_failure(self, failure.who(), failure.restart_stats(), failure.reason(), failure.message());
  }

  fn handle_continuation(&self, continuation: &Continuation) {
    *self.message_or_envelope.lock() = continuation.message().cloned();
    if let Some(task) = continuation.take_task() {
      task();
    }
    *self.message_or_envelope.lock() = None;
  }

  fn handle_root_failure(&self, failure: &Failure) {
    let strategy = self.props.guardian_strategy().cloned().unwrap_or_else(default_supervisor_strategy);
    strategy.handle_failure(self, failure.who(), failure.restart_stats(), failure.reason(), failure.message());
  }

  fn stop_all_children(&self) {
    let children = self.with_extras(|extras| extras.children_snapshot()).unwrap_or_default();
    for child in children {
      self.system.process(&child).stop(&child);
    }
  }

  fn try_restart_or_terminate(&self) {
    if self.with_extras(|extras| extras.has_children()).unwrap_or(false) {
      // Waiting for Terminated from the remaining children.
      return;
    }

    self.cancel_receive_timeout_timer();

    match self.state() {
      | ContextState::Restarting => self.restart(),
      | ContextState::Stopping => self.finalize_stop(),
      | _ => {},
    }
  }

  fn restart(&self) {
    self.incarnate();
    self.system.send_system_message(&self.self_pid, SystemMessage::Resume);
    self.invoke_user_message(MessageOrEnvelope::Message(AnyMessage::new(Started)));

    loop {
      let Some(Some(message)) = self.with_extras(|extras| extras.stash_pop()) else {
        break;
      };
      self.invoke_user_message(MessageOrEnvelope::Message(message));
    }
  }

  fn finalize_stop(&self) {
    self.system.registry().remove(&self.self_pid);
    self.invoke_user_message(MessageOrEnvelope::Message(AnyMessage::new(Stopped)));

    let watchers = self.with_extras(|extras| extras.drain_watchers()).unwrap_or_default();
    let notice = SystemMessage::Terminated(self.self_pid.clone());
    for watcher in watchers {
      self.system.send_system_message(&watcher, notice.clone());
    }
    if let Some(parent) = &self.parent {
      self.system.send_system_message(parent, notice.clone());
    }

    self.set_state(ContextState::Stopped);
  }

  fn stop_receive_timeout_timer(&self) {
    if let Some(Some(timer)) = self.with_extras(|extras| extras.take_timer()) {
      timer.cancel();
    }
  }

  fn cancel_receive_timeout_timer(&self) {
    self.stop_receive_timeout_timer();
    *self.receive_timeout.lock() = Duration::ZERO;
  }

  fn arm_receive_timeout(&self, duration: Duration) {
    self.ensure_extras();
    let myself = self.myself.clone();
    let handle = self.system.scheduler().schedule_once(
      duration,
      Box::new(move || {
        if let Some(context) = myself.upgrade() {
          context.handle_receive_timeout_fired();
        }
      }),
    );
    self.with_extras(move |extras| extras.install_timer(handle));
  }

  fn handle_receive_timeout_fired(&self) {
    // Runs on the scheduler thread: drop the timer, then only enqueue.
    let Some(Some(timer)) = self.with_extras(|extras| extras.take_timer()) else {
      return;
    };
    timer.cancel();
    let target = self.self_pid.clone();
    self.send(&target, AnyMessage::new(ReceiveTimeout));
  }
}

impl Supervisor for ActorContext {
  fn children(&self) -> Vec<Pid> {
    self.with_extras(|extras| extras.children_snapshot()).unwrap_or_default()
  }

  fn escalate_failure(&self, reason: ActorError, message: Option<MessageOrEnvelope>) {
    self.ensure_extras();
    let stats = self.with_extras(|extras| extras.restart_stats()).unwrap_or_default();
    let failure = Arc::new(Failure::new(self.self_pid.clone(), reason, stats, message));

    self.system.send_system_message(&self.self_pid, SystemMessage::Suspend);
    match &self.parent {
      | Some(parent) => self.system.send_system_message(parent, SystemMessage::Failure(failure)),
      | None => self.handle_root_failure(&failure),
    }
  }

  fn restart_children(&self, pids: &[Pid]) {
    for pid in pids {
      self.system.send_system_message(pid, SystemMessage::Restart);
    }
  }

  fn stop_children(&self, pids: &[Pid]) {
    for pid in pids {
      self.system.send_system_message(pid, SystemMessage::Stop);
    }
  }

  fn resume_children(&self, pids: &[Pid]) {
    for pid in pids {
      self.system.send_system_message(pid, SystemMessage::Resume);
    }
  }

  fn monotonic_now(&self) -> Duration {
    self.system.monotonic_now()
  }
}

impl Context for ActorContext {
  fn self_pid(&self) -> &Pid {
    &self.self_pid
  }

  fn parent(&self) -> Option<&Pid> {
    self.parent.as_ref()
  }

  fn message(&self) -> Option<AnyMessage> {
    self.message_or_envelope.lock().as_ref().map(|current| current.message().clone())
  }

  fn sender(&self) -> Option<Pid> {
    self.message_or_envelope.lock().as_ref().and_then(|current| current.sender().cloned())
  }

  fn headers(&self) -> Option<MessageHeader> {
    self.message_or_envelope.lock().as_ref().and_then(|current| current.header().cloned())
  }

  fn send(&self, target: &Pid, message: AnyMessage) {
    self.send_user_message(target, MessageOrEnvelope::Message(message));
  }

  fn request(&self, target: &Pid, message: AnyMessage) {
    let envelope = MessageEnvelope::new(message).with_sender(self.self_pid.clone());
    self.send_user_message(target, MessageOrEnvelope::Envelope(envelope));
  }

  fn request_future(&self, target: &Pid, message: AnyMessage, timeout: Duration) -> Arc<ActorFutureProcess> {
    let future = ActorFutureProcess::spawn(&self.system, timeout);
    let envelope = MessageEnvelope::new(message).with_sender(future.pid().clone());
    self.send_user_message(target, MessageOrEnvelope::Envelope(envelope));
    future
  }

  fn forward(&self, target: &Pid) {
    let Some(current) = self.current_message() else {
      return;
    };
    if current.message().is_auto_receive() {
      self.system.emit_log(
        LogLevel::Error,
        format!("cannot forward auto-receive message {}", current.message().type_name()),
        Some(self.self_pid.clone()),
      );
      return;
    }
    self.send_user_message(target, current);
  }

  fn respond(&self, response: AnyMessage) {
    match self.sender() {
      // Sent as a request so the original requester sees us as the sender.
      | Some(sender) => self.request(&sender, response),
      | None => self.system.dead_letter().record(None, MessageOrEnvelope::Message(response)),
    }
  }

  fn stash(&self) {
    let Some(message) = self.message() else {
      return;
    };
    self.ensure_extras();
    self.with_extras(move |extras| extras.stash_push(message));
  }

  fn watch(&self, who: &Pid) {
    self.system.send_system_message(who, SystemMessage::Watch(self.self_pid.clone()));
  }

  fn unwatch(&self, who: &Pid) {
    self.system.send_system_message(who, SystemMessage::Unwatch(self.self_pid.clone()));
  }

  fn set_receive_timeout(&self, duration: Duration) {
    assert!(!duration.is_zero(), "receive timeout must be greater than zero");

    if duration == self.configured_receive_timeout() {
      return;
    }

    let effective = if duration < RECEIVE_TIMEOUT_FLOOR { Duration::ZERO } else { duration };
    *self.receive_timeout.lock() = effective;

    self.ensure_extras();
    self.stop_receive_timeout_timer();
    if !effective.is_zero() {
      self.arm_receive_timeout(effective);
    }
  }

  fn receive_timeout(&self) -> Duration {
    self.configured_receive_timeout()
  }

  fn spawn(&self, props: Props) -> Pid {
    let name = self.system.registry().next_id();
    match self.spawn_named(props, &name) {
      | Ok(pid) => pid,
      | Err(error) => panic!("fresh child id collided: {error}"),
    }
  }

  fn spawn_prefix(&self, props: Props, prefix: &str) -> Pid {
    let name = format!("{prefix}{}", self.system.registry().next_id());
    match self.spawn_named(props, &name) {
      | Ok(pid) => pid,
      | Err(error) => panic!("fresh child id collided: {error}"),
    }
  }

  fn spawn_named(&self, props: Props, name: &str) -> Result<Pid, SpawnError> {
    assert!(
      props.guardian_strategy().is_none(),
      "props used to spawn a child cannot carry a guardian strategy"
    );

    let id = format!("{}/{name}", self.self_pid.id());
    let props = Arc::new(props);
    let pid = Props::spawn(&props, &id, Some(&self.self_pid), &self.system)?;

    self.ensure_extras();
    let child = pid.clone();
    self.with_extras(move |extras| extras.add_child(child));
    Ok(pid)
  }

  fn stop(&self, pid: &Pid) {
    self.system.process(pid).stop(pid);
  }

  fn poison(&self, pid: &Pid) {
    self.send_user_message(pid, MessageOrEnvelope::Message(AnyMessage::new(PoisonPill)));
  }

  fn receive(&self, envelope: MessageEnvelope) -> Result<(), ActorError> {
    *self.message_or_envelope.lock() = Some(MessageOrEnvelope::Envelope(envelope));
    let result = self.default_receive();
    *self.message_or_envelope.lock() = None;
    result
  }

  fn await_future(
    &self,
    future: &Arc<ActorFutureProcess>,
    continuation: Box<dyn FnOnce(Result<AnyMessage, ActorFutureError>) + Send>,
  ) {
    let saved = self.current_message();
    let system = self.system.clone();
    let target = self.self_pid.clone();
    future.continue_with(Box::new(move |outcome| {
      let task: Box<dyn FnOnce() + Send> = Box::new(move || continuation(outcome));
      let message = SystemMessage::Continuation(Arc::new(Continuation::new(task, saved)));
      system.send_system_message(&target, message);
    }));
  }

  fn log(&self, level: LogLevel, message: &str) {
    self.system.emit_log(level, String::from(message), Some(self.self_pid.clone()));
  }

  fn with_actor(&self, f: &mut dyn FnMut(&mut dyn Actor)) {
    let taken = self.actor.lock().take();
    let Some(mut actor) = taken else {
      return;
    };
    f(actor.as_mut());
    let mut cell = self.actor.lock();
    if cell.is_none() {
      *cell = Some(actor);
    }
  }

  fn context_handle(&self) -> ContextHandle {
    self.self_handle()
  }
}

impl MessageInvoker for ActorContext {
  fn invoke_user_message(&self, message: MessageOrEnvelope) {
    ActorContext::invoke_user_message(self, message);
  }

  fn invoke_system_message(&self, message: SystemMessage) {
    ActorContext::invoke_system_message(self, message);
  }
}

fn delivery_tail(system: Arc<SystemState>) -> SenderFunc {
  Arc::new(move |_ctx, target, envelope| {
    system.send_user_message(target, MessageOrEnvelope::Envelope(envelope));
  })
}

fn receive_tail() -> ReceiverFunc {
  Arc::new(|ctx, envelope| ctx.receive(envelope))
}
