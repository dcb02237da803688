//! Immutable configuration describing how to construct an actor.

pub(crate) mod middleware;

pub use middleware::{
  ContextDecorator, ContextDecoratorFunc, ReceiverFunc, ReceiverMiddleware, SenderFunc, SenderMiddleware,
};

#[cfg(test)]
mod tests;

use alloc::{boxed::Box, sync::Arc, vec::Vec};

use crate::{
  actor::Actor,
  actor_context::ActorContext,
  error::SpawnError,
  mailbox::{Dispatcher, Mailbox},
  messaging::SystemMessage,
  pid::Pid,
  process::{ActorProcess, Process},
  supervision::SupervisorStrategy,
  system::SystemState,
};

/// Factory producing a fresh actor incarnation.
pub type ActorProducer = dyn Fn() -> Box<dyn Actor> + Send + Sync;

/// Immutable factory and middleware configuration for an actor.
///
/// Props are cheap to clone and reusable: every spawn (and every restart)
/// asks the producer for a fresh incarnation.
#[derive(Clone)]
pub struct Props {
  producer:            Arc<ActorProducer>,
  guardian_strategy:   Option<Arc<dyn SupervisorStrategy>>,
  supervisor_strategy: Option<Arc<dyn SupervisorStrategy>>,
  dispatcher:          Option<Arc<dyn Dispatcher>>,
  sender_middleware:   Vec<SenderMiddleware>,
  receiver_middleware: Vec<ReceiverMiddleware>,
  context_decorators:  Vec<ContextDecorator>,
}

impl Props {
  /// Creates props from a producer returning boxed actors.
  #[must_use]
  pub fn from_producer(producer: impl Fn() -> Box<dyn Actor> + Send + Sync + 'static) -> Self {
    Self {
      producer:            Arc::new(producer),
      guardian_strategy:   None,
      supervisor_strategy: None,
      dispatcher:          None,
      sender_middleware:   Vec::new(),
      receiver_middleware: Vec::new(),
      context_decorators:  Vec::new(),
    }
  }

  /// Convenience helper building props from a plain constructor.
  #[must_use]
  pub fn from_fn<A, F>(producer: F) -> Self
  where
    A: Actor + 'static,
    F: Fn() -> A + Send + Sync + 'static, {
    Self::from_producer(move || Box::new(producer()))
  }

  /// Installs a guardian strategy; only valid for top-level supervisors.
  #[must_use]
  pub fn with_guardian_strategy(mut self, strategy: Arc<dyn SupervisorStrategy>) -> Self {
    self.guardian_strategy = Some(strategy);
    self
  }

  /// Overrides the fallback strategy applied to this actor's children.
  #[must_use]
  pub fn with_supervisor_strategy(mut self, strategy: Arc<dyn SupervisorStrategy>) -> Self {
    self.supervisor_strategy = Some(strategy);
    self
  }

  /// Overrides the dispatcher driving this actor's mailbox.
  #[must_use]
  pub fn with_dispatcher(mut self, dispatcher: Arc<dyn Dispatcher>) -> Self {
    self.dispatcher = Some(dispatcher);
    self
  }

  /// Appends sender middleware; the first registered layer is outermost.
  #[must_use]
  pub fn with_sender_middleware(mut self, middleware: impl IntoIterator<Item = SenderMiddleware>) -> Self {
    self.sender_middleware.extend(middleware);
    self
  }

  /// Appends receiver middleware; the first registered layer is outermost.
  #[must_use]
  pub fn with_receiver_middleware(mut self, middleware: impl IntoIterator<Item = ReceiverMiddleware>) -> Self {
    self.receiver_middleware.extend(middleware);
    self
  }

  /// Appends a context decorator wrapping the view handed to the actor.
  #[must_use]
  pub fn with_context_decorator(mut self, decorator: ContextDecorator) -> Self {
    self.context_decorators.push(decorator);
    self
  }

  /// Returns the guardian strategy, if one was installed.
  #[must_use]
  pub fn guardian_strategy(&self) -> Option<&Arc<dyn SupervisorStrategy>> {
    self.guardian_strategy.as_ref()
  }

  /// Returns the configured fallback supervisor strategy, if any.
  #[must_use]
  pub fn supervisor_strategy(&self) -> Option<&Arc<dyn SupervisorStrategy>> {
    self.supervisor_strategy.as_ref()
  }

  /// Produces a fresh actor incarnation.
  #[must_use]
  pub fn produce(&self) -> Box<dyn Actor> {
    (*self.producer)()
  }

  pub(crate) fn sender_middleware(&self) -> &[SenderMiddleware] {
    &self.sender_middleware
  }

  pub(crate) fn receiver_middleware(&self) -> &[ReceiverMiddleware] {
    &self.receiver_middleware
  }

  pub(crate) fn context_decorators(&self) -> &[ContextDecorator] {
    &self.context_decorators
  }

  /// Spawns a process running an actor built from `props`.
  ///
  /// Registers the mailbox-backed process under `id`, wires the context as
  /// the mailbox invoker and posts the initial `Started` system message.
  ///
  /// # Errors
  ///
  /// Returns [`SpawnError::NameExists`] when `id` is already registered; no
  /// process is created in that case.
  pub fn spawn(
    props: &Arc<Props>,
    id: &str,
    parent: Option<&Pid>,
    system: &Arc<SystemState>,
  ) -> Result<Pid, SpawnError> {
    let mailbox = Mailbox::new();
    let process: Arc<dyn Process> = Arc::new(ActorProcess::new(mailbox.clone()));
    let pid = system.registry().add(id, process)?;

    let context = ActorContext::new(system.clone(), props.clone(), parent.cloned(), pid.clone());
    let dispatcher = props.dispatcher.clone().unwrap_or_else(|| system.default_dispatcher());
    mailbox.register_handlers(context, dispatcher);
    mailbox.post_system_message(SystemMessage::Started);

    Ok(pid)
  }
}
