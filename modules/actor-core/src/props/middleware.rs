//! Middleware chains wrapping the send and receive paths.

use alloc::sync::Arc;

use crate::{
  context::{Context, ContextHandle},
  error::ActorError,
  messaging::MessageEnvelope,
  pid::Pid,
};

/// Terminal or wrapped send operation: deliver `envelope` to `target`.
pub type SenderFunc = Arc<dyn Fn(&dyn Context, &Pid, MessageEnvelope) + Send + Sync>;

/// Terminal or wrapped receive operation: run `envelope` through the actor.
pub type ReceiverFunc = Arc<dyn Fn(&dyn Context, MessageEnvelope) -> Result<(), ActorError> + Send + Sync>;

/// Builds the view of the context handed to user code.
pub type ContextDecoratorFunc = Arc<dyn Fn(ContextHandle) -> ContextHandle + Send + Sync>;

/// Layer wrapping the next send operation.
pub type SenderMiddleware = Arc<dyn Fn(SenderFunc) -> SenderFunc + Send + Sync>;

/// Layer wrapping the next receive operation.
pub type ReceiverMiddleware = Arc<dyn Fn(ReceiverFunc) -> ReceiverFunc + Send + Sync>;

/// Layer wrapping the next context decoration.
pub type ContextDecorator = Arc<dyn Fn(ContextDecoratorFunc) -> ContextDecoratorFunc + Send + Sync>;

pub(crate) fn compose_sender_chain(middleware: &[SenderMiddleware], tail: SenderFunc) -> SenderFunc {
  let mut chain = tail;
  for layer in middleware.iter().rev() {
    chain = (**layer)(chain);
  }
  chain
}

pub(crate) fn compose_receiver_chain(middleware: &[ReceiverMiddleware], tail: ReceiverFunc) -> ReceiverFunc {
  let mut chain = tail;
  for layer in middleware.iter().rev() {
    chain = (**layer)(chain);
  }
  chain
}

pub(crate) fn compose_decorator_chain(decorators: &[ContextDecorator]) -> ContextDecoratorFunc {
  let mut chain: ContextDecoratorFunc = Arc::new(|context| context);
  for layer in decorators.iter().rev() {
    chain = (**layer)(chain);
  }
  chain
}
