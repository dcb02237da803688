#![deny(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::redundant_clone))]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(clippy::missing_safety_doc)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::print_stdout)]
#![deny(clippy::dbg_macro)]
#![allow(unknown_lints)]
#![no_std]

//! Core of the kaskad actor runtime.
//!
//! Everything revolves around the per-actor execution context: it holds the
//! actor's identity, children, watchers, stash and receive-timeout timer, and
//! drives the actor through its lifecycle in response to user and system
//! messages. Time is abstracted behind [`MonotonicClock`] and
//! [`TimerScheduler`] so the crate stays `no_std`; runtimes supply drivers
//! that satisfy those traits.

extern crate alloc;

mod actor;
mod actor_context;
mod actor_future;
mod clock;
mod context;
mod error;
mod event_stream;
mod logging;
mod mailbox;
mod messaging;
mod pid;
mod process;
mod process_registry;
mod props;
mod restart_statistics;
mod scheduler;
mod supervision;
mod system;

pub use actor::Actor;
pub use actor_context::ActorContext;
pub use actor_future::{ActorFutureError, ActorFutureProcess, FutureListener};
pub use clock::{ManualClock, MonotonicClock};
pub use context::{Context, ContextHandle};
pub use error::{ActorError, ActorErrorReason, SpawnError};
pub use event_stream::{
  DeadLetterEvent, EventStream, EventStreamEvent, EventStreamSubscriber, EventStreamSubscription,
};
pub use logging::{LogEvent, LogLevel};
pub use mailbox::{CallingThreadDispatcher, Dispatcher, Mailbox, MessageInvoker};
pub use messaging::{
  AnyMessage, Continuation, Failure, Message, MessageEnvelope, MessageHeader, MessageOrEnvelope, PoisonPill,
  ReceiveTimeout, Restarting, Started, Stopped, Stopping, SystemMessage, Terminated,
};
pub use pid::Pid;
pub use process::{ActorProcess, DeadLetterProcess, Process};
pub use process_registry::ProcessRegistry;
pub use props::{
  ActorProducer, ContextDecorator, ContextDecoratorFunc, Props, ReceiverFunc, ReceiverMiddleware, SenderFunc,
  SenderMiddleware,
};
pub use restart_statistics::{RestartStatistics, RestartStatisticsHandle};
pub use scheduler::{ManualTimerScheduler, TimerHandle, TimerScheduler, TimerTask};
pub use supervision::{
  AllForOneStrategy, Decider, OneForOneStrategy, Supervisor, SupervisorDirective, SupervisorStrategy,
  default_supervisor_strategy,
};
pub use system::{ActorSystem, ActorSystemConfig, SystemState};
