#![deny(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]
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

//! Std adapters for the kaskad actor runtime.
//!
//! The core crate abstracts time and execution behind traits; this crate
//! satisfies them with tokio-backed drivers and bridges the runtime's log
//! events into the `tracing` ecosystem.

mod clock;
mod dispatcher;
mod logging;
mod scheduler;
mod system;

pub use clock::InstantClock;
pub use dispatcher::TokioDispatcher;
pub use logging::TracingLoggerSubscriber;
pub use scheduler::TokioTimerScheduler;
pub use system::ActorSystemBuilder;
