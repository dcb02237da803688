#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unreachable_pub)]

//! Entry point crate for the kaskad actor runtime workspace.
//!
//! Re-exports the runtime core (`kaskad-actor-core-rs`) together with the
//! std adapters (`kaskad-actor-std-rs`) so applications can depend on a
//! single crate. The `core` module stays `no_std`-clean; everything under
//! [`std_runtime`] assumes a tokio runtime is available.

pub use kaskad_actor_core_rs as core;
pub use kaskad_actor_std_rs as std_runtime;
