//! Failure handling policies for supervised actors.

mod all_for_one_strategy;
mod one_for_one_strategy;
mod supervisor;
mod supervisor_directive;
mod supervisor_strategy;

pub use all_for_one_strategy::AllForOneStrategy;
pub use one_for_one_strategy::OneForOneStrategy;
pub use supervisor::Supervisor;
pub use supervisor_directive::SupervisorDirective;
pub use supervisor_strategy::{Decider, SupervisorStrategy};

#[cfg(test)]
mod tests;

use alloc::sync::Arc;
use core::time::Duration;

/// Returns the strategy applied when nothing more specific is configured:
/// one-for-one, at most ten restarts within ten seconds.
#[must_use]
pub fn default_supervisor_strategy() -> Arc<dyn SupervisorStrategy> {
  Arc::new(OneForOneStrategy::new(10, Duration::from_secs(10)))
}
