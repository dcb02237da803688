//! Lazily allocated auxiliary state of a context.

use alloc::vec::Vec;

use crate::{
  context::ContextHandle,
  messaging::AnyMessage,
  pid::Pid,
  restart_statistics::RestartStatisticsHandle,
  scheduler::TimerHandle,
};

/// Rarely used context state, created on first need.
///
/// Many actors never spawn, watch, stash or time out; keeping these fields
/// out of the context proper keeps the common case allocation-free. The
/// record survives restarts: the stash and watcher set carry over to the
/// next incarnation.
pub(crate) struct ContextExtras {
  children:      Vec<Pid>,
  watchers:      Vec<Pid>,
  restart_stats: Option<RestartStatisticsHandle>,
  stash:         Vec<AnyMessage>,
  timer:         Option<TimerHandle>,
  context:       ContextHandle,
}

impl ContextExtras {
  pub(crate) const fn new(context: ContextHandle) -> Self {
    Self { children: Vec::new(), watchers: Vec::new(), restart_stats: None, stash: Vec::new(), timer: None, context }
  }

  pub(crate) fn context_handle(&self) -> ContextHandle {
    self.context.clone()
  }

  pub(crate) fn add_child(&mut self, pid: Pid) {
    if !self.children.contains(&pid) {
      self.children.push(pid);
    }
  }

  pub(crate) fn remove_child(&mut self, pid: &Pid) {
    self.children.retain(|child| child != pid);
  }

  pub(crate) fn children_snapshot(&self) -> Vec<Pid> {
    self.children.clone()
  }

  pub(crate) fn has_children(&self) -> bool {
    !self.children.is_empty()
  }

  pub(crate) fn watch(&mut self, watcher: Pid) {
    if !self.watchers.contains(&watcher) {
      self.watchers.push(watcher);
    }
  }

  pub(crate) fn unwatch(&mut self, watcher: &Pid) {
    self.watchers.retain(|pid| pid != watcher);
  }

  pub(crate) fn drain_watchers(&mut self) -> Vec<Pid> {
    core::mem::take(&mut self.watchers)
  }

  /// Lazily creates the restart counter shared with failure notifications.
  pub(crate) fn restart_stats(&mut self) -> RestartStatisticsHandle {
    self.restart_stats.get_or_insert_with(RestartStatisticsHandle::new).clone()
  }

  pub(crate) fn stash_push(&mut self, message: AnyMessage) {
    self.stash.push(message);
  }

  pub(crate) fn stash_pop(&mut self) -> Option<AnyMessage> {
    self.stash.pop()
  }

  pub(crate) fn install_timer(&mut self, timer: TimerHandle) {
    if let Some(previous) = self.timer.replace(timer) {
      previous.cancel();
    }
  }

  pub(crate) fn take_timer(&mut self) -> Option<TimerHandle> {
    self.timer.take()
  }
}
