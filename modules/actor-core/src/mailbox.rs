//! Priority mailbox serializing delivery to one actor.

mod dispatcher;
mod message_invoker;

pub use dispatcher::{CallingThreadDispatcher, Dispatcher};
pub use message_invoker::MessageInvoker;


use alloc::{
  boxed::Box,
  collections::VecDeque,
  sync::{Arc, Weak},
};

use portable_atomic::{AtomicBool, Ordering};
use spin::Mutex;

use crate::messaging::{MessageOrEnvelope, SystemMessage};

const FALLBACK_THROUGHPUT: usize = 300;

/// Two-queue mailbox: system messages take priority over user messages,
/// and user delivery is gated by a suspension flag.
///
/// The mailbox guarantees that at most one invocation of the registered
/// [`MessageInvoker`] is in flight at any moment; the `running` latch is
/// what serializes batches across dispatcher threads.
pub struct Mailbox {
  myself:       Weak<Mailbox>,
  system_queue: Mutex<VecDeque<SystemMessage>>,
  user_queue:   Mutex<VecDeque<MessageOrEnvelope>>,
  suspended:    AtomicBool,
  running:      AtomicBool,
  invoker:      Mutex<Option<Arc<dyn MessageInvoker>>>,
  dispatcher:   Mutex<Option<Arc<dyn Dispatcher>>>,
}

impl Mailbox {
  /// Creates an idle, unregistered mailbox.
  #[must_use]
  pub fn new() -> Arc<Self> {
    Arc::new_cyclic(|myself| Self {
      myself:       myself.clone(),
      system_queue: Mutex::new(VecDeque::new()),
      user_queue:   Mutex::new(VecDeque::new()),
      suspended:    AtomicBool::new(false),
      running:      AtomicBool::new(false),
      invoker:      Mutex::new(None),
      dispatcher:   Mutex::new(None),
    })
  }

  /// Wires the invoker and dispatcher; messages posted earlier start
  /// draining immediately.
  pub fn register_handlers(&self, invoker: Arc<dyn MessageInvoker>, dispatcher: Arc<dyn Dispatcher>) {
    *self.invoker.lock() = Some(invoker);
    *self.dispatcher.lock() = Some(dispatcher);
    if self.has_runnable() {
      self.schedule();
    }
  }

  /// Enqueues a user message.
  pub fn post_user_message(&self, message: MessageOrEnvelope) {
    self.user_queue.lock().push_back(message);
    self.schedule();
  }

  /// Enqueues a system message.
  pub fn post_system_message(&self, message: SystemMessage) {
    self.system_queue.lock().push_back(message);
    self.schedule();
  }

  /// Returns `true` while user message delivery is paused.
  #[must_use]
  pub fn is_suspended(&self) -> bool {
    self.suspended.load(Ordering::Acquire)
  }

  /// Returns the number of user messages awaiting processing.
  #[must_use]
  pub fn user_len(&self) -> usize {
    self.user_queue.lock().len()
  }

  /// Returns the number of system messages awaiting processing.
  #[must_use]
  pub fn system_len(&self) -> usize {
    self.system_queue.lock().len()
  }

  fn has_runnable(&self) -> bool {
    if !self.system_queue.lock().is_empty() {
      return true;
    }
    !self.is_suspended() && !self.user_queue.lock().is_empty()
  }

  fn schedule(&self) {
    if self.running.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire).is_err() {
      return;
    }

    let dispatcher = self.dispatcher.lock().clone();
    let mailbox = self.myself.upgrade();
    match (dispatcher, mailbox) {
      | (Some(dispatcher), Some(mailbox)) => {
        dispatcher.schedule(Box::new(move || mailbox.run()));
      },
      | _ => {
        // Not registered yet; the registration path reschedules.
        self.running.store(false, Ordering::Release);
      },
    }
  }

  /// Drains the queues, invoking the registered handler one message at a
  /// time. Called by the dispatcher; the `running` latch is already held.
  pub fn run(&self) {
    let invoker = self.invoker.lock().clone();
    let Some(invoker) = invoker else {
      self.running.store(false, Ordering::Release);
      return;
    };
    let throughput = self.dispatcher.lock().as_ref().map_or(FALLBACK_THROUGHPUT, |d| d.throughput());

    loop {
      let mut processed = 0_usize;
      while processed < throughput {
        let system = self.system_queue.lock().pop_front();
        if let Some(system) = system {
          processed += 1;
          match system {
            | SystemMessage::Suspend => self.suspended.store(true, Ordering::Release),
            | SystemMessage::Resume => self.suspended.store(false, Ordering::Release),
            | other => invoker.invoke_system_message(other),
          }
          continue;
        }

        if !self.is_suspended() {
          let user = self.user_queue.lock().pop_front();
          if let Some(user) = user {
            processed += 1;
            invoker.invoke_user_message(user);
            continue;
          }
        }
        break;
      }

      if processed >= throughput && self.has_runnable() {
        // Yield between batches so one busy actor cannot hog the thread.
        self.running.store(false, Ordering::Release);
        self.schedule();
        return;
      }

      self.running.store(false, Ordering::Release);
      if self.has_runnable()
        && self.running.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire).is_ok()
      {
        continue;
      }
      return;
    }
  }
}
