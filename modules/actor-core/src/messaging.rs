//! Message value types exchanged through mailboxes.

mod any_message;
mod auto_receive;
mod continuation;
mod failure;
mod message;
mod message_envelope;
mod message_header;
mod message_or_envelope;
mod system_message;

pub use any_message::AnyMessage;
pub use auto_receive::{PoisonPill, ReceiveTimeout, Restarting, Started, Stopped, Stopping, Terminated};
pub use continuation::Continuation;
pub use failure::Failure;
pub use message::Message;
pub use message_envelope::MessageEnvelope;
pub use message_header::MessageHeader;
pub use message_or_envelope::MessageOrEnvelope;
pub use system_message::SystemMessage;

#[cfg(test)]
mod tests;
