use super::{AnyMessage, Message, MessageEnvelope, MessageHeader, MessageOrEnvelope, ReceiveTimeout, Started};
use crate::pid::Pid;

#[derive(Debug)]
struct Ping;

impl Message for Ping {}

#[derive(Debug)]
struct Tick;

impl Message for Tick {
  fn influences_receive_timeout(&self) -> bool {
    false
  }
}

#[test]
fn bare_messages_unwrap_transparently() {
  let wrapped = MessageOrEnvelope::Message(AnyMessage::new(Ping));

  assert!(wrapped.message().is::<Ping>());
  assert!(wrapped.sender().is_none());
  assert!(wrapped.header().is_none());
}

#[test]
fn envelopes_expose_sender_and_headers() {
  let sender = Pid::new("user/requester");
  let header = MessageHeader::new().with_entry("trace-id", "abc");
  let envelope = MessageEnvelope::new(AnyMessage::new(Ping)).with_sender(sender.clone()).with_header(header);
  let wrapped = MessageOrEnvelope::Envelope(envelope);

  assert_eq!(wrapped.sender(), Some(&sender));
  assert_eq!(wrapped.header().and_then(|header| header.get("trace-id")), Some("abc"));
}

#[test]
fn wrapping_into_an_envelope_preserves_metadata() {
  let sender = Pid::new("user/requester");
  let envelope = MessageEnvelope::new(AnyMessage::new(Ping)).with_sender(sender.clone());
  let rewrapped = MessageOrEnvelope::Envelope(envelope).into_envelope();

  assert_eq!(rewrapped.sender(), Some(&sender));

  let bare = MessageOrEnvelope::Message(AnyMessage::new(Ping)).into_envelope();
  assert!(bare.sender().is_none());
}

#[test]
fn capabilities_are_captured_at_wrap_time() {
  assert!(AnyMessage::new(Ping).influences_receive_timeout());
  assert!(!AnyMessage::new(Tick).influences_receive_timeout());
  assert!(!AnyMessage::new(ReceiveTimeout).influences_receive_timeout());

  assert!(AnyMessage::new(Started).is_auto_receive());
  assert!(!AnyMessage::new(Ping).is_auto_receive());
}

#[test]
fn downcasting_recovers_the_concrete_payload() {
  let message = AnyMessage::new(Ping);
  assert!(message.downcast_ref::<Ping>().is_some());
  assert!(message.downcast_ref::<Tick>().is_none());
}
