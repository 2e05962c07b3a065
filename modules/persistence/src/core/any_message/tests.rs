use crate::core::{actor_ref::ActorRef, any_message::AnyMessage};

#[test]
fn downcast_matches_payload_type() {
  let message = AnyMessage::new(42_u32);
  assert_eq!(message.downcast_ref::<u32>(), Some(&42));
  assert!(message.downcast_ref::<u64>().is_none());
}

#[test]
fn sender_is_preserved_and_replaceable() {
  let sender = ActorRef::null();
  let message = AnyMessage::with_sender("payload", sender.clone());
  assert_eq!(message.sender(), Some(&sender));

  let stripped = message.replacing_sender(None);
  assert!(stripped.sender().is_none());
  assert_eq!(stripped.downcast_ref::<&str>(), Some(&"payload"));
}
