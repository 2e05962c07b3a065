//! User-supplied handler wrapped by the de-duplicating receiver.

use core::any::Any;

use crate::core::{actor_ref::ActorRef, any_message::AnyMessage};

/// Application logic driven by a [`DeDuplicatingReceiver`](crate::core::DeDuplicatingReceiver).
///
/// The receiver performs the dedup check before `handle_new` runs, so handler
/// side effects execute at most once per `(confirmation_id, sender_id)` as
/// long as the window holds the id.
pub trait DeDuplicatingHandler {
  /// Processes a confirmable message seen for the first time.
  fn handle_new(&mut self, confirmation_id: i64, sender_id: &str, payload: &(dyn Any + Send + Sync));

  /// Builds the confirmation reply returned to the delivering side.
  fn confirmation_reply(&mut self, confirmation_id: i64, sender_id: &str) -> AnyMessage;

  /// Handles a duplicate of an already-processed message.
  ///
  /// The default re-sends the confirmation reply so the sender can stop
  /// redelivering, without re-running `handle_new`.
  fn handle_duplicate(&mut self, confirmation_id: i64, sender_id: &str, reply_to: Option<&ActorRef>) {
    let Some(reply_to) = reply_to else {
      return;
    };
    let reply = self.confirmation_reply(confirmation_id, sender_id);
    if reply_to.tell(reply).is_err() {
      tracing::warn!(confirmation_id, sender_id, "failed to re-acknowledge duplicate message");
    }
  }

  /// Receives messages that carry no confirmation decoration.
  fn receive_plain(&mut self, message: &AnyMessage);
}
