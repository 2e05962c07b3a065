//! Strategy deciding how the supervisor classifies and wraps messages.

use alloc::string::String;

use crate::core::{any_message::AnyMessage, confirmable_envelope::ConfirmableEnvelope};

/// Injected strategy for the persistence supervisor.
///
/// A configuration object rather than loose closures, so supervisor setups
/// stay serializable and testable.
pub trait SupervisionPolicy {
  /// Returns `true` when the message is an event the child will persist.
  fn is_event(&self, message: &AnyMessage) -> bool;

  /// Packages the message and a correlation id into a confirmable envelope.
  ///
  /// The child is expected to answer with a
  /// [`Confirmation`](crate::core::Confirmation) carrying the same id once
  /// the event is durably persisted.
  fn make_event_confirmable(&self, message: &AnyMessage, delivery_id: i64) -> ConfirmableEnvelope;

  /// Returns `true` when this is the final message the child processes
  /// before shutdown.
  fn is_final_stop(&self, _message: &AnyMessage) -> bool {
    false
  }
}

/// Policy for children that already consume [`ConfirmableEnvelope`]s.
///
/// Treats envelopes as events and re-tags them with the supervisor-assigned
/// delivery id and the child's sender id.
#[derive(Clone, Debug)]
pub struct DefaultSupervisionPolicy {
  sender_id: String,
}

impl DefaultSupervisionPolicy {
  /// Creates a policy tagging events with the given sender id.
  #[must_use]
  pub fn new(sender_id: impl Into<String>) -> Self {
    Self { sender_id: sender_id.into() }
  }

  /// Returns the sender id stamped onto outgoing envelopes.
  #[must_use]
  pub fn sender_id(&self) -> &str {
    &self.sender_id
  }
}

impl SupervisionPolicy for DefaultSupervisionPolicy {
  fn is_event(&self, message: &AnyMessage) -> bool {
    message.downcast_ref::<ConfirmableEnvelope>().is_some()
  }

  fn make_event_confirmable(&self, message: &AnyMessage, delivery_id: i64) -> ConfirmableEnvelope {
    match message.downcast_ref::<ConfirmableEnvelope>() {
      | Some(envelope) => ConfirmableEnvelope::from_erased(delivery_id, self.sender_id.clone(), envelope.payload_arc()),
      | None => ConfirmableEnvelope::from_erased(delivery_id, self.sender_id.clone(), message.payload_arc()),
    }
  }
}
