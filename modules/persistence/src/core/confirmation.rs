//! Receipt persisted after a confirmable message is processed.

use alloc::string::String;

use crate::core::confirmable::Confirmable;

/// Acknowledges successful processing of a confirmable message.
///
/// Appended to the durable log by receivers and replayed during recovery; also
/// sent back to the sending side so it can stop redelivering.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Confirmation {
  confirmation_id: i64,
  sender_id:       String,
}

impl Confirmation {
  /// Creates a new confirmation receipt.
  #[must_use]
  pub fn new(confirmation_id: i64, sender_id: impl Into<String>) -> Self {
    Self { confirmation_id, sender_id: sender_id.into() }
  }
}

impl Confirmable for Confirmation {
  fn confirmation_id(&self) -> i64 {
    self.confirmation_id
  }

  fn sender_id(&self) -> &str {
    &self.sender_id
  }
}
