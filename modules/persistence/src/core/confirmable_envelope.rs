//! Built-in envelope decorating arbitrary payloads as confirmable.


use alloc::string::String;
use core::any::Any;

use relakt_utils_rs::core::sync::ArcShared;

use crate::core::confirmable::Confirmable;

/// Wraps a user payload with a confirmation id and sender id without
/// changing the payload type itself.
#[derive(Clone)]
pub struct ConfirmableEnvelope {
  confirmation_id: i64,
  sender_id:       String,
  payload:         ArcShared<dyn Any + Send + Sync>,
}

impl ConfirmableEnvelope {
  /// Creates an envelope around an owned payload.
  #[must_use]
  pub fn new<M>(confirmation_id: i64, sender_id: impl Into<String>, payload: M) -> Self
  where
    M: Any + Send + Sync + 'static, {
    Self { confirmation_id, sender_id: sender_id.into(), payload: ArcShared::new(payload) }
  }

  /// Creates an envelope around an already-erased payload.
  #[must_use]
  pub fn from_erased(confirmation_id: i64, sender_id: impl Into<String>, payload: ArcShared<dyn Any + Send + Sync>) -> Self {
    Self { confirmation_id, sender_id: sender_id.into(), payload }
  }

  /// Returns the wrapped payload.
  #[must_use]
  pub fn payload(&self) -> &(dyn Any + Send + Sync) {
    &*self.payload
  }

  /// Returns a clone of the payload pointer.
  #[must_use]
  pub fn payload_arc(&self) -> ArcShared<dyn Any + Send + Sync> {
    self.payload.clone()
  }

  /// Attempts to downcast the payload to the requested type.
  #[must_use]
  pub fn downcast_ref<T: Any + Send + Sync + 'static>(&self) -> Option<&T> {
    self.payload.downcast_ref::<T>()
  }
}

impl Confirmable for ConfirmableEnvelope {
  fn confirmation_id(&self) -> i64 {
    self.confirmation_id
  }

  fn sender_id(&self) -> &str {
    &self.sender_id
  }
}

impl core::fmt::Debug for ConfirmableEnvelope {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("ConfirmableEnvelope")
      .field("confirmation_id", &self.confirmation_id)
      .field("sender_id", &self.sender_id)
      .finish()
  }
}
