//! Persistent event representation stored by journals.

use alloc::string::String;
use core::any::Any;

use relakt_utils_rs::core::sync::ArcShared;

/// Persistent event stored in the journal.
pub struct PersistentRepr {
  payload:        ArcShared<dyn Any + Send + Sync>,
  persistence_id: String,
  sequence_nr:    u64,
}

impl PersistentRepr {
  /// Creates a new persistent representation from a payload.
  #[must_use]
  pub fn from_payload<E>(payload: E, persistence_id: impl Into<String>, sequence_nr: u64) -> Self
  where
    E: Any + Send + Sync + 'static, {
    Self { payload: ArcShared::new(payload), persistence_id: persistence_id.into(), sequence_nr }
  }

  /// Creates a representation from an already-erased payload.
  #[must_use]
  pub fn from_erased(
    payload: ArcShared<dyn Any + Send + Sync>,
    persistence_id: impl Into<String>,
    sequence_nr: u64,
  ) -> Self {
    Self { payload, persistence_id: persistence_id.into(), sequence_nr }
  }

  /// Returns the persistence id.
  #[must_use]
  pub fn persistence_id(&self) -> &str {
    &self.persistence_id
  }

  /// Returns the sequence number.
  #[must_use]
  pub const fn sequence_nr(&self) -> u64 {
    self.sequence_nr
  }

  /// Returns the event payload.
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

impl Clone for PersistentRepr {
  fn clone(&self) -> Self {
    Self { payload: self.payload.clone(), persistence_id: self.persistence_id.clone(), sequence_nr: self.sequence_nr }
  }
}

impl core::fmt::Debug for PersistentRepr {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("PersistentRepr")
      .field("persistence_id", &self.persistence_id)
      .field("sequence_nr", &self.sequence_nr)
      .finish()
  }
}
