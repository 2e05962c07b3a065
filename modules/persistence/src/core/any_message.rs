//! Dynamically-typed message envelope.

#[cfg(test)]
mod tests;

use core::any::Any;

use relakt_utils_rs::core::sync::ArcShared;

use crate::core::actor_ref::ActorRef;

/// Message envelope carrying an erased payload and the logical sender.
#[derive(Clone)]
pub struct AnyMessage {
  payload: ArcShared<dyn Any + Send + Sync>,
  sender:  Option<ActorRef>,
}

impl AnyMessage {
  /// Creates a message without a sender.
  #[must_use]
  pub fn new<M>(payload: M) -> Self
  where
    M: Any + Send + Sync + 'static, {
    Self { payload: ArcShared::new(payload), sender: None }
  }

  /// Creates a message with an explicit sender.
  #[must_use]
  pub fn with_sender<M>(payload: M, sender: ActorRef) -> Self
  where
    M: Any + Send + Sync + 'static, {
    Self { payload: ArcShared::new(payload), sender: Some(sender) }
  }

  /// Creates a message from an already-erased payload.
  #[must_use]
  pub fn from_erased(payload: ArcShared<dyn Any + Send + Sync>, sender: Option<ActorRef>) -> Self {
    Self { payload, sender }
  }

  /// Returns the erased payload.
  #[must_use]
  pub fn payload(&self) -> &(dyn Any + Send + Sync) {
    &*self.payload
  }

  /// Returns a clone of the payload pointer.
  #[must_use]
  pub fn payload_arc(&self) -> ArcShared<dyn Any + Send + Sync> {
    self.payload.clone()
  }

  /// Returns the logical sender when present.
  #[must_use]
  pub const fn sender(&self) -> Option<&ActorRef> {
    self.sender.as_ref()
  }

  /// Returns a copy of this message addressed from `sender`.
  #[must_use]
  pub fn replacing_sender(&self, sender: Option<ActorRef>) -> Self {
    Self { payload: self.payload.clone(), sender }
  }

  /// Attempts to downcast the payload to the requested type.
  #[must_use]
  pub fn downcast_ref<T: Any + Send + Sync + 'static>(&self) -> Option<&T> {
    self.payload.downcast_ref::<T>()
  }
}

impl core::fmt::Debug for AnyMessage {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("AnyMessage").field("has_sender", &self.sender.is_some()).finish()
  }
}
