//! Unconfirmed delivery tracked by at-least-once delivery.


use core::any::Any;

use relakt_utils_rs::core::{sync::ArcShared, time::TimerInstant};

use crate::core::actor_path::ActorPath;

/// Delivery information awaiting confirmation.
#[derive(Clone)]
pub struct UnconfirmedDelivery {
  delivery_id: i64,
  destination: ActorPath,
  message:     ArcShared<dyn Any + Send + Sync>,
  timestamp:   TimerInstant,
  attempt:     u32,
}

impl UnconfirmedDelivery {
  /// Creates a new unconfirmed delivery entry.
  #[must_use]
  pub const fn new(
    delivery_id: i64,
    destination: ActorPath,
    message: ArcShared<dyn Any + Send + Sync>,
    timestamp: TimerInstant,
  ) -> Self {
    Self { delivery_id, destination, message, timestamp, attempt: 0 }
  }

  /// Returns the delivery id.
  #[must_use]
  pub const fn delivery_id(&self) -> i64 {
    self.delivery_id
  }

  /// Returns the destination path.
  #[must_use]
  pub const fn destination(&self) -> &ActorPath {
    &self.destination
  }

  /// Returns the tracked message.
  #[must_use]
  pub fn message(&self) -> &(dyn Any + Send + Sync) {
    &*self.message
  }

  /// Returns a clone of the message pointer.
  #[must_use]
  pub fn message_arc(&self) -> ArcShared<dyn Any + Send + Sync> {
    self.message.clone()
  }

  /// Returns the last delivery timestamp.
  #[must_use]
  pub const fn timestamp(&self) -> TimerInstant {
    self.timestamp
  }

  /// Returns the number of completed redelivery attempts.
  #[must_use]
  pub const fn attempt(&self) -> u32 {
    self.attempt
  }

  pub(crate) const fn mark_attempt(&mut self, timestamp: TimerInstant) {
    self.attempt = self.attempt.saturating_add(1);
    self.timestamp = timestamp;
  }

  // A crash already represents an unknown delay, so restored entries drop
  // their pre-crash timing.
  pub(crate) const fn reset_timing(&mut self, now: TimerInstant) {
    self.timestamp = now;
    self.attempt = 0;
  }
}

impl core::fmt::Debug for UnconfirmedDelivery {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("UnconfirmedDelivery")
      .field("delivery_id", &self.delivery_id)
      .field("destination", &self.destination)
      .field("timestamp", &self.timestamp)
      .field("attempt", &self.attempt)
      .finish()
  }
}
