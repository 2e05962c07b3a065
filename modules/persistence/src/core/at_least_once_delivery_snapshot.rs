//! Snapshot of at-least-once delivery state.

use alloc::vec::Vec;

use crate::core::unconfirmed_delivery::UnconfirmedDelivery;

/// Full capture of the delivery tracker, including unconfirmed messages.
///
/// Save it alongside the owner's own snapshot and feed it back through
/// [`set_delivery_snapshot`](crate::core::AtLeastOnceDelivery::set_delivery_snapshot)
/// during recovery.
#[derive(Clone, Debug)]
pub struct AtLeastOnceDeliverySnapshot {
  current_delivery_id: i64,
  unconfirmed:         Vec<UnconfirmedDelivery>,
}

impl AtLeastOnceDeliverySnapshot {
  /// Creates a new snapshot.
  #[must_use]
  pub const fn new(current_delivery_id: i64, unconfirmed: Vec<UnconfirmedDelivery>) -> Self {
    Self { current_delivery_id, unconfirmed }
  }

  /// Returns the highest delivery id assigned so far.
  #[must_use]
  pub const fn current_delivery_id(&self) -> i64 {
    self.current_delivery_id
  }

  /// Returns the unconfirmed deliveries.
  #[must_use]
  pub fn unconfirmed_deliveries(&self) -> &[UnconfirmedDelivery] {
    &self.unconfirmed
  }

  /// Consumes the snapshot and returns its parts.
  #[must_use]
  pub fn into_parts(self) -> (i64, Vec<UnconfirmedDelivery>) {
    (self.current_delivery_id, self.unconfirmed)
  }
}
