//! At-least-once delivery helper for persistent senders.


use alloc::{collections::BTreeMap, vec::Vec};
use core::any::Any;

use relakt_utils_rs::core::{sync::ArcShared, time::MonotonicClock};

use crate::core::{
  actor_path::ActorPath, any_message::AnyMessage, at_least_once_delivery_config::AtLeastOnceDeliveryConfig,
  at_least_once_delivery_snapshot::AtLeastOnceDeliverySnapshot, delivery_transport::DeliveryTransport,
  persistence_error::PersistenceError, redelivery_tick::RedeliveryTick, scheduler::Scheduler,
  scheduler_handle::SchedulerHandle, unconfirmed_delivery::UnconfirmedDelivery, unconfirmed_warning::UnconfirmedWarning,
};

/// Maintains delivery state and drives timed redelivery.
///
/// Delivery ids start at 1, increase strictly, and are never reused, even
/// across confirm cycles and snapshot restores. Unconfirmed entries live in a
/// map ordered by delivery id; a delivery leaves it only through
/// [`confirm_delivery`](Self::confirm_delivery).
pub struct AtLeastOnceDelivery {
  config:            AtLeastOnceDeliveryConfig,
  clock:             ArcShared<dyn MonotonicClock>,
  next_delivery_id:  i64,
  unconfirmed:       BTreeMap<i64, UnconfirmedDelivery>,
  redelivery_handle: Option<SchedulerHandle>,
}

impl AtLeastOnceDelivery {
  /// Creates a new helper with the provided configuration.
  #[must_use]
  pub fn new(config: AtLeastOnceDeliveryConfig, clock: ArcShared<dyn MonotonicClock>) -> Self {
    Self { config, clock, next_delivery_id: 1, unconfirmed: BTreeMap::new(), redelivery_handle: None }
  }

  /// Returns the highest delivery id assigned so far.
  #[must_use]
  pub const fn current_delivery_id(&self) -> i64 {
    self.next_delivery_id - 1
  }

  /// Returns the number of unconfirmed deliveries.
  #[must_use]
  pub fn number_of_unconfirmed(&self) -> usize {
    self.unconfirmed.len()
  }

  /// Returns the unconfirmed deliveries ordered by delivery id.
  pub fn unconfirmed_deliveries(&self) -> impl Iterator<Item = &UnconfirmedDelivery> {
    self.unconfirmed.values()
  }

  /// Sends a message with at-least-once semantics.
  ///
  /// When `is_recovering`, the delivery is recorded with a backdated
  /// timestamp instead of being sent, which makes it eligible for the very
  /// next redelivery sweep rather than waiting out a full interval.
  ///
  /// # Errors
  ///
  /// Returns [`PersistenceError::MaxUnconfirmedMessagesExceeded`] when the
  /// unconfirmed ceiling is reached, or a transport error when sending fails.
  pub fn deliver<M, F>(
    &mut self,
    destination: ActorPath,
    make_message: F,
    is_recovering: bool,
    transport: &mut dyn DeliveryTransport,
  ) -> Result<i64, PersistenceError>
  where
    M: Any + Send + Sync + 'static,
    F: FnOnce(i64) -> M, {
    if self.unconfirmed.len() >= self.config.max_unconfirmed() {
      return Err(PersistenceError::MaxUnconfirmedMessagesExceeded { max: self.config.max_unconfirmed() });
    }

    let delivery_id = self.next_delivery_id;
    self.next_delivery_id = self.next_delivery_id.saturating_add(1);

    let message: ArcShared<dyn Any + Send + Sync> = ArcShared::new(make_message(delivery_id));
    let now = self.clock.now();
    let timestamp =
      if is_recovering { now.saturating_sub_duration(self.config.redeliver_interval()) } else { now };

    if !is_recovering {
      transport.tell(&destination, AnyMessage::from_erased(message.clone(), None))?;
    }
    self.unconfirmed.insert(delivery_id, UnconfirmedDelivery::new(delivery_id, destination, message, timestamp));
    Ok(delivery_id)
  }

  /// Confirms a delivery and removes it from redelivery tracking.
  ///
  /// Returns `true` the first time a delivery id is confirmed; `false` marks
  /// a duplicate or unknown confirmation, which is not an error.
  pub fn confirm_delivery(&mut self, delivery_id: i64) -> bool {
    self.unconfirmed.remove(&delivery_id).is_some()
  }

  /// Returns `true` when the message is this helper's redelivery tick.
  #[must_use]
  pub fn is_redelivery_tick(message: &AnyMessage) -> bool {
    message.downcast_ref::<RedeliveryTick>().is_some()
  }

  /// Handles internal redelivery messages.
  ///
  /// Returns the batched warning for deliveries that crossed the attempt
  /// threshold during the sweep, `None` for quiet sweeps or foreign messages.
  ///
  /// # Errors
  ///
  /// Returns an error when resending fails.
  pub fn handle_message(
    &mut self,
    message: &AnyMessage,
    transport: &mut dyn DeliveryTransport,
  ) -> Result<Option<UnconfirmedWarning>, PersistenceError> {
    if Self::is_redelivery_tick(message) {
      return self.redeliver_overdue(transport);
    }
    Ok(None)
  }

  /// Sweeps overdue deliveries immediately and starts the periodic sweep.
  ///
  /// Call once recovery has finished replaying; restored entries become
  /// overdue on their own schedule afterwards.
  ///
  /// # Errors
  ///
  /// Returns an error when resending fails or the timer cannot be scheduled.
  pub fn on_replay_success(
    &mut self,
    scheduler: &mut dyn Scheduler,
    transport: &mut dyn DeliveryTransport,
  ) -> Result<Option<UnconfirmedWarning>, PersistenceError> {
    let warning = self.redeliver_overdue(transport)?;
    self.start_redelivery_task(scheduler)?;
    Ok(warning)
  }

  /// Starts the periodic redelivery sweep at half the redeliver interval.
  ///
  /// # Errors
  ///
  /// Returns an error when the scheduler rejects the timer.
  pub fn start_redelivery_task(&mut self, scheduler: &mut dyn Scheduler) -> Result<(), PersistenceError> {
    if self.redelivery_handle.is_some() {
      return Ok(());
    }
    let interval = self.config.redeliver_interval() / 2;
    let handle = scheduler.schedule_with_fixed_delay(interval, interval, AnyMessage::new(RedeliveryTick))?;
    self.redelivery_handle = Some(handle);
    Ok(())
  }

  /// Stops the redelivery sweep; safe to call repeatedly or before the timer
  /// was ever started.
  pub fn cancel(&mut self, scheduler: &mut dyn Scheduler) {
    if let Some(handle) = self.redelivery_handle.take() {
      scheduler.cancel(&handle);
    }
  }

  /// Returns a snapshot of the delivery state.
  #[must_use]
  pub fn get_delivery_snapshot(&self) -> AtLeastOnceDeliverySnapshot {
    AtLeastOnceDeliverySnapshot::new(self.current_delivery_id(), self.unconfirmed.values().cloned().collect())
  }

  /// Restores the delivery state from a snapshot.
  ///
  /// Each restored entry's timestamp is reset to now and its attempt counter
  /// to zero; timing recorded before the crash no longer means anything.
  pub fn set_delivery_snapshot(&mut self, snapshot: AtLeastOnceDeliverySnapshot) {
    let (current_delivery_id, unconfirmed) = snapshot.into_parts();
    let now = self.clock.now();

    self.next_delivery_id = current_delivery_id.saturating_add(1);
    self.unconfirmed = unconfirmed
      .into_iter()
      .map(|mut delivery| {
        delivery.reset_timing(now);
        (delivery.delivery_id(), delivery)
      })
      .collect();
  }

  fn redeliver_overdue(
    &mut self,
    transport: &mut dyn DeliveryTransport,
  ) -> Result<Option<UnconfirmedWarning>, PersistenceError> {
    let now = self.clock.now();
    let interval = self.config.redeliver_interval();

    // Oldest-timestamp-first bounds the burst to the deliveries that have
    // waited longest when far more than the limit are overdue at once.
    let mut overdue = self
      .unconfirmed
      .values()
      .filter(|delivery| now.duration_since(delivery.timestamp()) >= interval)
      .map(|delivery| (delivery.timestamp(), delivery.delivery_id()))
      .collect::<Vec<_>>();
    overdue.sort_unstable();

    let mut warnings = Vec::new();
    for (_, delivery_id) in overdue.into_iter().take(self.config.redelivery_burst_limit()) {
      let Some(delivery) = self.unconfirmed.get_mut(&delivery_id) else {
        continue;
      };
      let destination = delivery.destination().clone();
      transport.tell(&destination, AnyMessage::from_erased(delivery.message_arc(), None))?;
      if delivery.attempt() == self.config.warn_after_attempts() {
        warnings.push(delivery.clone());
      }
      delivery.mark_attempt(now);
    }

    if warnings.is_empty() { Ok(None) } else { Ok(Some(UnconfirmedWarning::new(warnings))) }
  }
}

impl core::fmt::Debug for AtLeastOnceDelivery {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("AtLeastOnceDelivery")
      .field("next_delivery_id", &self.next_delivery_id)
      .field("unconfirmed", &self.unconfirmed.len())
      .finish()
  }
}
