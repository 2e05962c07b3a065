//! Middleware driving a handler with de-duplication and persistence.

#[cfg(test)]
mod tests;

use alloc::string::String;

use relakt_utils_rs::core::{sync::ArcShared, time::MonotonicClock};

use crate::core::{
  any_message::AnyMessage,
  confirmable::Confirmable,
  confirmable_envelope::ConfirmableEnvelope,
  confirmation::Confirmation,
  deduplicating_handler::DeDuplicatingHandler,
  deduplicating_receiver_settings::DeDuplicatingReceiverSettings,
  journal::Journal,
  persistence_error::PersistenceError,
  prune_senders_tick::PruneSendersTick,
  receiver_state::ReceiverState,
  receiver_state_snapshot::ReceiverStateSnapshot,
  scheduler::Scheduler,
  scheduler_handle::SchedulerHandle,
  snapshot_metadata::SnapshotMetadata,
  snapshot_selection_criteria::SnapshotSelectionCriteria,
  snapshot_store::SnapshotStore,
  unordered_receiver_state::UnorderedReceiverState,
};

/// Wraps a [`DeDuplicatingHandler`] with receiver-state bookkeeping.
///
/// Confirmable messages are checked against the receiver state before the
/// handler runs; new messages are confirmed, persisted as [`Confirmation`]
/// receipts, and acknowledged back to the sender. Duplicates short-circuit to
/// the handler's duplicate path. Anything else passes straight through.
pub struct DeDuplicatingReceiver<H, J, S>
where
  H: DeDuplicatingHandler,
  J: Journal,
  S: SnapshotStore, {
  persistence_id:   String,
  settings:         DeDuplicatingReceiverSettings,
  state:            UnorderedReceiverState,
  handler:          H,
  journal:          J,
  snapshots:        S,
  last_sequence_nr: u64,
  prune_handle:     Option<SchedulerHandle>,
}

impl<H, J, S> DeDuplicatingReceiver<H, J, S>
where
  H: DeDuplicatingHandler,
  J: Journal,
  S: SnapshotStore,
{
  /// Creates a receiver around a handler and its persistence ports.
  #[must_use]
  pub fn new(
    persistence_id: impl Into<String>,
    settings: DeDuplicatingReceiverSettings,
    clock: ArcShared<dyn MonotonicClock>,
    handler: H,
    journal: J,
    snapshots: S,
  ) -> Self {
    let state = Self::create_initial_state(&settings, clock);
    Self {
      persistence_id: persistence_id.into(),
      settings,
      state,
      handler,
      journal,
      snapshots,
      last_sequence_nr: 0,
      prune_handle: None,
    }
  }

  /// Returns the persistence id of this receiver.
  #[must_use]
  pub fn persistence_id(&self) -> &str {
    &self.persistence_id
  }

  /// Returns the settings for this receiver.
  #[must_use]
  pub const fn settings(&self) -> &DeDuplicatingReceiverSettings {
    &self.settings
  }

  /// Returns the current receiver state.
  #[must_use]
  pub const fn state(&self) -> &UnorderedReceiverState {
    &self.state
  }

  /// Returns the wrapped handler.
  #[must_use]
  pub const fn handler(&self) -> &H {
    &self.handler
  }

  /// Returns the sequence number of the last persisted confirmation.
  #[must_use]
  pub const fn last_sequence_nr(&self) -> u64 {
    self.last_sequence_nr
  }

  /// Returns the journal port.
  #[must_use]
  pub const fn journal(&self) -> &J {
    &self.journal
  }

  /// Returns the snapshot store port.
  #[must_use]
  pub const fn snapshot_store(&self) -> &S {
    &self.snapshots
  }

  /// Consumes the receiver and returns its persistence ports.
  #[must_use]
  pub fn into_ports(self) -> (J, S) {
    (self.journal, self.snapshots)
  }

  /// Schedules the periodic prune sweep.
  ///
  /// # Errors
  ///
  /// Returns an error when the scheduler rejects the timer.
  pub fn pre_start(&mut self, scheduler: &mut dyn Scheduler) -> Result<(), PersistenceError> {
    if self.prune_handle.is_none() {
      let interval = self.settings.prune_interval();
      let handle = scheduler.schedule_with_fixed_delay(interval, interval, AnyMessage::new(PruneSendersTick))?;
      self.prune_handle = Some(handle);
    }
    Ok(())
  }

  /// Cancels the prune sweep; safe to call repeatedly or before start.
  pub fn post_stop(&mut self, scheduler: &mut dyn Scheduler) {
    if let Some(handle) = self.prune_handle.take() {
      scheduler.cancel(&handle);
    }
  }

  /// Rebuilds state from the latest snapshot and the confirmations persisted
  /// after it.
  ///
  /// # Errors
  ///
  /// Returns an error when the snapshot store or journal cannot be read.
  /// An unrecognized snapshot payload is logged and skipped instead, so a
  /// misconfigured store cannot wedge recovery.
  pub fn recover(&mut self) -> Result<(), PersistenceError> {
    let mut replay_from = 1;
    if let Some((metadata, snapshot)) =
      self.snapshots.load_snapshot(&self.persistence_id, SnapshotSelectionCriteria::latest())?
    {
      match snapshot.downcast_ref::<ReceiverStateSnapshot>() {
        | Some(snapshot) => {
          self.state.from_snapshot(snapshot.clone());
          replay_from = metadata.sequence_nr().saturating_add(1);
        },
        | None => {
          tracing::error!(
            persistence_id = %self.persistence_id,
            sequence_nr = metadata.sequence_nr(),
            "unknown snapshot type offered during recovery; proceeding without it"
          );
        },
      }
    }

    for repr in self.journal.replay(&self.persistence_id, replay_from)? {
      match repr.downcast_ref::<Confirmation>() {
        | Some(confirmation) => {
          self.state.confirm_processing(confirmation.confirmation_id(), confirmation.sender_id());
        },
        | None => {
          tracing::debug!(sequence_nr = repr.sequence_nr(), "skipping non-confirmation event during replay");
        },
      }
    }

    self.last_sequence_nr = self.journal.highest_sequence_nr(&self.persistence_id)?;
    Ok(())
  }

  /// Dispatches one inbound message.
  ///
  /// # Errors
  ///
  /// Currently infallible at runtime; persistence failures are recovered
  /// locally by design. The `Result` keeps the signature uniform with the
  /// other drivers.
  pub fn receive(&mut self, message: &AnyMessage) -> Result<(), PersistenceError> {
    if message.downcast_ref::<PruneSendersTick>().is_some() {
      self.prune_idle_senders();
      return Ok(());
    }

    if let Some(envelope) = message.downcast_ref::<ConfirmableEnvelope>() {
      let confirmation_id = envelope.confirmation_id();
      let sender_id = envelope.sender_id();
      if self.state.already_processed(confirmation_id, sender_id) {
        self.handler.handle_duplicate(confirmation_id, sender_id, message.sender());
      } else {
        self.handler.handle_new(confirmation_id, sender_id, envelope.payload());
        self.confirm_processing(envelope, message);
      }
      return Ok(());
    }

    self.handler.receive_plain(message);
    Ok(())
  }

  fn prune_idle_senders(&mut self) {
    let pruned = self.state.prune(self.settings.prune_interval());
    if !pruned.is_empty() {
      tracing::info!(persistence_id = %self.persistence_id, count = pruned.len(), "pruned idle senders");
    }
  }

  fn confirm_processing(&mut self, envelope: &ConfirmableEnvelope, message: &AnyMessage) {
    let confirmation_id = envelope.confirmation_id();
    let sender_id = envelope.sender_id();
    self.state.confirm_processing(confirmation_id, sender_id);

    let receipt = Confirmation::new(confirmation_id, sender_id);
    match self.journal.append(&self.persistence_id, ArcShared::new(receipt)) {
      | Ok(sequence_nr) => {
        self.last_sequence_nr = sequence_nr;
        if let Some(reply_to) = message.sender() {
          let reply = self.handler.confirmation_reply(confirmation_id, sender_id);
          if reply_to.tell(reply).is_err() {
            tracing::warn!(confirmation_id, sender_id, "failed to acknowledge confirmable message");
          }
        }
        if sequence_nr % self.settings.take_snapshot_every_n_messages() == 0 {
          self.save_snapshot_and_purge(sequence_nr);
        }
      },
      | Err(error) => {
        // The sender will redeliver and the duplicate path re-acknowledges,
        // so skipping the reply here cannot lose the message.
        tracing::error!(confirmation_id, sender_id, %error, "failed to persist confirmation");
      },
    }
  }

  fn save_snapshot_and_purge(&mut self, sequence_nr: u64) {
    let metadata = SnapshotMetadata::new(self.persistence_id.clone(), sequence_nr);
    match self.snapshots.save_snapshot(metadata, ArcShared::new(self.state.to_snapshot())) {
      | Ok(()) => {
        if let Err(error) = self.journal.delete_messages_to(&self.persistence_id, sequence_nr) {
          tracing::warn!(sequence_nr, %error, "failed to purge events covered by snapshot");
        }
        if let Err(error) = self
          .snapshots
          .delete_snapshots(&self.persistence_id, SnapshotSelectionCriteria::up_to(sequence_nr.saturating_sub(1)))
        {
          tracing::warn!(sequence_nr, %error, "failed to purge superseded snapshots");
        }
      },
      | Err(error) => {
        // Keeping the events is what preserves recoverability here.
        tracing::warn!(sequence_nr, %error, "snapshot save failed; older events are retained");
      },
    }
  }

  fn create_initial_state(
    settings: &DeDuplicatingReceiverSettings,
    clock: ArcShared<dyn MonotonicClock>,
  ) -> UnorderedReceiverState {
    // TODO: dedicated state for ReceiveOrdering::StrictOrder that keeps only
    // the highest confirmed id per sender.
    UnorderedReceiverState::with_buffer_size(clock, settings.buffer_size_per_sender())
  }
}
