//! Top-level runtime errors raised by the delivery components.

use crate::core::{
  journal_error::JournalError, scheduler_error::SchedulerError, send_error::SendError,
  snapshot_store_error::SnapshotStoreError,
};

/// Errors surfaced to callers of the delivery components.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PersistenceError {
  /// The tracker holds the configured maximum of unconfirmed messages.
  ///
  /// Fatal to the caller: apply backpressure or raise the ceiling.
  #[error("too many unconfirmed messages; maximum allowed is {max}")]
  MaxUnconfirmedMessagesExceeded {
    /// Configured ceiling that was hit.
    max: usize,
  },
  /// A message could not be handed to its recipient.
  #[error("message passing failed: {0}")]
  MessagePassing(#[from] SendError),
  /// The scheduler port rejected a timer request.
  #[error("scheduler error: {0}")]
  Scheduler(#[from] SchedulerError),
  /// The journal port rejected an operation.
  #[error("journal error: {0}")]
  Journal(#[from] JournalError),
  /// The snapshot store port rejected an operation.
  #[error("snapshot store error: {0}")]
  SnapshotStore(#[from] SnapshotStoreError),
}
