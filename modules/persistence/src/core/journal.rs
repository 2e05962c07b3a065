//! Journal storage port.

use alloc::vec::Vec;
use core::any::Any;

use relakt_utils_rs::core::sync::ArcShared;

use crate::core::{journal_error::JournalError, persistent_repr::PersistentRepr};

/// Append-only event log abstraction consumed by the receiver driver.
///
/// Appends for one persistence id are durable and ordered; replay returns
/// events in write order. A single logical owner writes each stream at a time.
pub trait Journal {
  /// Appends an event and returns the assigned sequence number.
  ///
  /// # Errors
  ///
  /// Returns an error when the storage layer rejects the write.
  fn append(
    &mut self,
    persistence_id: &str,
    event: ArcShared<dyn Any + Send + Sync>,
  ) -> Result<u64, JournalError>;

  /// Replays events with sequence numbers at or above `from_sequence_nr`.
  ///
  /// # Errors
  ///
  /// Returns an error when the storage layer fails to read.
  fn replay(&self, persistence_id: &str, from_sequence_nr: u64) -> Result<Vec<PersistentRepr>, JournalError>;

  /// Deletes events up to and including the given sequence number.
  ///
  /// # Errors
  ///
  /// Returns an error when the storage layer rejects the deletion.
  fn delete_messages_to(&mut self, persistence_id: &str, to_sequence_nr: u64) -> Result<(), JournalError>;

  /// Returns the highest sequence number written for the persistence id.
  ///
  /// # Errors
  ///
  /// Returns an error when the storage layer fails to read.
  fn highest_sequence_nr(&self, persistence_id: &str) -> Result<u64, JournalError>;
}
