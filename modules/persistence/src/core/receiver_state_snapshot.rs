//! Serialization DTO for receiver state.


use alloc::{string::String, vec::Vec};

use hashbrown::HashMap;
use relakt_utils_rs::core::time::TimerInstant;

/// Immutable snapshot of a receiver state.
///
/// The ids in `tracked_ids` are ordered oldest-first per sender; preserving
/// that order is what lets a restored state evict in the same sequence as the
/// original.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReceiverStateSnapshot {
  tracked_ids:     HashMap<String, Vec<i64>>,
  tracked_senders: HashMap<String, TimerInstant>,
}

impl ReceiverStateSnapshot {
  /// Creates a snapshot from its parts.
  #[must_use]
  pub const fn new(tracked_ids: HashMap<String, Vec<i64>>, tracked_senders: HashMap<String, TimerInstant>) -> Self {
    Self { tracked_ids, tracked_senders }
  }

  /// Returns the confirmation ids per sender, oldest-first.
  #[must_use]
  pub const fn tracked_ids(&self) -> &HashMap<String, Vec<i64>> {
    &self.tracked_ids
  }

  /// Returns the last-seen instants per sender.
  #[must_use]
  pub const fn tracked_senders(&self) -> &HashMap<String, TimerInstant> {
    &self.tracked_senders
  }

  /// Consumes the snapshot and returns its parts.
  #[must_use]
  pub fn into_parts(self) -> (HashMap<String, Vec<i64>>, HashMap<String, TimerInstant>) {
    (self.tracked_ids, self.tracked_senders)
  }
}
