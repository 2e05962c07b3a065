//! Interface for data structures tracking receiver-side delivery state.

use alloc::{string::String, vec::Vec};
use core::time::Duration;

use hashbrown::HashMap;
use relakt_utils_rs::core::time::TimerInstant;

use crate::core::{receive_ordering::ReceiveOrdering, receiver_state_snapshot::ReceiverStateSnapshot};

/// Tracks which confirmable messages a receiver has already processed.
///
/// Implementations mutate in place; `prune` returns the sender ids that were
/// dropped so the owner can log them.
pub trait ReceiverState {
  /// The ordering this state expects from senders.
  fn ordering(&self) -> ReceiveOrdering;

  /// Records that processing of a message from `sender_id` completed.
  fn confirm_processing(&mut self, confirmation_id: i64, sender_id: &str);

  /// Returns `true` when the message has been processed before.
  ///
  /// Checking counts as sender activity and refreshes the sender's idle
  /// timer, so senders that only produce duplicates are not pruned
  /// mid-conversation.
  fn already_processed(&mut self, confirmation_id: i64, sender_id: &str) -> bool;

  /// Returns current senders and the last time a message from them was seen.
  fn tracked_senders(&self) -> HashMap<String, TimerInstant>;

  /// Removes every sender whose last activity is at least `not_used_since`
  /// ago and returns their ids.
  ///
  /// Pruning erases those senders' confirmation history: a later resend from
  /// a pruned sender is treated as new. The bet is that senders this quiet
  /// are unlikely to resend an unconfirmed message at all.
  fn prune(&mut self, not_used_since: Duration) -> Vec<String>;

  /// Captures the full state for persistence.
  fn to_snapshot(&self) -> ReceiverStateSnapshot;

  /// Replaces the full state from a snapshot.
  fn from_snapshot(&mut self, snapshot: ReceiverStateSnapshot);
}
