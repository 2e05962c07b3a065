//! Receiver state for senders delivering in any order.

#[cfg(test)]
mod tests;

use alloc::{
  string::{String, ToString},
  vec::Vec,
};
use core::time::Duration;

use hashbrown::HashMap;
use relakt_utils_rs::core::{
  collections::RingBuffer,
  sync::ArcShared,
  time::{MonotonicClock, TimerInstant},
};

use crate::core::{
  receive_ordering::ReceiveOrdering, receiver_state::ReceiverState, receiver_state_snapshot::ReceiverStateSnapshot,
};

/// Receiver state that cannot rely on per-sender ids arriving monotonically.
///
/// Keeps a bounded insertion-ordered window of seen confirmation ids per
/// sender; membership checks are `O(k)` over a window that is small (default
/// 1000) and per-sender, not global.
pub struct UnorderedReceiverState {
  clock:                  ArcShared<dyn MonotonicClock>,
  buffer_size_per_sender: usize,
  tracked_ids:            HashMap<String, RingBuffer<i64>>,
  tracked_lru:            HashMap<String, TimerInstant>,
}

impl UnorderedReceiverState {
  /// Size of the per-sender confirmation window unless configured otherwise.
  pub const DEFAULT_MAX_CONFIRMATIONS_PER_SENDER: usize = 1000;

  /// Creates a state with the default per-sender window size.
  #[must_use]
  pub fn new(clock: ArcShared<dyn MonotonicClock>) -> Self {
    Self::with_buffer_size(clock, Self::DEFAULT_MAX_CONFIRMATIONS_PER_SENDER)
  }

  /// Creates a state with an explicit per-sender window size.
  #[must_use]
  pub fn with_buffer_size(clock: ArcShared<dyn MonotonicClock>, buffer_size_per_sender: usize) -> Self {
    Self { clock, buffer_size_per_sender, tracked_ids: HashMap::new(), tracked_lru: HashMap::new() }
  }

  /// Returns the configured per-sender window size.
  #[must_use]
  pub const fn buffer_size_per_sender(&self) -> usize {
    self.buffer_size_per_sender
  }

  fn update_lru(&mut self, sender_id: &str) {
    self.tracked_lru.insert(sender_id.to_string(), self.clock.now());
  }
}

impl ReceiverState for UnorderedReceiverState {
  fn ordering(&self) -> ReceiveOrdering {
    ReceiveOrdering::AnyOrder
  }

  fn confirm_processing(&mut self, confirmation_id: i64, sender_id: &str) {
    self.update_lru(sender_id);

    let capacity = self.buffer_size_per_sender;
    let buffer = self.tracked_ids.entry(sender_id.to_string()).or_insert_with(|| RingBuffer::new(capacity));

    // Re-confirming a tracked id must not reshuffle the eviction order.
    if !buffer.contains(&confirmation_id) {
      buffer.push(confirmation_id);
    }
  }

  fn already_processed(&mut self, confirmation_id: i64, sender_id: &str) -> bool {
    self.update_lru(sender_id);

    self.tracked_ids.get(sender_id).is_some_and(|buffer| buffer.contains(&confirmation_id))
  }

  fn tracked_senders(&self) -> HashMap<String, TimerInstant> {
    self.tracked_lru.clone()
  }

  fn prune(&mut self, not_used_since: Duration) -> Vec<String> {
    let now = self.clock.now();
    let pruned = self
      .tracked_lru
      .iter()
      .filter(|(_, last_seen)| now.duration_since(**last_seen) >= not_used_since)
      .map(|(sender_id, _)| sender_id.clone())
      .collect::<Vec<_>>();

    for sender_id in &pruned {
      self.tracked_ids.remove(sender_id);
      self.tracked_lru.remove(sender_id);
    }

    pruned
  }

  fn to_snapshot(&self) -> ReceiverStateSnapshot {
    let tracked_ids = self
      .tracked_ids
      .iter()
      .map(|(sender_id, buffer)| (sender_id.clone(), buffer.iter().copied().collect::<Vec<_>>()))
      .collect::<HashMap<_, _>>();

    ReceiverStateSnapshot::new(tracked_ids, self.tracked_lru.clone())
  }

  fn from_snapshot(&mut self, snapshot: ReceiverStateSnapshot) {
    let (tracked_ids, tracked_senders) = snapshot.into_parts();
    let capacity = self.buffer_size_per_sender;

    self.tracked_lru = tracked_senders;
    self.tracked_ids = tracked_ids
      .into_iter()
      .map(|(sender_id, ids)| {
        let mut buffer = RingBuffer::new(capacity);
        for id in ids {
          buffer.push(id);
        }
        (sender_id, buffer)
      })
      .collect();

    // Every tracked sender carries an LRU stamp.
    let now = self.clock.now();
    for sender_id in self.tracked_ids.keys() {
      if !self.tracked_lru.contains_key(sender_id) {
        self.tracked_lru.insert(sender_id.clone(), now);
      }
    }
  }
}

impl core::fmt::Debug for UnorderedReceiverState {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("UnorderedReceiverState")
      .field("buffer_size_per_sender", &self.buffer_size_per_sender)
      .field("tracked_senders", &self.tracked_lru.len())
      .finish()
  }
}
