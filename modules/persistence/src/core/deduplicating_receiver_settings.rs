//! Settings for de-duplicating receivers.

#[cfg(test)]
mod tests;

use core::time::Duration;

use crate::core::{config_error::ConfigError, receive_ordering::ReceiveOrdering};

/// Configures how a de-duplicating receiver tracks and prunes sender state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeDuplicatingReceiverSettings {
  ordering:                       ReceiveOrdering,
  prune_interval:                 Duration,
  buffer_size_per_sender:         usize,
  take_snapshot_every_n_messages: u64,
}

impl DeDuplicatingReceiverSettings {
  /// Default window of confirmation ids kept per sender.
  pub const DEFAULT_BUFFER_SIZE_PER_SENDER: usize = 1000;
  /// Default interval between prune sweeps, doubling as the idle threshold.
  pub const DEFAULT_PRUNE_INTERVAL: Duration = Duration::from_secs(30 * 60);
  /// Default number of persisted confirmations between snapshots.
  pub const DEFAULT_SNAPSHOT_PER_N_MESSAGES: u64 = 100;

  /// Creates settings, validating every value eagerly.
  ///
  /// # Errors
  ///
  /// Returns an error when the prune interval is zero or unbounded, or when
  /// the buffer size or snapshot cadence is too small to be useful.
  pub fn new(
    ordering: ReceiveOrdering,
    prune_interval: Duration,
    buffer_size_per_sender: usize,
    take_snapshot_every_n_messages: u64,
  ) -> Result<Self, ConfigError> {
    if prune_interval == Duration::ZERO || prune_interval == Duration::MAX {
      return Err(ConfigError::InvalidPruneInterval(prune_interval));
    }
    if buffer_size_per_sender <= 1 {
      return Err(ConfigError::InvalidBufferSize(buffer_size_per_sender));
    }
    if take_snapshot_every_n_messages <= 1 {
      return Err(ConfigError::InvalidSnapshotInterval(take_snapshot_every_n_messages));
    }
    Ok(Self { ordering, prune_interval, buffer_size_per_sender, take_snapshot_every_n_messages })
  }

  /// Returns the expected receive ordering.
  #[must_use]
  pub const fn ordering(&self) -> ReceiveOrdering {
    self.ordering
  }

  /// Returns the prune sweep interval.
  ///
  /// Also used as the idle threshold: a sender quiet for longer than this,
  /// duplicates included, has its tracking state purged to conserve memory.
  #[must_use]
  pub const fn prune_interval(&self) -> Duration {
    self.prune_interval
  }

  /// Returns the per-sender confirmation window size.
  #[must_use]
  pub const fn buffer_size_per_sender(&self) -> usize {
    self.buffer_size_per_sender
  }

  /// Returns the snapshot cadence in persisted confirmations.
  #[must_use]
  pub const fn take_snapshot_every_n_messages(&self) -> u64 {
    self.take_snapshot_every_n_messages
  }
}

impl Default for DeDuplicatingReceiverSettings {
  fn default() -> Self {
    Self {
      ordering:                       ReceiveOrdering::AnyOrder,
      prune_interval:                 Self::DEFAULT_PRUNE_INTERVAL,
      buffer_size_per_sender:         Self::DEFAULT_BUFFER_SIZE_PER_SENDER,
      take_snapshot_every_n_messages: Self::DEFAULT_SNAPSHOT_PER_N_MESSAGES,
    }
  }
}
