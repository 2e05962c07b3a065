use core::time::Duration;

use crate::core::{
  config_error::ConfigError, deduplicating_receiver_settings::DeDuplicatingReceiverSettings,
  receive_ordering::ReceiveOrdering,
};

#[test]
fn default_settings_are_valid() {
  let settings = DeDuplicatingReceiverSettings::default();
  assert_eq!(settings.buffer_size_per_sender(), 1000);
  assert_eq!(settings.take_snapshot_every_n_messages(), 100);
  assert_eq!(settings.prune_interval(), Duration::from_secs(1800));
}

#[test]
fn zero_and_unbounded_prune_intervals_are_rejected() {
  for interval in [Duration::ZERO, Duration::MAX] {
    let result = DeDuplicatingReceiverSettings::new(ReceiveOrdering::AnyOrder, interval, 1000, 100);
    assert!(matches!(result, Err(ConfigError::InvalidPruneInterval(_))));
  }
}

#[test]
fn tiny_buffer_sizes_are_rejected() {
  for size in [0, 1] {
    let result = DeDuplicatingReceiverSettings::new(ReceiveOrdering::AnyOrder, Duration::from_secs(60), size, 100);
    assert!(matches!(result, Err(ConfigError::InvalidBufferSize(_))));
  }
}

#[test]
fn tiny_snapshot_intervals_are_rejected() {
  let result = DeDuplicatingReceiverSettings::new(ReceiveOrdering::AnyOrder, Duration::from_secs(60), 1000, 1);
  assert!(matches!(result, Err(ConfigError::InvalidSnapshotInterval(_))));
}
