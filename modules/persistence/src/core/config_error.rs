//! Configuration validation errors.

use core::time::Duration;

/// Errors raised when a configuration value is rejected at construction time.
#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum ConfigError {
  /// Prune interval was zero or degenerate.
  #[error("{0:?} is not an acceptable prune interval; set a realistic value")]
  InvalidPruneInterval(Duration),
  /// Per-sender buffer size was too small.
  #[error("{0} is not an acceptable buffer size; pick a value greater than 1")]
  InvalidBufferSize(usize),
  /// Snapshot cadence was too small.
  #[error("{0} is not an acceptable snapshot interval; set a value greater than 1")]
  InvalidSnapshotInterval(u64),
  /// Redelivery interval was zero.
  #[error("redeliver interval must be positive")]
  InvalidRedeliverInterval,
  /// Redelivery burst limit was zero.
  #[error("redelivery burst limit must be positive")]
  InvalidBurstLimit,
  /// Unconfirmed-message ceiling was zero.
  #[error("max unconfirmed messages must be positive")]
  InvalidMaxUnconfirmed,
  /// Warn threshold was zero.
  #[error("warn-after attempt threshold must be positive")]
  InvalidWarnThreshold,
  /// Backoff window was empty or inverted.
  #[error("backoff range is invalid: min {min:?} max {max:?}")]
  InvalidBackoffRange {
    /// Configured minimum backoff.
    min: Duration,
    /// Configured maximum backoff.
    max: Duration,
  },
  /// Jitter factor was outside `[0, 1]`.
  #[error("random factor {0} is outside the accepted [0, 1] range")]
  InvalidRandomFactor(f64),
}
