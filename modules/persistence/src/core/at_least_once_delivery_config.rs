//! Configuration for at-least-once delivery.

use core::time::Duration;

use crate::core::config_error::ConfigError;

/// Configuration for at-least-once delivery scheduling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AtLeastOnceDeliveryConfig {
  redeliver_interval:     Duration,
  redelivery_burst_limit: usize,
  warn_after_attempts:    u32,
  max_unconfirmed:        usize,
}

impl AtLeastOnceDeliveryConfig {
  /// Creates a new configuration, validating every value eagerly.
  ///
  /// # Errors
  ///
  /// Returns an error when the interval is zero or any limit is zero.
  pub const fn new(
    redeliver_interval: Duration,
    redelivery_burst_limit: usize,
    warn_after_attempts: u32,
    max_unconfirmed: usize,
  ) -> Result<Self, ConfigError> {
    if redeliver_interval.is_zero() {
      return Err(ConfigError::InvalidRedeliverInterval);
    }
    if redelivery_burst_limit == 0 {
      return Err(ConfigError::InvalidBurstLimit);
    }
    if warn_after_attempts == 0 {
      return Err(ConfigError::InvalidWarnThreshold);
    }
    if max_unconfirmed == 0 {
      return Err(ConfigError::InvalidMaxUnconfirmed);
    }
    Ok(Self { redeliver_interval, redelivery_burst_limit, warn_after_attempts, max_unconfirmed })
  }

  /// Returns the interval after which an unconfirmed delivery is overdue.
  #[must_use]
  pub const fn redeliver_interval(&self) -> Duration {
    self.redeliver_interval
  }

  /// Returns the maximum number of messages to redeliver per sweep.
  #[must_use]
  pub const fn redelivery_burst_limit(&self) -> usize {
    self.redelivery_burst_limit
  }

  /// Returns the attempt count at which a delivery is reported in an
  /// [`UnconfirmedWarning`](crate::core::UnconfirmedWarning).
  #[must_use]
  pub const fn warn_after_attempts(&self) -> u32 {
    self.warn_after_attempts
  }

  /// Returns the maximum number of unconfirmed messages held in memory.
  #[must_use]
  pub const fn max_unconfirmed(&self) -> usize {
    self.max_unconfirmed
  }
}

impl Default for AtLeastOnceDeliveryConfig {
  fn default() -> Self {
    Self {
      redeliver_interval:     Duration::from_secs(5),
      redelivery_burst_limit: 10_000,
      warn_after_attempts:    5,
      max_unconfirmed:        100_000,
    }
  }
}
