//! Configuration for the persistence supervisor.


use core::time::Duration;

use crate::core::{backoff_reset::BackoffReset, config_error::ConfigError};

/// Backoff and retry settings for a [`PersistenceSupervisor`](crate::core::PersistenceSupervisor).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PersistenceSupervisorConfig {
  min_backoff:   Duration,
  max_backoff:   Duration,
  random_factor: f64,
  max_restarts:  Option<u32>,
  reset:         BackoffReset,
}

impl PersistenceSupervisorConfig {
  /// Creates a configuration, validating every value eagerly.
  ///
  /// # Errors
  ///
  /// Returns an error when the backoff window is empty or inverted, or when
  /// the jitter factor falls outside `[0, 1]`.
  pub fn new(
    min_backoff: Duration,
    max_backoff: Duration,
    random_factor: f64,
    max_restarts: Option<u32>,
    reset: BackoffReset,
  ) -> Result<Self, ConfigError> {
    if min_backoff.is_zero() || max_backoff < min_backoff {
      return Err(ConfigError::InvalidBackoffRange { min: min_backoff, max: max_backoff });
    }
    if !(0.0..=1.0).contains(&random_factor) {
      return Err(ConfigError::InvalidRandomFactor(random_factor));
    }
    Ok(Self { min_backoff, max_backoff, random_factor, max_restarts, reset })
  }

  /// Returns the minimum restart delay.
  #[must_use]
  pub const fn min_backoff(&self) -> Duration {
    self.min_backoff
  }

  /// Returns the restart delay cap.
  #[must_use]
  pub const fn max_backoff(&self) -> Duration {
    self.max_backoff
  }

  /// Returns the jitter factor applied to computed delays.
  #[must_use]
  pub const fn random_factor(&self) -> f64 {
    self.random_factor
  }

  /// Returns the restart ceiling; `None` restarts forever.
  #[must_use]
  pub const fn max_restarts(&self) -> Option<u32> {
    self.max_restarts
  }

  /// Returns the restart-counter reset policy.
  #[must_use]
  pub const fn reset(&self) -> BackoffReset {
    self.reset
  }
}

impl Default for PersistenceSupervisorConfig {
  fn default() -> Self {
    let min_backoff = Duration::from_secs(1);
    Self {
      min_backoff,
      max_backoff: Duration::from_secs(30),
      random_factor: 0.2,
      max_restarts: None,
      reset: BackoffReset::Auto { reset_backoff: min_backoff },
    }
  }
}
