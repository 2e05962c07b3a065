//! Restart-counter reset policy.

use core::time::Duration;

/// Controls when a supervisor's restart counter returns to zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackoffReset {
  /// The counter resets automatically once the child stays up for
  /// `reset_backoff` after a restart.
  Auto {
    /// Uptime required before the counter resets.
    reset_backoff: Duration,
  },
  /// The counter only resets on an explicit [`DoReset`](crate::core::DoReset)
  /// message.
  Manual,
}
