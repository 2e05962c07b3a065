//! Wall-time backed monotonic clock.

use core::time::Duration;

use stdlib::time::Instant;

use crate::core::time::{MonotonicClock, TimerInstant};

/// Monotonic clock backed by [`std::time::Instant`].
#[derive(Debug)]
pub struct SystemClock {
  origin:     Instant,
  resolution: Duration,
}

impl SystemClock {
  /// Creates a clock anchored at the current instant.
  #[must_use]
  pub fn new(resolution: Duration) -> Self {
    Self { origin: Instant::now(), resolution }
  }
}

impl Default for SystemClock {
  fn default() -> Self {
    Self::new(Duration::from_millis(1))
  }
}

impl MonotonicClock for SystemClock {
  fn now(&self) -> TimerInstant {
    let elapsed = self.origin.elapsed();
    let res = self.resolution.as_nanos().max(1);
    let ticks = elapsed.as_nanos() / res;
    TimerInstant::from_ticks(u64::try_from(ticks).unwrap_or(u64::MAX), self.resolution)
  }
}
