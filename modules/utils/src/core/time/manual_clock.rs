//! Manually advanced clock for deterministic tests.

#[cfg(test)]
mod tests;

use core::time::Duration;

use portable_atomic::{AtomicU64, Ordering};

use super::{MonotonicClock, TimerInstant};

/// Clock whose current instant only moves when explicitly advanced.
#[derive(Debug)]
pub struct ManualClock {
  ticks:      AtomicU64,
  resolution: Duration,
}

impl ManualClock {
  /// Creates a clock anchored at tick zero.
  #[must_use]
  pub const fn new(resolution: Duration) -> Self {
    Self { ticks: AtomicU64::new(0), resolution }
  }

  /// Creates a clock starting at the given tick count.
  #[must_use]
  pub const fn starting_at(ticks: u64, resolution: Duration) -> Self {
    Self { ticks: AtomicU64::new(ticks), resolution }
  }

  /// Advances the clock by the given number of ticks.
  pub fn advance_ticks(&self, ticks: u64) {
    self.ticks.fetch_add(ticks, Ordering::SeqCst);
  }

  /// Advances the clock by a duration, rounded up to whole ticks.
  pub fn advance(&self, duration: Duration) {
    let target = self.now().saturating_add_duration(duration);
    self.ticks.store(target.ticks(), Ordering::SeqCst);
  }
}

impl MonotonicClock for ManualClock {
  fn now(&self) -> TimerInstant {
    TimerInstant::from_ticks(self.ticks.load(Ordering::SeqCst), self.resolution)
  }
}
