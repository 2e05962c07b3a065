//! Monotonic tick instant utilities.

#[cfg(test)]
mod tests;

use core::time::Duration;

/// Monotonic instant with fixed resolution.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimerInstant {
  ticks:      u64,
  resolution: Duration,
}

impl TimerInstant {
  /// Creates an instant anchored at zero.
  #[must_use]
  pub const fn zero(resolution: Duration) -> Self {
    Self { ticks: 0, resolution }
  }

  /// Creates an instant from raw tick count and resolution.
  #[must_use]
  pub const fn from_ticks(ticks: u64, resolution: Duration) -> Self {
    Self { ticks, resolution }
  }

  /// Returns the stored tick count.
  #[must_use]
  pub const fn ticks(&self) -> u64 {
    self.ticks
  }

  /// Returns the resolution of each tick.
  #[must_use]
  pub const fn resolution(&self) -> Duration {
    self.resolution
  }

  /// Adds ticks, saturating on overflow.
  #[must_use]
  pub const fn saturating_add_ticks(&self, ticks: u64) -> Self {
    Self { ticks: self.ticks.saturating_add(ticks), resolution: self.resolution }
  }

  /// Adds a duration, rounded up to whole ticks and saturating on overflow.
  #[must_use]
  pub const fn saturating_add_duration(&self, duration: Duration) -> Self {
    Self {
      ticks:      self.ticks.saturating_add(Self::ticks_spanning(self.resolution, duration)),
      resolution: self.resolution,
    }
  }

  /// Subtracts a duration, rounded up to whole ticks and saturating at zero.
  ///
  /// Rounding up guarantees that an instant backdated by `duration` reads as
  /// at least `duration` in the past.
  #[must_use]
  pub const fn saturating_sub_duration(&self, duration: Duration) -> Self {
    Self {
      ticks:      self.ticks.saturating_sub(Self::ticks_spanning(self.resolution, duration)),
      resolution: self.resolution,
    }
  }

  /// Returns the elapsed duration since an earlier instant, saturating at zero.
  #[must_use]
  pub const fn duration_since(&self, earlier: Self) -> Duration {
    let ticks = self.ticks.saturating_sub(earlier.ticks);
    let nanos = self.resolution.as_nanos().saturating_mul(ticks as u128);
    if nanos > u64::MAX as u128 { Duration::from_nanos(u64::MAX) } else { Duration::from_nanos(nanos as u64) }
  }

  const fn ticks_spanning(resolution: Duration, duration: Duration) -> u64 {
    let res = resolution.as_nanos();
    if res == 0 {
      return 0;
    }
    let ticks = duration.as_nanos().div_ceil(res);
    if ticks > u64::MAX as u128 { u64::MAX } else { ticks as u64 }
  }
}
