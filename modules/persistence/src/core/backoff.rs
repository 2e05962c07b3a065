//! Exponential backoff delay calculation.

#[cfg(test)]
mod tests;

use core::time::Duration;

/// Calculates a jittered exponential backoff delay.
///
/// The exponential part doubles `min_backoff` per restart and is capped at
/// `max_backoff` before the jitter factor `1 + random_unit * random_factor`
/// is applied, so the result always falls inside
/// `[min_backoff, max_backoff * (1 + random_factor)]`. Arithmetic that
/// overflows or turns non-finite clamps to `max_backoff`.
#[must_use]
pub fn calculate_backoff_delay(
  restart_count: u32,
  min_backoff: Duration,
  max_backoff: Duration,
  random_factor: f64,
  random_unit: f64,
) -> Duration {
  let mut delay = min_backoff;
  for _ in 0..restart_count {
    if delay >= max_backoff {
      delay = max_backoff;
      break;
    }
    delay = delay.checked_mul(2).unwrap_or(max_backoff);
  }
  if delay > max_backoff {
    delay = max_backoff;
  }

  let jittered = delay.as_secs_f64() * (1.0 + random_unit * random_factor);
  if !jittered.is_finite() || jittered < 0.0 {
    return max_backoff;
  }
  Duration::try_from_secs_f64(jittered).unwrap_or(max_backoff)
}
