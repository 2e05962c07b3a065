use core::time::Duration;

use crate::core::backoff::calculate_backoff_delay;

#[test]
fn delay_doubles_until_the_cap() {
  let min = Duration::from_secs(1);
  let max = Duration::from_secs(30);

  assert_eq!(calculate_backoff_delay(0, min, max, 0.0, 0.0), Duration::from_secs(1));
  assert_eq!(calculate_backoff_delay(1, min, max, 0.0, 0.0), Duration::from_secs(2));
  assert_eq!(calculate_backoff_delay(4, min, max, 0.0, 0.0), Duration::from_secs(16));
  assert_eq!(calculate_backoff_delay(5, min, max, 0.0, 0.0), Duration::from_secs(30));
  assert_eq!(calculate_backoff_delay(64, min, max, 0.0, 0.0), Duration::from_secs(30));
}

#[test]
fn delay_stays_inside_the_jittered_bounds() {
  let min = Duration::from_secs(1);
  let max = Duration::from_secs(30);
  let random_factor = 0.2;

  for restart_count in 0..32 {
    for random_unit in [0.0, 0.25, 0.5, 0.999] {
      let delay = calculate_backoff_delay(restart_count, min, max, random_factor, random_unit);
      assert!(delay >= min, "delay {delay:?} below min for count {restart_count}");
      assert!(delay <= max.mul_f64(1.0 + random_factor), "delay {delay:?} above jittered max");
    }
  }
}

#[test]
fn jitter_scales_the_capped_delay() {
  let min = Duration::from_secs(2);
  let max = Duration::from_secs(30);

  let delay = calculate_backoff_delay(0, min, max, 0.5, 1.0);
  assert_eq!(delay, Duration::from_secs(3));
}

#[test]
fn degenerate_inputs_clamp_to_max() {
  let min = Duration::from_secs(1);
  let max = Duration::from_secs(30);

  assert_eq!(calculate_backoff_delay(3, min, max, f64::INFINITY, 1.0), max);
  assert_eq!(calculate_backoff_delay(3, min, max, 0.2, f64::NAN), max);
}
