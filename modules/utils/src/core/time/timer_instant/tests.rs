use core::time::Duration;

use crate::core::time::TimerInstant;

#[test]
fn duration_since_saturates_at_zero() {
  let resolution = Duration::from_secs(1);
  let earlier = TimerInstant::from_ticks(5, resolution);
  let later = TimerInstant::from_ticks(8, resolution);

  assert_eq!(later.duration_since(earlier), Duration::from_secs(3));
  assert_eq!(earlier.duration_since(later), Duration::ZERO);
}

#[test]
fn saturating_sub_duration_rounds_up_to_whole_ticks() {
  let resolution = Duration::from_secs(1);
  let instant = TimerInstant::from_ticks(10, resolution);

  let backdated = instant.saturating_sub_duration(Duration::from_millis(1500));
  assert_eq!(backdated.ticks(), 8);
  assert!(instant.duration_since(backdated) >= Duration::from_millis(1500));
}

#[test]
fn saturating_sub_duration_stops_at_zero() {
  let resolution = Duration::from_secs(1);
  let instant = TimerInstant::from_ticks(2, resolution);

  assert_eq!(instant.saturating_sub_duration(Duration::from_secs(100)).ticks(), 0);
}

#[test]
fn saturating_add_duration_advances_by_whole_ticks() {
  let resolution = Duration::from_millis(100);
  let instant = TimerInstant::zero(resolution);

  assert_eq!(instant.saturating_add_duration(Duration::from_millis(250)).ticks(), 3);
}
