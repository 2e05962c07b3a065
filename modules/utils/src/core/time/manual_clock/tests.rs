use core::time::Duration;

use crate::core::time::{ManualClock, MonotonicClock};

#[test]
fn manual_clock_starts_at_zero_and_advances() {
  let clock = ManualClock::new(Duration::from_secs(1));
  assert_eq!(clock.now().ticks(), 0);

  clock.advance_ticks(3);
  assert_eq!(clock.now().ticks(), 3);

  clock.advance(Duration::from_secs(2));
  assert_eq!(clock.now().ticks(), 5);
}

#[test]
fn manual_clock_advance_rounds_up_partial_ticks() {
  let clock = ManualClock::new(Duration::from_secs(1));
  clock.advance(Duration::from_millis(1500));
  assert_eq!(clock.now().ticks(), 2);
}
