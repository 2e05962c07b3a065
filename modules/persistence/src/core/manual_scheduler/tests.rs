use core::time::Duration;

use crate::core::{any_message::AnyMessage, manual_scheduler::ManualScheduler, scheduler::Scheduler};

#[test]
fn schedule_and_cancel_round_trip() {
  let mut scheduler = ManualScheduler::new();
  let handle = scheduler.schedule_once(Duration::from_secs(1), AnyMessage::new("tick")).unwrap();
  assert_eq!(scheduler.entries().len(), 1);

  scheduler.cancel(&handle);
  assert!(scheduler.entries().is_empty());

  // repeated cancel is a no-op
  scheduler.cancel(&handle);
}

#[test]
fn fixed_delay_rejects_zero_interval() {
  let mut scheduler = ManualScheduler::new();
  let result = scheduler.schedule_with_fixed_delay(Duration::ZERO, Duration::ZERO, AnyMessage::new("tick"));
  assert!(result.is_err());
}

#[test]
fn fixed_delay_records_interval() {
  let mut scheduler = ManualScheduler::new();
  scheduler
    .schedule_with_fixed_delay(Duration::from_secs(2), Duration::from_secs(2), AnyMessage::new("tick"))
    .unwrap();

  let entry = scheduler.pop_entry().unwrap();
  assert_eq!(entry.interval(), Some(Duration::from_secs(2)));
  assert_eq!(entry.initial_delay(), Duration::from_secs(2));
}
