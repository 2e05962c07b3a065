//! Deterministic scheduler implementation for testing.

#[cfg(test)]
mod tests;

use alloc::vec::Vec;
use core::time::Duration;

use crate::core::{
  any_message::AnyMessage, scheduler::Scheduler, scheduler_error::SchedulerError, scheduler_handle::SchedulerHandle,
};

/// Timer recorded by the [`ManualScheduler`].
#[derive(Clone, Debug)]
pub struct ScheduledEntry {
  handle:        SchedulerHandle,
  initial_delay: Duration,
  interval:      Option<Duration>,
  message:       AnyMessage,
}

impl ScheduledEntry {
  /// Returns the handle identifying this timer.
  #[must_use]
  pub const fn handle(&self) -> SchedulerHandle {
    self.handle
  }

  /// Returns the delay before the first firing.
  #[must_use]
  pub const fn initial_delay(&self) -> Duration {
    self.initial_delay
  }

  /// Returns the repeat interval for periodic timers.
  #[must_use]
  pub const fn interval(&self) -> Option<Duration> {
    self.interval
  }

  /// Returns the scheduled message.
  #[must_use]
  pub const fn message(&self) -> &AnyMessage {
    &self.message
  }
}

/// Scheduler that records timers instead of running them; tests drive the
/// firings explicitly by handing the recorded messages back to the component.
#[derive(Debug, Default)]
pub struct ManualScheduler {
  next_handle: u64,
  entries:     Vec<ScheduledEntry>,
}

impl ManualScheduler {
  /// Creates an empty scheduler.
  #[must_use]
  pub const fn new() -> Self {
    Self { next_handle: 0, entries: Vec::new() }
  }

  /// Returns the currently registered timers.
  #[must_use]
  pub fn entries(&self) -> &[ScheduledEntry] {
    &self.entries
  }

  /// Removes and returns the earliest registered timer.
  pub fn pop_entry(&mut self) -> Option<ScheduledEntry> {
    if self.entries.is_empty() { None } else { Some(self.entries.remove(0)) }
  }

  fn register(&mut self, initial_delay: Duration, interval: Option<Duration>, message: AnyMessage) -> SchedulerHandle {
    self.next_handle = self.next_handle.wrapping_add(1);
    let handle = SchedulerHandle::new(self.next_handle);
    self.entries.push(ScheduledEntry { handle, initial_delay, interval, message });
    handle
  }
}

impl Scheduler for ManualScheduler {
  fn schedule_once(&mut self, delay: Duration, message: AnyMessage) -> Result<SchedulerHandle, SchedulerError> {
    Ok(self.register(delay, None, message))
  }

  fn schedule_with_fixed_delay(
    &mut self,
    initial_delay: Duration,
    interval: Duration,
    message: AnyMessage,
  ) -> Result<SchedulerHandle, SchedulerError> {
    if interval == Duration::ZERO {
      return Err(SchedulerError::InvalidDelay);
    }
    Ok(self.register(initial_delay, Some(interval), message))
  }

  fn cancel(&mut self, handle: &SchedulerHandle) {
    self.entries.retain(|entry| entry.handle != *handle);
  }
}
