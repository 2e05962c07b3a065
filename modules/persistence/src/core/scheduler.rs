//! Timer scheduling port.

use core::time::Duration;

use crate::core::{any_message::AnyMessage, scheduler_error::SchedulerError, scheduler_handle::SchedulerHandle};

/// Schedules messages to be delivered back into the owning component's
/// single-threaded event loop.
///
/// Timer firings never run concurrently with in-flight message processing for
/// the same instance; the runtime enqueues the message like any other input.
pub trait Scheduler {
  /// Schedules a one-shot message after `delay`.
  ///
  /// # Errors
  ///
  /// Returns an error when the delay is invalid or the scheduler is closed.
  fn schedule_once(&mut self, delay: Duration, message: AnyMessage) -> Result<SchedulerHandle, SchedulerError>;

  /// Schedules a repeated message at a fixed delay.
  ///
  /// # Errors
  ///
  /// Returns an error when the delay is invalid or the scheduler is closed.
  fn schedule_with_fixed_delay(
    &mut self,
    initial_delay: Duration,
    interval: Duration,
    message: AnyMessage,
  ) -> Result<SchedulerHandle, SchedulerError>;

  /// Cancels a scheduled timer.
  ///
  /// Cancelling an already-fired, already-cancelled, or unknown handle is a
  /// safe no-op.
  fn cancel(&mut self, handle: &SchedulerHandle);
}
