//! Scheduler error types returned by the scheduler port.

/// Errors raised when scheduling requests fail.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SchedulerError {
  /// Delay or period was zero or overflowed the supported range.
  #[error("invalid delay or period")]
  InvalidDelay,
  /// Scheduler has been shut down and no longer accepts timers.
  #[error("scheduler closed")]
  Closed,
  /// Internal storage reached configured capacity.
  #[error("scheduler capacity exceeded")]
  CapacityExceeded,
}
