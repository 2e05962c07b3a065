//! Journal error types.

use alloc::string::String;

/// Errors returned by journal operations.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum JournalError {
  /// Storage layer reported an error.
  #[error("journal storage error: {0}")]
  Storage(String),
}
