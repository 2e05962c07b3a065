//! Snapshot store error types.

use alloc::string::String;

/// Errors returned by snapshot store operations.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum SnapshotStoreError {
  /// Storage layer reported an error.
  #[error("snapshot storage error: {0}")]
  Storage(String),
}
