//! Send failure raised by message sinks and transports.

/// Errors raised when handing a message to a sink fails.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SendError {
  /// The receiving side is no longer accepting messages.
  #[error("recipient is closed")]
  Closed,
  /// The destination path could not be resolved.
  #[error("unresolved destination")]
  Unresolved,
}
