//! Sink consuming dynamically-typed messages.

use crate::core::{any_message::AnyMessage, send_error::SendError};

/// Accepts messages on behalf of an actor.
///
/// Implementations are provided by the embedding runtime; the core components
/// only ever enqueue through this trait and never block on the result.
pub trait MessageSink: Send + Sync {
  /// Enqueues a message for the receiving actor.
  ///
  /// # Errors
  ///
  /// Returns an error when the recipient can no longer accept messages.
  fn tell(&self, message: AnyMessage) -> Result<(), SendError>;
}
