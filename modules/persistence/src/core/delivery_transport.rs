//! Transport port resolving delivery paths to live recipients.

use crate::core::{actor_path::ActorPath, any_message::AnyMessage, send_error::SendError};

/// Sends tracked messages to path-addressed destinations.
///
/// The at-least-once delivery tracker stores destinations as [`ActorPath`]s so
/// that snapshots stay serializable; the embedding runtime resolves the path
/// on every send, which also covers destinations that restarted in between.
pub trait DeliveryTransport {
  /// Sends a message to the destination path.
  ///
  /// # Errors
  ///
  /// Returns an error when the destination cannot be resolved or no longer
  /// accepts messages.
  fn tell(&mut self, destination: &ActorPath, message: AnyMessage) -> Result<(), SendError>;
}
