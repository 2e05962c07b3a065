//! Contract for messages that can be confirmed without duplicates.

/// Decorates a message with the identifiers needed for dedup tracking.
///
/// `confirmation_id` must be unique and monotonic per `sender_id` for the
/// lifetime of the sender; senders that do not persist their delivery state
/// will break receiver-side de-duplication.
pub trait Confirmable {
  /// Correlation id assigned by the sending side.
  fn confirmation_id(&self) -> i64;

  /// Globally unique id of the sender, usually its persistence id.
  fn sender_id(&self) -> &str;
}
