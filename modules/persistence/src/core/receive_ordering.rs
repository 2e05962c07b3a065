//! Ordering contract between a sender and a de-duplicating receiver.

/// The order in which any single sender can deliver messages to a receiver.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReceiveOrdering {
  /// Messages can arrive in any order; correlation ids cannot be trusted to
  /// arrive monotonically, so a bounded window of seen ids is kept per sender.
  #[default]
  AnyOrder,
  /// Messages are sent and confirmed one at a time; correlation ids always
  /// increase monotonically.
  StrictOrder,
}
