//! Prune-sweep tick marker message.

/// Marker message triggering a prune of idle senders.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PruneSendersTick;
