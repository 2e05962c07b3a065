//! Redelivery tick marker message.

/// Marker message for triggering a redelivery sweep.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RedeliveryTick;
