//! Directive returned by the persistence supervisor to its runtime.

/// Tells the embedding runtime what to do with the supervisor after a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SupervisorDirective {
  /// Keep running.
  Continue,
  /// Stop the supervisor permanently; the failure propagates to its parent.
  Stop,
}
