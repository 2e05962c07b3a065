//! Actor reference combining identity and a message sink.

use relakt_utils_rs::core::sync::ArcShared;

use crate::core::{any_message::AnyMessage, message_sink::MessageSink, pid::Pid, send_error::SendError};

/// Handle to an actor: a [`Pid`] identity plus the sink delivering to it.
#[derive(Clone)]
pub struct ActorRef {
  pid:  Pid,
  sink: ArcShared<dyn MessageSink>,
}

impl ActorRef {
  /// Creates a reference from a pid and sink.
  #[must_use]
  pub fn new(pid: Pid, sink: ArcShared<dyn MessageSink>) -> Self {
    Self { pid, sink }
  }

  /// Returns a reference that silently discards every message.
  #[must_use]
  pub fn null() -> Self {
    Self { pid: Pid::new(0, 0), sink: ArcShared::new(NullSink) }
  }

  /// Returns the pid identity.
  #[must_use]
  pub const fn pid(&self) -> Pid {
    self.pid
  }

  /// Sends a message to the referenced actor.
  ///
  /// # Errors
  ///
  /// Returns an error when the recipient can no longer accept messages.
  pub fn tell(&self, message: AnyMessage) -> Result<(), SendError> {
    self.sink.tell(message)
  }
}

impl PartialEq for ActorRef {
  fn eq(&self, other: &Self) -> bool {
    self.pid == other.pid
  }
}

impl Eq for ActorRef {}

impl core::fmt::Debug for ActorRef {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("ActorRef").field("pid", &self.pid).finish()
  }
}

struct NullSink;

impl MessageSink for NullSink {
  fn tell(&self, _message: AnyMessage) -> Result<(), SendError> {
    Ok(())
  }
}
