//! Control messages understood by the persistence supervisor.

use crate::core::{actor_ref::ActorRef, pid::Pid};

/// Watch notification: the supervised child stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChildTerminated(Pid);

impl ChildTerminated {
  /// Creates a termination notice for the given child pid.
  #[must_use]
  pub const fn new(pid: Pid) -> Self {
    Self(pid)
  }

  /// Returns the pid of the stopped child.
  #[must_use]
  pub const fn pid(&self) -> Pid {
    self.0
  }
}

/// One-shot tick requesting the child be restarted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StartChildTick;

/// One-shot tick zeroing the restart counter after sustained uptime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResetRestartCountTick {
  current: u32,
}

impl ResetRestartCountTick {
  /// Creates a tick bound to the counter value at scheduling time.
  #[must_use]
  pub const fn new(current: u32) -> Self {
    Self { current }
  }

  /// Returns the counter value this tick was scheduled against.
  #[must_use]
  pub const fn current(&self) -> u32 {
    self.current
  }
}

/// Explicit restart-counter reset, for manually-reset supervisors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DoReset;

/// Query for the current restart count.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GetRestartCount;

/// Reply to [`GetRestartCount`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RestartCount(u32);

impl RestartCount {
  /// Creates a reply carrying the current restart count.
  #[must_use]
  pub const fn new(count: u32) -> Self {
    Self(count)
  }

  /// Returns the restart count.
  #[must_use]
  pub const fn count(&self) -> u32 {
    self.0
  }
}

/// Query for the current child reference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GetCurrentChild;

/// Reply to [`GetCurrentChild`]; `None` while the child is being restarted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurrentChild(Option<ActorRef>);

impl CurrentChild {
  /// Creates a reply carrying the current child reference.
  #[must_use]
  pub const fn new(child: Option<ActorRef>) -> Self {
    Self(child)
  }

  /// Returns the child reference when one is running.
  #[must_use]
  pub const fn child(&self) -> Option<&ActorRef> {
    self.0.as_ref()
  }
}
