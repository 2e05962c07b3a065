//! Child-actor lifecycle port consumed by the persistence supervisor.

use crate::core::actor_ref::ActorRef;

/// Spawns and watches the supervised child.
///
/// Every spawned child is implicitly watched: when it stops, the runtime must
/// deliver a [`ChildTerminated`](crate::core::ChildTerminated) message carrying
/// the child's pid into the supervisor's event loop.
pub trait ChildLifecycle {
  /// Spawns a fresh child incarnation with the identity contract of the
  /// previous one.
  fn spawn_child(&mut self) -> ActorRef;
}
