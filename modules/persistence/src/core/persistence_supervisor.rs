//! Supervising proxy buffering unconfirmed events across child restarts.


use alloc::{
  boxed::Box,
  collections::{BTreeMap, VecDeque},
};
use core::mem;

use relakt_utils_rs::core::sync::ArcShared;

use crate::core::{
  actor_ref::ActorRef,
  any_message::AnyMessage,
  backoff::calculate_backoff_delay,
  backoff_reset::BackoffReset,
  child_lifecycle::ChildLifecycle,
  confirmable::Confirmable,
  confirmation::Confirmation,
  persistence_error::PersistenceError,
  persistence_supervisor_config::PersistenceSupervisorConfig,
  random_provider::RandomProvider,
  scheduler::Scheduler,
  scheduler_handle::SchedulerHandle,
  supervision_policy::SupervisionPolicy,
  supervisor_directive::SupervisorDirective,
  supervisor_messages::{
    ChildTerminated, CurrentChild, DoReset, GetCurrentChild, GetRestartCount, ResetRestartCountTick, RestartCount,
    StartChildTick,
  },
};

/// Proxy in front of a crash-prone persistent child.
///
/// While the child runs, events flow through as confirmable wrappers and stay
/// buffered until the child confirms them; when the child dies, the proxy
/// restarts it with jittered exponential backoff and replays everything still
/// unconfirmed. Upstream callers only ever observe buffered latency, never a
/// lost message, until the restart ceiling is hit.
pub struct PersistenceSupervisor<P, L>
where
  P: SupervisionPolicy,
  L: ChildLifecycle, {
  policy:              P,
  lifecycle:           L,
  config:              PersistenceSupervisorConfig,
  jitter:              Box<dyn RandomProvider>,
  parent:              ActorRef,
  dead_letters:        ActorRef,
  child:               Option<ActorRef>,
  current_delivery_id: i64,
  event_buffer:        BTreeMap<i64, AnyMessage>,
  msg_buffer:          VecDeque<AnyMessage>,
  restart_count:       u32,
  final_stop_received: bool,
  restart_handle:      Option<SchedulerHandle>,
  reset_handle:        Option<SchedulerHandle>,
}

impl<P, L> PersistenceSupervisor<P, L>
where
  P: SupervisionPolicy,
  L: ChildLifecycle,
{
  /// Creates a supervisor; the child starts on [`pre_start`](Self::pre_start).
  #[must_use]
  pub fn new(
    policy: P,
    lifecycle: L,
    config: PersistenceSupervisorConfig,
    jitter: Box<dyn RandomProvider>,
    parent: ActorRef,
    dead_letters: ActorRef,
  ) -> Self {
    Self {
      policy,
      lifecycle,
      config,
      jitter,
      parent,
      dead_letters,
      child: None,
      current_delivery_id: 0,
      event_buffer: BTreeMap::new(),
      msg_buffer: VecDeque::new(),
      restart_count: 0,
      final_stop_received: false,
      restart_handle: None,
      reset_handle: None,
    }
  }

  /// Returns the current child, `None` while a restart is pending.
  #[must_use]
  pub const fn child(&self) -> Option<&ActorRef> {
    self.child.as_ref()
  }

  /// Returns the number of restarts since the counter last reset.
  #[must_use]
  pub const fn restart_count(&self) -> u32 {
    self.restart_count
  }

  /// Returns the number of events awaiting confirmation.
  #[must_use]
  pub fn unconfirmed_event_count(&self) -> usize {
    self.event_buffer.len()
  }

  /// Spawns the initial child.
  pub fn pre_start(&mut self) {
    if self.child.is_none() {
      self.child = Some(self.lifecycle.spawn_child());
    }
  }

  /// Cancels pending restart and reset timers; safe to call repeatedly.
  pub fn post_stop(&mut self, scheduler: &mut dyn Scheduler) {
    if let Some(handle) = self.restart_handle.take() {
      scheduler.cancel(&handle);
    }
    if let Some(handle) = self.reset_handle.take() {
      scheduler.cancel(&handle);
    }
  }

  /// Dispatches one inbound message and reports whether the supervisor
  /// should keep running.
  ///
  /// # Errors
  ///
  /// Returns an error when a restart or reset timer cannot be scheduled.
  pub fn handle_message(
    &mut self,
    message: &AnyMessage,
    scheduler: &mut dyn Scheduler,
  ) -> Result<SupervisorDirective, PersistenceError> {
    if let Some(terminated) = message.downcast_ref::<ChildTerminated>() {
      return self.on_terminated(*terminated, scheduler);
    }
    if message.downcast_ref::<StartChildTick>().is_some() {
      self.on_start_child(scheduler)?;
      return Ok(SupervisorDirective::Continue);
    }
    if let Some(tick) = message.downcast_ref::<ResetRestartCountTick>() {
      self.reset_handle = None;
      if tick.current() == self.restart_count {
        self.restart_count = 0;
      }
      return Ok(SupervisorDirective::Continue);
    }
    if message.downcast_ref::<DoReset>().is_some() {
      if self.config.reset() == BackoffReset::Manual {
        self.restart_count = 0;
      }
      return Ok(SupervisorDirective::Continue);
    }
    if message.downcast_ref::<GetRestartCount>().is_some() {
      self.reply(message, AnyMessage::new(RestartCount::new(self.restart_count)));
      return Ok(SupervisorDirective::Continue);
    }
    if message.downcast_ref::<GetCurrentChild>().is_some() {
      self.reply(message, AnyMessage::new(CurrentChild::new(self.child.clone())));
      return Ok(SupervisorDirective::Continue);
    }

    if self.child.is_some() {
      self.handle_user_message(message);
      Ok(SupervisorDirective::Continue)
    } else if self.policy.is_final_stop(message) {
      // no point buffering a shutdown signal for a dead child
      if self.dead_letters.tell(message.clone()).is_err() {
        tracing::debug!("dead letter sink rejected final stop message");
      }
      Ok(SupervisorDirective::Stop)
    } else {
      // buffered verbatim; event-ness is re-evaluated at replay time
      self.msg_buffer.push_back(message.clone());
      Ok(SupervisorDirective::Continue)
    }
  }

  fn on_terminated(
    &mut self,
    terminated: ChildTerminated,
    scheduler: &mut dyn Scheduler,
  ) -> Result<SupervisorDirective, PersistenceError> {
    let is_current_child = self.child.as_ref().is_some_and(|child| child.pid() == terminated.pid());
    if !is_current_child {
      tracing::debug!(?terminated, "ignoring termination notice for a stale child incarnation");
      return Ok(SupervisorDirective::Continue);
    }
    self.child = None;

    if self.final_stop_received {
      return Ok(SupervisorDirective::Stop);
    }

    let next_restart_count = self.restart_count.saturating_add(1);
    if let Some(max_restarts) = self.config.max_restarts() {
      if next_restart_count > max_restarts {
        tracing::error!(
          restart_count = next_restart_count,
          max_restarts,
          "terminating: restart would exceed the allowed maximum"
        );
        return Ok(SupervisorDirective::Stop);
      }
    }

    let delay = calculate_backoff_delay(
      self.restart_count,
      self.config.min_backoff(),
      self.config.max_backoff(),
      self.config.random_factor(),
      self.jitter.next_unit(),
    );
    self.restart_handle = Some(scheduler.schedule_once(delay, AnyMessage::new(StartChildTick))?);
    self.restart_count = next_restart_count;
    Ok(SupervisorDirective::Continue)
  }

  fn on_start_child(&mut self, scheduler: &mut dyn Scheduler) -> Result<(), PersistenceError> {
    self.restart_handle = None;
    self.pre_start();
    self.replay_buffers();

    if let BackoffReset::Auto { reset_backoff } = self.config.reset() {
      let tick = ResetRestartCountTick::new(self.restart_count);
      self.reset_handle = Some(scheduler.schedule_once(reset_backoff, AnyMessage::new(tick))?);
    }
    Ok(())
  }

  // Drains the buffers so the recovered child ends up in the state it would
  // have reached with no journal trouble at all: unconfirmed events first,
  // in confirmation-id order, then everything that arrived while it was down.
  fn replay_buffers(&mut self) {
    let Some(child) = self.child.clone() else {
      return;
    };

    for event in self.event_buffer.values() {
      if child.tell(event.clone()).is_err() {
        tracing::debug!("child rejected replayed event; it stays buffered");
      }
    }

    for message in mem::take(&mut self.msg_buffer) {
      self.handle_user_message(&message);
    }
  }

  fn handle_user_message(&mut self, message: &AnyMessage) {
    let Some(child) = self.child.clone() else {
      return;
    };

    if self.policy.is_event(message) {
      self.current_delivery_id = self.current_delivery_id.saturating_add(1);
      let envelope = self.policy.make_event_confirmable(message, self.current_delivery_id);
      let confirmation_id = envelope.confirmation_id();
      let wrapped = AnyMessage::from_erased(ArcShared::new(envelope), message.sender().cloned());
      self.event_buffer.insert(confirmation_id, wrapped.clone());
      if child.tell(wrapped).is_err() {
        tracing::debug!(confirmation_id, "child rejected event; it stays buffered for replay");
      }
      return;
    }

    if let Some(confirmation) = message.downcast_ref::<Confirmation>() {
      tracing::debug!(
        confirmation_id = confirmation.confirmation_id(),
        sender_id = confirmation.sender_id(),
        "confirming delivery of event"
      );
      if self.event_buffer.remove(&confirmation.confirmation_id()).is_none() {
        // a late or duplicate confirmation is not a fault
        tracing::warn!(
          confirmation_id = confirmation.confirmation_id(),
          sender_id = confirmation.sender_id(),
          "received confirmation for unknown event"
        );
      }
      return;
    }

    if message.sender() == Some(&child) {
      // pass-through ack/result path: the supervisor fronts for the child
      if self.parent.tell(message.replacing_sender(None)).is_err() {
        tracing::debug!("parent rejected message forwarded from child");
      }
      return;
    }

    if child.tell(message.clone()).is_err() {
      tracing::debug!("child rejected forwarded message");
    }
    if !self.final_stop_received && self.policy.is_final_stop(message) {
      self.final_stop_received = true;
    }
  }

  fn reply(&self, request: &AnyMessage, response: AnyMessage) {
    if let Some(sender) = request.sender() {
      if sender.tell(response).is_err() {
        tracing::debug!("query sender rejected reply");
      }
    }
  }
}

impl<P, L> core::fmt::Debug for PersistenceSupervisor<P, L>
where
  P: SupervisionPolicy,
  L: ChildLifecycle,
{
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("PersistenceSupervisor")
      .field("child", &self.child)
      .field("restart_count", &self.restart_count)
      .field("unconfirmed_events", &self.event_buffer.len())
      .field("buffered_messages", &self.msg_buffer.len())
      .finish()
  }
}
