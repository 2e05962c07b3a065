use alloc::{string::String, vec::Vec};
use core::{any::Any, time::Duration};

use relakt_utils_rs::core::{sync::ArcShared, time::ManualClock};
use spin::Mutex;

use crate::core::{
  actor_ref::ActorRef,
  any_message::AnyMessage,
  confirmable::Confirmable,
  confirmable_envelope::ConfirmableEnvelope,
  confirmation::Confirmation,
  deduplicating_handler::DeDuplicatingHandler,
  deduplicating_receiver::DeDuplicatingReceiver,
  deduplicating_receiver_settings::DeDuplicatingReceiverSettings,
  in_memory_journal::InMemoryJournal,
  in_memory_snapshot_store::InMemorySnapshotStore,
  journal::Journal,
  manual_scheduler::ManualScheduler,
  message_sink::MessageSink,
  pid::Pid,
  prune_senders_tick::PruneSendersTick,
  receive_ordering::ReceiveOrdering,
  receiver_state::ReceiverState,
  send_error::SendError,
  snapshot_metadata::SnapshotMetadata,
  snapshot_store::SnapshotStore,
};

struct RecordingSink {
  messages: ArcShared<Mutex<Vec<AnyMessage>>>,
}

impl MessageSink for RecordingSink {
  fn tell(&self, message: AnyMessage) -> Result<(), SendError> {
    self.messages.lock().push(message);
    Ok(())
  }
}

fn recording_ref(id: u64) -> (ActorRef, ArcShared<Mutex<Vec<AnyMessage>>>) {
  let messages = ArcShared::new(Mutex::new(Vec::new()));
  let sink = RecordingSink { messages: messages.clone() };
  (ActorRef::new(Pid::new(id, 1), ArcShared::new(sink)), messages)
}

#[derive(Default)]
struct CountingHandler {
  handled: Vec<(i64, String)>,
  plain:   usize,
}

impl DeDuplicatingHandler for CountingHandler {
  fn handle_new(&mut self, confirmation_id: i64, sender_id: &str, _payload: &(dyn Any + Send + Sync)) {
    self.handled.push((confirmation_id, String::from(sender_id)));
  }

  fn confirmation_reply(&mut self, confirmation_id: i64, sender_id: &str) -> AnyMessage {
    AnyMessage::new(Confirmation::new(confirmation_id, sender_id))
  }

  fn receive_plain(&mut self, _message: &AnyMessage) {
    self.plain += 1;
  }
}

type TestReceiver = DeDuplicatingReceiver<CountingHandler, InMemoryJournal, InMemorySnapshotStore>;

fn settings(snapshot_every: u64) -> DeDuplicatingReceiverSettings {
  DeDuplicatingReceiverSettings::new(ReceiveOrdering::AnyOrder, Duration::from_secs(60), 100, snapshot_every).unwrap()
}

fn receiver_with(journal: InMemoryJournal, snapshots: InMemorySnapshotStore, snapshot_every: u64) -> TestReceiver {
  let clock = ArcShared::new(ManualClock::new(Duration::from_secs(1)));
  DeDuplicatingReceiver::new("receiver-1", settings(snapshot_every), clock, CountingHandler::default(), journal, snapshots)
}

fn confirmable(id: i64, sender_id: &str, reply_to: &ActorRef) -> AnyMessage {
  AnyMessage::with_sender(ConfirmableEnvelope::new(id, sender_id, "payload"), reply_to.clone())
}

#[test]
fn new_messages_run_the_handler_and_persist_a_confirmation() {
  let mut receiver = receiver_with(InMemoryJournal::new(), InMemorySnapshotStore::new(), 100);
  let (reply_to, replies) = recording_ref(7);

  receiver.receive(&confirmable(1, "sender-a", &reply_to)).unwrap();

  assert_eq!(receiver.handler().handled, [(1, String::from("sender-a"))]);
  assert_eq!(receiver.last_sequence_nr(), 1);

  let replies = replies.lock();
  assert_eq!(replies.len(), 1);
  let receipt = replies[0].downcast_ref::<Confirmation>().unwrap();
  assert_eq!(receipt.confirmation_id(), 1);
}

#[test]
fn duplicates_short_circuit_but_still_acknowledge() {
  let mut receiver = receiver_with(InMemoryJournal::new(), InMemorySnapshotStore::new(), 100);
  let (reply_to, replies) = recording_ref(7);

  receiver.receive(&confirmable(1, "sender-a", &reply_to)).unwrap();
  receiver.receive(&confirmable(1, "sender-a", &reply_to)).unwrap();

  // handler ran once, but both deliveries were acknowledged
  assert_eq!(receiver.handler().handled.len(), 1);
  assert_eq!(replies.lock().len(), 2);
  assert_eq!(receiver.last_sequence_nr(), 1);
}

#[test]
fn plain_messages_pass_through_untouched() {
  let mut receiver = receiver_with(InMemoryJournal::new(), InMemorySnapshotStore::new(), 100);

  receiver.receive(&AnyMessage::new("not confirmable")).unwrap();

  assert_eq!(receiver.handler().plain, 1);
  assert_eq!(receiver.last_sequence_nr(), 0);
}

#[test]
fn snapshot_taken_every_n_messages_purges_covered_events() {
  let mut receiver = receiver_with(InMemoryJournal::new(), InMemorySnapshotStore::new(), 2);
  let (reply_to, _replies) = recording_ref(7);

  receiver.receive(&confirmable(1, "sender-a", &reply_to)).unwrap();
  receiver.receive(&confirmable(2, "sender-a", &reply_to)).unwrap();

  // a snapshot at seq 2 covers both confirmations, so the journal is empty
  assert!(receiver.journal().events("receiver-1").is_empty());
  assert_eq!(receiver.snapshot_store().snapshot_count("receiver-1"), 1);
}

#[test]
fn failed_snapshot_save_retains_events() {
  let mut snapshots = InMemorySnapshotStore::new();
  snapshots.fail_saves(true);
  let mut receiver = receiver_with(InMemoryJournal::new(), snapshots, 2);
  let (reply_to, _replies) = recording_ref(7);

  receiver.receive(&confirmable(1, "sender-a", &reply_to)).unwrap();
  receiver.receive(&confirmable(2, "sender-a", &reply_to)).unwrap();

  assert_eq!(receiver.journal().events("receiver-1").len(), 2);
  assert_eq!(receiver.snapshot_store().snapshot_count("receiver-1"), 0);
}

#[test]
fn failed_append_skips_the_acknowledgement() {
  let mut journal = InMemoryJournal::new();
  journal.fail_appends(true);
  let mut receiver = receiver_with(journal, InMemorySnapshotStore::new(), 100);
  let (reply_to, replies) = recording_ref(7);

  receiver.receive(&confirmable(1, "sender-a", &reply_to)).unwrap();

  // the handler ran, but without a durable receipt no ack goes out; the
  // sender redelivers and the duplicate path acknowledges then
  assert_eq!(receiver.handler().handled.len(), 1);
  assert!(replies.lock().is_empty());
}

#[test]
fn recovery_restores_dedup_decisions_from_snapshot_and_events() {
  let mut original = receiver_with(InMemoryJournal::new(), InMemorySnapshotStore::new(), 2);
  let (reply_to, _replies) = recording_ref(7);
  for id in 1..=3 {
    original.receive(&confirmable(id, "sender-a", &reply_to)).unwrap();
  }
  let (journal, snapshots) = original.into_ports();

  let mut recovered = receiver_with(journal, snapshots, 2);
  recovered.recover().unwrap();

  let (reply_to, replies) = recording_ref(9);
  for id in 1..=3 {
    recovered.receive(&confirmable(id, "sender-a", &reply_to)).unwrap();
  }

  // every id was already processed before the restart
  assert!(recovered.handler().handled.is_empty());
  assert_eq!(replies.lock().len(), 3);
}

#[test]
fn unknown_snapshot_type_is_skipped_but_events_still_replay() {
  let mut journal = InMemoryJournal::new();
  journal.append("receiver-1", ArcShared::new(Confirmation::new(1, "sender-a"))).unwrap();

  let mut snapshots = InMemorySnapshotStore::new();
  snapshots.save_snapshot(SnapshotMetadata::new("receiver-1", 99), ArcShared::new(42_u32)).unwrap();

  let mut receiver = receiver_with(journal, snapshots, 100);
  receiver.recover().unwrap();

  let (reply_to, _replies) = recording_ref(7);
  receiver.receive(&confirmable(1, "sender-a", &reply_to)).unwrap();
  assert!(receiver.handler().handled.is_empty());
}

#[test]
fn prune_tick_drops_idle_senders() {
  let clock = ArcShared::new(ManualClock::new(Duration::from_secs(1)));
  let mut receiver = DeDuplicatingReceiver::new(
    "receiver-1",
    settings(100),
    clock.clone(),
    CountingHandler::default(),
    InMemoryJournal::new(),
    InMemorySnapshotStore::new(),
  );
  let (reply_to, _replies) = recording_ref(7);

  receiver.receive(&confirmable(1, "sender-a", &reply_to)).unwrap();
  clock.advance(Duration::from_secs(120));
  receiver.receive(&AnyMessage::new(PruneSendersTick)).unwrap();

  assert!(receiver.state().tracked_senders().is_empty());

  // the sender was forgotten, so a resend is treated as new
  receiver.receive(&confirmable(1, "sender-a", &reply_to)).unwrap();
  assert_eq!(receiver.handler().handled.len(), 2);
}

#[test]
fn prune_task_lifecycle_is_idempotent() {
  let mut receiver = receiver_with(InMemoryJournal::new(), InMemorySnapshotStore::new(), 100);
  let mut scheduler = ManualScheduler::new();

  // stopping before start is a no-op
  receiver.post_stop(&mut scheduler);

  receiver.pre_start(&mut scheduler).unwrap();
  receiver.pre_start(&mut scheduler).unwrap();
  assert_eq!(scheduler.entries().len(), 1);
  assert_eq!(scheduler.entries()[0].interval(), Some(Duration::from_secs(60)));

  receiver.post_stop(&mut scheduler);
  receiver.post_stop(&mut scheduler);
  assert!(scheduler.entries().is_empty());
}
