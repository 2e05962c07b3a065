use relakt_utils_rs::core::sync::ArcShared;

use crate::core::{in_memory_journal::InMemoryJournal, journal::Journal};

#[test]
fn append_assigns_increasing_sequence_nrs_per_stream() {
  let mut journal = InMemoryJournal::new();

  assert_eq!(journal.append("a", ArcShared::new(1_u32)).unwrap(), 1);
  assert_eq!(journal.append("a", ArcShared::new(2_u32)).unwrap(), 2);
  assert_eq!(journal.append("b", ArcShared::new(3_u32)).unwrap(), 1);
  assert_eq!(journal.highest_sequence_nr("a").unwrap(), 2);
}

#[test]
fn replay_returns_events_in_write_order_from_sequence_nr() {
  let mut journal = InMemoryJournal::new();
  for value in 1..=4_u32 {
    journal.append("a", ArcShared::new(value)).unwrap();
  }

  let replayed = journal.replay("a", 3).unwrap();
  assert_eq!(replayed.len(), 2);
  assert_eq!(replayed[0].sequence_nr(), 3);
  assert_eq!(replayed[0].downcast_ref::<u32>(), Some(&3));
}

#[test]
fn delete_messages_to_removes_prefix_but_keeps_sequence_counter() {
  let mut journal = InMemoryJournal::new();
  for value in 1..=3_u32 {
    journal.append("a", ArcShared::new(value)).unwrap();
  }

  journal.delete_messages_to("a", 2).unwrap();
  assert_eq!(journal.events("a").len(), 1);
  assert_eq!(journal.append("a", ArcShared::new(4_u32)).unwrap(), 4);
}

#[test]
fn failing_journal_rejects_appends() {
  let mut journal = InMemoryJournal::new();
  journal.fail_appends(true);
  assert!(journal.append("a", ArcShared::new(1_u32)).is_err());
}
