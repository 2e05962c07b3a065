use alloc::{string::String, vec::Vec};
use core::time::Duration;

use relakt_utils_rs::core::{sync::ArcShared, time::ManualClock};

use crate::core::{receiver_state::ReceiverState, unordered_receiver_state::UnorderedReceiverState};

fn state_with_clock(buffer_size: usize) -> (UnorderedReceiverState, ArcShared<ManualClock>) {
  let clock = ArcShared::new(ManualClock::new(Duration::from_secs(1)));
  let state = UnorderedReceiverState::with_buffer_size(clock.clone(), buffer_size);
  (state, clock)
}

#[test]
fn first_message_from_a_sender_is_never_a_duplicate() {
  let (mut state, _clock) = state_with_clock(10);
  assert!(!state.already_processed(1, "foo"));
}

#[test]
fn confirmed_ids_stay_duplicates_across_interleaved_senders() {
  let (mut state, _clock) = state_with_clock(10);

  state.confirm_processing(1, "foo");
  state.confirm_processing(1, "bar");
  state.confirm_processing(2, "foo");

  assert!(state.already_processed(1, "foo"));
  assert!(state.already_processed(1, "foo"));
  assert!(state.already_processed(1, "bar"));
  assert!(state.already_processed(2, "foo"));
  assert!(!state.already_processed(2, "bar"));
}

#[test]
fn window_overflow_evicts_earliest_inserted_id() {
  let buffer_size = 5;
  let (mut state, _clock) = state_with_clock(buffer_size);

  for id in 1..=(buffer_size as i64 + 1) {
    state.confirm_processing(id, "foo");
  }

  assert!(!state.already_processed(1, "foo"));
  for id in 2..=(buffer_size as i64 + 1) {
    assert!(state.already_processed(id, "foo"));
  }
}

#[test]
fn reconfirming_a_tracked_id_does_not_change_eviction_order() {
  let (mut state, _clock) = state_with_clock(3);

  for id in 1..=3 {
    state.confirm_processing(id, "foo");
  }
  state.confirm_processing(1, "foo");
  state.confirm_processing(4, "foo");

  // id 1 was not re-enqueued, so it is still the oldest and gets evicted
  assert!(!state.already_processed(1, "foo"));
  assert!(state.already_processed(2, "foo"));
  assert!(state.already_processed(4, "foo"));
}

#[test]
fn prune_removes_exactly_the_senders_idle_at_least_the_threshold() {
  let (mut state, clock) = state_with_clock(10);

  state.confirm_processing(1, "idle");
  clock.advance(Duration::from_secs(10));
  state.confirm_processing(1, "fresh");
  clock.advance(Duration::from_secs(20));

  // "idle" has been quiet for 30s, "fresh" for 20s
  let mut pruned = state.prune(Duration::from_secs(30));
  pruned.sort();
  assert_eq!(pruned, [String::from("idle")]);

  assert!(!state.already_processed(1, "idle"));
  assert!(state.already_processed(1, "fresh"));
  assert_eq!(state.tracked_senders().len(), 2); // "idle" re-registered by the check above
}

#[test]
fn prune_boundary_is_inclusive() {
  let (mut state, clock) = state_with_clock(10);

  state.confirm_processing(1, "foo");
  clock.advance(Duration::from_secs(30));

  // idle time == threshold prunes
  let pruned = state.prune(Duration::from_secs(30));
  assert_eq!(pruned, [String::from("foo")]);
}

#[test]
fn prune_keeps_senders_just_under_the_threshold() {
  let (mut state, clock) = state_with_clock(10);

  state.confirm_processing(1, "foo");
  clock.advance(Duration::from_secs(29));

  assert!(state.prune(Duration::from_secs(30)).is_empty());
  assert!(state.already_processed(1, "foo"));
}

#[test]
fn duplicate_checks_refresh_the_idle_timer() {
  let (mut state, clock) = state_with_clock(10);

  state.confirm_processing(1, "foo");
  clock.advance(Duration::from_secs(25));
  // the sender only produced a duplicate, but that still counts as activity
  assert!(state.already_processed(1, "foo"));
  clock.advance(Duration::from_secs(25));

  assert!(state.prune(Duration::from_secs(30)).is_empty());
}

#[test]
fn snapshot_round_trip_preserves_dedup_results_and_lru_times() {
  let (mut state, clock) = state_with_clock(10);

  state.confirm_processing(1, "foo");
  state.confirm_processing(2, "foo");
  clock.advance(Duration::from_secs(5));
  state.confirm_processing(1, "fuber");

  let snapshot = state.to_snapshot();
  assert_eq!(snapshot.tracked_ids().len(), 2);
  assert_eq!(snapshot.tracked_ids()["foo"], [1, 2]);
  assert_eq!(snapshot.tracked_ids()["fuber"], [1]);
  assert_eq!(snapshot.tracked_senders().len(), 2);

  let mut restored = UnorderedReceiverState::with_buffer_size(clock.clone(), 10);
  restored.from_snapshot(snapshot);

  assert_eq!(restored.tracked_senders(), state.tracked_senders());
  assert!(restored.already_processed(1, "foo"));
  assert!(restored.already_processed(2, "foo"));
  assert!(restored.already_processed(1, "fuber"));
  assert!(!restored.already_processed(2, "fuber"));
}

#[test]
fn snapshot_round_trip_preserves_eviction_order() {
  let (mut state, clock) = state_with_clock(3);

  for id in 1..=3 {
    state.confirm_processing(id, "foo");
  }

  let mut restored = UnorderedReceiverState::with_buffer_size(clock.clone(), 3);
  restored.from_snapshot(state.to_snapshot());
  restored.confirm_processing(4, "foo");

  // oldest-first order survived the round trip, so id 1 is the one evicted
  assert!(!restored.already_processed(1, "foo"));
  assert!(restored.already_processed(2, "foo"));
  assert!(restored.already_processed(4, "foo"));
}

#[test]
fn tracked_ids_never_outlive_their_lru_entry() {
  let (mut state, clock) = state_with_clock(10);

  for (id, sender) in [(1, "a"), (2, "a"), (1, "b")] {
    state.confirm_processing(id, sender);
  }
  clock.advance(Duration::from_secs(60));
  let pruned_count = state.prune(Duration::from_secs(30)).len();

  assert_eq!(pruned_count, 2);
  let snapshot = state.to_snapshot();
  let tracked: Vec<_> = snapshot.tracked_ids().keys().collect();
  assert!(tracked.is_empty());
  assert!(snapshot.tracked_senders().is_empty());
}
