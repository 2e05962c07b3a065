//! Criteria selecting snapshots for loads and deletions.

/// Bounds the sequence-number range a snapshot operation applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SnapshotSelectionCriteria {
  max_sequence_nr: u64,
  min_sequence_nr: u64,
}

impl SnapshotSelectionCriteria {
  /// Creates criteria covering the given inclusive range.
  #[must_use]
  pub const fn new(min_sequence_nr: u64, max_sequence_nr: u64) -> Self {
    Self { max_sequence_nr, min_sequence_nr }
  }

  /// Criteria matching every stored snapshot.
  #[must_use]
  pub const fn latest() -> Self {
    Self { max_sequence_nr: u64::MAX, min_sequence_nr: 0 }
  }

  /// Criteria matching snapshots up to and including `max_sequence_nr`.
  #[must_use]
  pub const fn up_to(max_sequence_nr: u64) -> Self {
    Self { max_sequence_nr, min_sequence_nr: 0 }
  }

  /// Returns the inclusive upper bound.
  #[must_use]
  pub const fn max_sequence_nr(&self) -> u64 {
    self.max_sequence_nr
  }

  /// Returns the inclusive lower bound.
  #[must_use]
  pub const fn min_sequence_nr(&self) -> u64 {
    self.min_sequence_nr
  }

  /// Returns `true` when the sequence number falls inside the criteria.
  #[must_use]
  pub const fn matches(&self, sequence_nr: u64) -> bool {
    sequence_nr >= self.min_sequence_nr && sequence_nr <= self.max_sequence_nr
  }
}
