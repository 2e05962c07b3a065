//! Snapshot metadata representation.

use alloc::string::String;

/// Metadata describing a stored snapshot.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct SnapshotMetadata {
  persistence_id: String,
  sequence_nr:    u64,
}

impl SnapshotMetadata {
  /// Creates new snapshot metadata.
  #[must_use]
  pub fn new(persistence_id: impl Into<String>, sequence_nr: u64) -> Self {
    Self { persistence_id: persistence_id.into(), sequence_nr }
  }

  /// Returns the persistence id.
  #[must_use]
  pub fn persistence_id(&self) -> &str {
    &self.persistence_id
  }

  /// Returns the sequence number covered by the snapshot.
  #[must_use]
  pub const fn sequence_nr(&self) -> u64 {
    self.sequence_nr
  }
}
