//! Snapshot store port.

use core::any::Any;

use relakt_utils_rs::core::sync::ArcShared;

use crate::core::{
  snapshot_metadata::SnapshotMetadata, snapshot_selection_criteria::SnapshotSelectionCriteria,
  snapshot_store_error::SnapshotStoreError,
};

/// Snapshot load result representation.
pub type SnapshotLoadResult = Option<(SnapshotMetadata, ArcShared<dyn Any + Send + Sync>)>;

/// Key-value snapshot store consumed by the receiver driver.
pub trait SnapshotStore {
  /// Loads the newest snapshot matching the criteria.
  ///
  /// # Errors
  ///
  /// Returns an error when loading fails.
  fn load_snapshot(
    &self,
    persistence_id: &str,
    criteria: SnapshotSelectionCriteria,
  ) -> Result<SnapshotLoadResult, SnapshotStoreError>;

  /// Saves a snapshot with metadata.
  ///
  /// # Errors
  ///
  /// Returns an error when saving fails.
  fn save_snapshot(
    &mut self,
    metadata: SnapshotMetadata,
    snapshot: ArcShared<dyn Any + Send + Sync>,
  ) -> Result<(), SnapshotStoreError>;

  /// Deletes snapshots matching the provided criteria.
  ///
  /// # Errors
  ///
  /// Returns an error when deletion fails.
  fn delete_snapshots(
    &mut self,
    persistence_id: &str,
    criteria: SnapshotSelectionCriteria,
  ) -> Result<(), SnapshotStoreError>;
}
