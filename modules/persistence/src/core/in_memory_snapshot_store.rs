//! In-memory snapshot store implementation for testing.


use alloc::{
  collections::BTreeMap,
  string::{String, ToString},
  vec::Vec,
};
use core::any::Any;

use relakt_utils_rs::core::sync::ArcShared;

use crate::core::{
  snapshot_metadata::SnapshotMetadata, snapshot_selection_criteria::SnapshotSelectionCriteria,
  snapshot_store::{SnapshotLoadResult, SnapshotStore},
  snapshot_store_error::SnapshotStoreError,
};

/// In-memory snapshot store implementation.
#[derive(Clone, Default)]
pub struct InMemorySnapshotStore {
  snapshots:  BTreeMap<String, Vec<(SnapshotMetadata, ArcShared<dyn Any + Send + Sync>)>>,
  fail_saves: bool,
}

impl InMemorySnapshotStore {
  /// Creates a new in-memory snapshot store.
  #[must_use]
  pub const fn new() -> Self {
    Self { snapshots: BTreeMap::new(), fail_saves: false }
  }

  /// Makes every subsequent save fail, for exercising failure paths.
  pub fn fail_saves(&mut self, fail: bool) {
    self.fail_saves = fail;
  }

  /// Returns the number of snapshots stored for a persistence id.
  #[must_use]
  pub fn snapshot_count(&self, persistence_id: &str) -> usize {
    self.snapshots.get(persistence_id).map_or(0, Vec::len)
  }
}

impl SnapshotStore for InMemorySnapshotStore {
  fn load_snapshot(
    &self,
    persistence_id: &str,
    criteria: SnapshotSelectionCriteria,
  ) -> Result<SnapshotLoadResult, SnapshotStoreError> {
    let Some(entries) = self.snapshots.get(persistence_id) else {
      return Ok(None);
    };
    let newest = entries
      .iter()
      .filter(|(metadata, _)| criteria.matches(metadata.sequence_nr()))
      .max_by_key(|(metadata, _)| metadata.sequence_nr());
    Ok(newest.map(|(metadata, snapshot)| (metadata.clone(), snapshot.clone())))
  }

  fn save_snapshot(
    &mut self,
    metadata: SnapshotMetadata,
    snapshot: ArcShared<dyn Any + Send + Sync>,
  ) -> Result<(), SnapshotStoreError> {
    if self.fail_saves {
      return Err(SnapshotStoreError::Storage("save rejected".to_string()));
    }
    self.snapshots.entry(metadata.persistence_id().to_string()).or_default().push((metadata, snapshot));
    Ok(())
  }

  fn delete_snapshots(
    &mut self,
    persistence_id: &str,
    criteria: SnapshotSelectionCriteria,
  ) -> Result<(), SnapshotStoreError> {
    if let Some(entries) = self.snapshots.get_mut(persistence_id) {
      entries.retain(|(metadata, _)| !criteria.matches(metadata.sequence_nr()));
      if entries.is_empty() {
        self.snapshots.remove(persistence_id);
      }
    }
    Ok(())
  }
}

impl core::fmt::Debug for InMemorySnapshotStore {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("InMemorySnapshotStore").field("streams", &self.snapshots.len()).finish()
  }
}
