//! In-memory journal implementation for testing.

#[cfg(test)]
mod tests;

use alloc::{
  collections::BTreeMap,
  string::{String, ToString},
  vec::Vec,
};
use core::any::Any;

use relakt_utils_rs::core::sync::ArcShared;

use crate::core::{journal::Journal, journal_error::JournalError, persistent_repr::PersistentRepr};

/// In-memory journal implementation.
#[derive(Clone, Debug, Default)]
pub struct InMemoryJournal {
  entries:              BTreeMap<String, Vec<PersistentRepr>>,
  highest_sequence_nrs: BTreeMap<String, u64>,
  fail_appends:         bool,
}

impl InMemoryJournal {
  /// Creates a new in-memory journal.
  #[must_use]
  pub const fn new() -> Self {
    Self { entries: BTreeMap::new(), highest_sequence_nrs: BTreeMap::new(), fail_appends: false }
  }

  /// Makes every subsequent append fail, for exercising failure paths.
  pub fn fail_appends(&mut self, fail: bool) {
    self.fail_appends = fail;
  }

  /// Returns the stored events for a persistence id.
  #[must_use]
  pub fn events(&self, persistence_id: &str) -> &[PersistentRepr] {
    self.entries.get(persistence_id).map_or(&[], Vec::as_slice)
  }
}

impl Journal for InMemoryJournal {
  fn append(
    &mut self,
    persistence_id: &str,
    event: ArcShared<dyn Any + Send + Sync>,
  ) -> Result<u64, JournalError> {
    if self.fail_appends {
      return Err(JournalError::Storage("append rejected".to_string()));
    }
    let sequence_nr = self.highest_sequence_nrs.get(persistence_id).copied().unwrap_or(0).saturating_add(1);
    let repr = PersistentRepr::from_erased(event, persistence_id, sequence_nr);
    self.entries.entry(persistence_id.to_string()).or_default().push(repr);
    self.highest_sequence_nrs.insert(persistence_id.to_string(), sequence_nr);
    Ok(sequence_nr)
  }

  fn replay(&self, persistence_id: &str, from_sequence_nr: u64) -> Result<Vec<PersistentRepr>, JournalError> {
    let mut result = Vec::new();
    if let Some(entries) = self.entries.get(persistence_id) {
      for repr in entries.iter().filter(|repr| repr.sequence_nr() >= from_sequence_nr) {
        result.push(repr.clone());
      }
    }
    Ok(result)
  }

  fn delete_messages_to(&mut self, persistence_id: &str, to_sequence_nr: u64) -> Result<(), JournalError> {
    if let Some(entries) = self.entries.get_mut(persistence_id) {
      entries.retain(|repr| repr.sequence_nr() > to_sequence_nr);
      if entries.is_empty() {
        self.entries.remove(persistence_id);
      }
    }
    Ok(())
  }

  fn highest_sequence_nr(&self, persistence_id: &str) -> Result<u64, JournalError> {
    Ok(self.highest_sequence_nrs.get(persistence_id).copied().unwrap_or(0))
  }
}
