//! Logical destination path for tracked deliveries.

use alloc::string::String;
use core::fmt;

/// Logical address of a delivery destination.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorPath(String);

impl ActorPath {
  /// Creates a path from its string form.
  #[must_use]
  pub fn new(path: impl Into<String>) -> Self {
    Self(path.into())
  }

  /// Returns the string form of the path.
  #[must_use]
  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for ActorPath {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl From<&str> for ActorPath {
  fn from(path: &str) -> Self {
    Self::new(path)
  }
}
