//! Shared-pointer aliases used across the relakt crates.

/// Atomically reference-counted shared pointer.
pub type ArcShared<T> = alloc::sync::Arc<T>;
