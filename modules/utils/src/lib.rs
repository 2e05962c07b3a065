#![deny(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::print_stdout)]
#![deny(clippy::dbg_macro)]
#![no_std]

//! Shared utility collection for the relakt crates.
//!
//! Provides the monotonic time primitives and bounded collections consumed by
//! the persistence crate, with `no_std` support. Runtime integrations only
//! need to satisfy the abstractions defined here with their own
//! implementations.

extern crate alloc;
#[cfg(feature = "std")]
extern crate std as stdlib;

pub mod core;
#[cfg(feature = "std")]
pub mod std;
