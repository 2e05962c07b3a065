#![deny(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::redundant_clone))]
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

//! Reliable-delivery building blocks for event-sourced actors.
//!
//! Three cooperating pieces provide exactly-once-effect semantics on top of an
//! at-least-once transport: a de-duplicating receiver state with bounded
//! per-sender memory, an at-least-once delivery tracker with timed redelivery,
//! and a supervising proxy that buffers unconfirmed events across child
//! restarts. The surrounding runtime (mailboxes, durable stores, wire codecs)
//! is reached exclusively through the port traits in [`core`].

extern crate alloc;

pub mod core;
