//! Bounded collections shared across runtimes.

mod ring_buffer;

pub use ring_buffer::RingBuffer;
