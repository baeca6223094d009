//! Circular index buffer for ring buffers over caller-owned storage.
//!
//! [`IndexBuffer`] keeps a read counter, a write counter and a capacity mask.
//! It answers "which slot next" for a FIFO of power-of-two size; the caller
//! keeps the storage and indexes it with the returned values.
//!
//! # Features
//!
//! - `std`: link the standard library.
//! - `tracing`: emit `trace`-level events when a reserve or take is refused
//!   and when a buffer is reset.

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![warn(missing_docs)]

mod error;
mod index;
mod iter;
mod log;

#[cfg(test)]
mod tests;

pub use error::CapacityError;
pub use index::{IndexBuffer, MAX_CAPACITY};
pub use iter::Indices;
