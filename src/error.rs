//! Capacity validation errors.

use snafu::{Snafu, ensure};

/// A capacity that cannot back an [`IndexBuffer`](crate::IndexBuffer).
///
/// Returned by [`IndexBuffer::try_new`](crate::IndexBuffer::try_new) for
/// capacities that come from runtime input. Compile-time capacities should use
/// [`IndexBuffer::new`](crate::IndexBuffer::new), which panics instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Snafu)]
#[snafu(display("capacity {capacity} is not zero or a power of two"))]
pub struct CapacityError {
    capacity: usize,
}

impl CapacityError {
    /// The capacity that was rejected.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Zero or a power of two.
///
/// Every power of two representable in `usize` is at most [`MAX_CAPACITY`],
/// so this check alone also guarantees one bit of counter headroom.
///
/// [`MAX_CAPACITY`]: crate::MAX_CAPACITY
#[inline]
pub(crate) const fn is_valid_capacity(capacity: usize) -> bool {
    (capacity & capacity.wrapping_sub(1)) == 0
}

pub(crate) fn validate(capacity: usize) -> Result<(), CapacityError> {
    ensure!(is_valid_capacity(capacity), CapacitySnafu { capacity });
    Ok(())
}
