//! Read/write cursors for a circular buffer whose storage lives elsewhere.

use core::fmt;

use crate::{
    error::{self, CapacityError},
    iter::Indices,
    log::trace_event,
};

/// Largest capacity an [`IndexBuffer`] can hold: 2^(`usize::BITS` - 1).
///
/// Counters wrap modulo 2^`usize::BITS`. Keeping the capacity at or below half
/// that range lets [`IndexBuffer::avail`] be a single wrapping subtraction.
/// Every power of two that fits in a `usize` already satisfies this bound.
pub const MAX_CAPACITY: usize = 1 << (usize::BITS - 1);

/// Circular index buffer.
///
/// Tracks how many slots have ever been reserved (written) and taken (read)
/// and maps those counts onto slot indices in `[0, size())` with a bitmask.
/// It owns no storage: pair it with an array or slice of exactly
/// [`size()`](Self::size) elements and use the returned indices to address it.
///
/// All mutation goes through `&mut self`. Sharing one buffer between threads
/// or interrupt contexts needs an external lock held across any sequence that
/// checks [`avail()`](Self::avail) and then calls an `_unchecked` method.
///
/// ```
/// use index_buffer::IndexBuffer;
///
/// let mut cursors = IndexBuffer::new(4);
/// let mut slots = [0u8; 4];
///
/// for byte in b"abcd" {
///     let i = cursors.reserve().unwrap();
///     slots[i] = *byte;
/// }
/// assert!(cursors.full());
/// assert_eq!(cursors.reserve(), None);
///
/// let i = cursors.take().unwrap();
/// assert_eq!(slots[i], b'a');
/// assert_eq!(cursors.avail(), 3);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndexBuffer {
    /// Number of successful takes, wrapping.
    read_count: usize,
    /// Number of successful reserves, wrapping.
    write_count: usize,
    /// `capacity - 1`; `usize::MAX` for a zero-capacity buffer.
    mask: usize,
}

impl IndexBuffer {
    /// Create an empty buffer of `capacity` slots.
    ///
    /// Usable in `static` and `const` items.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is neither zero nor a power of two. In a const
    /// context this is a compile error.
    #[must_use]
    pub const fn new(capacity: usize) -> Self {
        assert!(
            error::is_valid_capacity(capacity),
            "capacity must be zero or a power of two"
        );

        Self {
            read_count: 0,
            write_count: 0,
            mask: capacity.wrapping_sub(1),
        }
    }

    /// Create an empty buffer, rejecting an invalid `capacity` with an error
    /// instead of a panic.
    pub fn try_new(capacity: usize) -> Result<Self, CapacityError> {
        error::validate(capacity)?;
        Ok(Self::new(capacity))
    }

    /// Reset both cursors and set a new capacity.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is neither zero nor a power of two.
    pub fn init(&mut self, capacity: usize) {
        *self = Self::new(capacity);
        trace_event!(capacity, "index buffer initialised");
    }

    /// Forget every pending item. Capacity is kept.
    ///
    /// Slots handed out by earlier reserves are not touched; the caller owns
    /// whatever they still hold.
    pub fn clear(&mut self) {
        trace_event!(dropped = self.avail(), "index buffer cleared");
        self.read_count = self.write_count;
    }

    /// Total number of slots.
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.mask.wrapping_add(1)
    }

    /// Number of items reserved but not yet taken.
    ///
    /// Stays correct after either counter wraps because both wrap at the same
    /// modulus and the true count never exceeds [`MAX_CAPACITY`].
    #[inline]
    #[must_use]
    pub const fn avail(&self) -> usize {
        self.write_count.wrapping_sub(self.read_count)
    }

    /// True if [`reserve()`](Self::reserve) would return `None`.
    ///
    /// A zero-capacity buffer is always full.
    #[inline]
    #[must_use]
    pub const fn full(&self) -> bool {
        // size() wraps to 0 for a zero-capacity buffer, where avail() is 0.
        self.avail() == self.size()
    }

    /// True if [`take()`](Self::take) would return `None`.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.avail() == 0
    }

    /// Total successful takes, modulo 2^`usize::BITS`.
    #[inline]
    #[must_use]
    pub const fn read_count(&self) -> usize {
        self.read_count
    }

    /// Total successful reserves, modulo 2^`usize::BITS`.
    #[inline]
    #[must_use]
    pub const fn write_count(&self) -> usize {
        self.write_count
    }

    /// Remove the oldest item and return the slot index to read it from.
    ///
    /// Returns `None` if the buffer is empty.
    #[inline]
    #[must_use = "the returned slot holds the removed item"]
    pub fn take(&mut self) -> Option<usize> {
        if self.is_empty() {
            trace_event!(size = self.size(), "take refused: index buffer empty");
            return None;
        }
        Some(self.take_unchecked())
    }

    /// Remove the oldest item without checking that one exists.
    ///
    /// The caller must know the buffer is non-empty, e.g. from an
    /// [`avail()`](Self::avail) call under the same exclusive borrow. Debug
    /// builds assert this. In release builds a violation moves the read cursor
    /// past the write cursor and every later result is meaningless.
    #[inline]
    #[must_use = "the returned slot holds the removed item"]
    pub fn take_unchecked(&mut self) -> usize {
        debug_assert!(!self.is_empty(), "take_unchecked on an empty index buffer");
        let idx = self.read_count & self.mask;
        self.read_count = self.read_count.wrapping_add(1);
        idx
    }

    /// Claim the next free slot and return its index for the caller to write.
    ///
    /// Returns `None` if the buffer is full.
    #[inline]
    #[must_use = "the returned slot must be written by the caller"]
    pub fn reserve(&mut self) -> Option<usize> {
        if self.full() {
            trace_event!(size = self.size(), "reserve refused: index buffer full");
            return None;
        }
        Some(self.reserve_unchecked())
    }

    /// Claim the next free slot without checking that one exists.
    ///
    /// The caller must know the buffer is not full. Debug builds assert this.
    /// In release builds a violation overwrites the oldest pending slot and
    /// pushes [`avail()`](Self::avail) past [`size()`](Self::size).
    #[inline]
    #[must_use = "the returned slot must be written by the caller"]
    pub fn reserve_unchecked(&mut self) -> usize {
        debug_assert!(!self.full(), "reserve_unchecked on a full index buffer");
        let idx = self.write_count & self.mask;
        self.write_count = self.write_count.wrapping_add(1);
        idx
    }

    /// Slot index of the item `offset` positions behind the oldest, without
    /// removing anything.
    ///
    /// Offset 0 is what the next [`take()`](Self::take) would return, offset 1
    /// the one after, and so on. Returns `None` unless `offset < avail()`.
    #[inline]
    #[must_use]
    pub fn peek_at(&self, offset: usize) -> Option<usize> {
        if offset < self.avail() {
            Some(self.peek_at_unchecked(offset))
        } else {
            None
        }
    }

    /// [`peek_at`](Self::peek_at) without the bound check.
    ///
    /// The caller must know `offset < avail()`, and must not let anything
    /// mutate the buffer between that check and using the index.
    #[inline]
    #[must_use]
    pub fn peek_at_unchecked(&self, offset: usize) -> usize {
        debug_assert!(
            offset < self.avail(),
            "peek_at_unchecked past the end of the index buffer"
        );
        self.read_count.wrapping_add(offset) & self.mask
    }

    /// Slot index of the oldest item, without removing it.
    ///
    /// Returns `None` if the buffer is empty.
    #[inline]
    #[must_use]
    pub fn peek(&self) -> Option<usize> {
        self.peek_at(0)
    }

    /// [`peek`](Self::peek) without the emptiness check.
    #[inline]
    #[must_use]
    pub fn peek_unchecked(&self) -> usize {
        self.peek_at_unchecked(0)
    }

    /// Slot indices of every pending item, oldest to newest.
    #[inline]
    pub fn indices(&self) -> Indices<'_> {
        Indices::new(self)
    }
}

impl Default for IndexBuffer {
    /// A zero-capacity buffer, which is both empty and full.
    fn default() -> Self {
        Self::new(0)
    }
}

impl fmt::Debug for IndexBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexBuffer")
            .field("read_count", &self.read_count)
            .field("write_count", &self.write_count)
            .field("size", &self.size())
            .field("avail", &self.avail())
            .finish()
    }
}

impl<'a> IntoIterator for &'a IndexBuffer {
    type Item = usize;
    type IntoIter = Indices<'a>;

    fn into_iter(self) -> Indices<'a> {
        self.indices()
    }
}

#[cfg(test)]
impl IndexBuffer {
    /// Buffer whose counters both start at `start`, for wrap-around tests.
    pub(crate) fn with_counters(capacity: usize, start: usize) -> Self {
        Self {
            read_count: start,
            write_count: start,
            ..Self::new(capacity)
        }
    }
}
