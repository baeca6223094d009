//! Iterator over pending slot indices.

use core::iter::FusedIterator;

use crate::IndexBuffer;

/// Slot indices of the items in an [`IndexBuffer`], oldest to newest.
///
/// Created by [`IndexBuffer::indices`]. Holds a shared borrow, so the buffer
/// cannot change underneath it.
#[derive(Debug, Clone)]
pub struct Indices<'a> {
    buffer: &'a IndexBuffer,
    front: usize,
    back: usize,
}

impl<'a> Indices<'a> {
    pub(crate) fn new(buffer: &'a IndexBuffer) -> Self {
        Self {
            buffer,
            front: 0,
            back: buffer.avail(),
        }
    }
}

impl Iterator for Indices<'_> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.front == self.back {
            return None;
        }
        let idx = self.buffer.peek_at_unchecked(self.front);
        self.front += 1;
        Some(idx)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl DoubleEndedIterator for Indices<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<usize> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.buffer.peek_at_unchecked(self.back))
    }
}

impl ExactSizeIterator for Indices<'_> {}

impl FusedIterator for Indices<'_> {}
