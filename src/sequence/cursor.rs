//! Pull-cursors over sequences.
//!
//! A [`Cursor`] is the pull side of a [`Seq`](super::Seq): a single-use,
//! stateful handle that hands out one element per call to `next`.
//! Combinators that must advance two sequences in lockstep (`zip`, `map2`,
//! `interleave`, `drop_last`) hold one cursor per upstream sequence.
//!
//! A cursor owns the whole chain of upstream cursors that feed it. Releasing
//! it, explicitly with [`Cursor::release`] or implicitly by dropping it,
//! tears that chain down immediately, so no upstream source is ever polled
//! after the consumer has lost interest.
//!
//! # Examples
//!
//! ```rust
//! use ranger::range;
//!
//! let mut cursor = range(0, 100).cursor();
//! assert_eq!(cursor.next(), Some(0));
//! assert_eq!(cursor.next(), Some(1));
//!
//! cursor.release();
//! assert!(cursor.is_released());
//! assert_eq!(cursor.next(), None);
//! ```

use std::fmt;

/// A single-use pull handle over a sequence.
///
/// Obtained from [`Seq::cursor`](super::Seq::cursor) or by iterating a
/// sequence with `for`. Each cursor replays its sequence from the beginning,
/// independently of every other cursor opened on the same sequence.
///
/// `Cursor` implements [`Iterator`], so the standard adapters are available
/// once you have decided to consume a sequence eagerly.
pub struct Cursor<T> {
    source: Option<Box<dyn Iterator<Item = T>>>,
    position: usize,
}

impl<T> Cursor<T> {
    pub(crate) fn open(source: Box<dyn Iterator<Item = T>>) -> Self {
        tracing::trace!("cursor opened");
        Self {
            source: Some(source),
            position: 0,
        }
    }

    /// Releases the cursor and every upstream cursor it owns.
    ///
    /// Calling `release` more than once is a no-op.
    pub fn release(&mut self) {
        if self.source.take().is_some() {
            tracing::trace!(delivered = self.position, "cursor released");
        }
    }

    /// Returns `true` once the cursor has been released or exhausted.
    pub const fn is_released(&self) -> bool {
        self.source.is_none()
    }

    /// Returns the number of elements this cursor has delivered so far.
    pub const fn position(&self) -> usize {
        self.position
    }
}

impl<T> Iterator for Cursor<T> {
    type Item = T;

    /// Pulls the next element, or `None` once the sequence is exhausted or
    /// the cursor has been released.
    ///
    /// Exhaustion releases the cursor, so a source is never polled again
    /// after it first reports the end.
    fn next(&mut self) -> Option<T> {
        let item = self.source.as_mut()?.next();
        match item {
            Some(_) => self.position += 1,
            None => self.release(),
        }
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.source
            .as_ref()
            .map_or((0, Some(0)), |source| source.size_hint())
    }
}

impl<T> Drop for Cursor<T> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<T> fmt::Debug for Cursor<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Cursor")
            .field("position", &self.position)
            .field("released", &self.is_released())
            .finish()
    }
}

static_assertions::assert_not_impl_any!(Cursor<i32>: Send, Sync);
