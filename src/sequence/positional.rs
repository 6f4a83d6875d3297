//! Positional combinators: operations that depend on where an element sits
//! in the sequence.
//!
//! Prefix operations (`take`, `take_while`, `first`, `nth`) stop pulling
//! upstream as soon as they have what they need, so they are safe on
//! infinite sequences. Suffix operations (`take_last`, `last`) must see the
//! whole sequence and never return on an infinite one.

use std::ops::ControlFlow;
use std::rc::Rc;

use super::error::{Result, SeqError};
use super::ring::RingBuffer;
use super::{Cursor, Seq};

struct TakeLast<T> {
    pending: Option<Cursor<T>>,
    capacity: usize,
    retained: std::vec::IntoIter<T>,
}

impl<T> Iterator for TakeLast<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if let Some(cursor) = self.pending.take() {
            let mut ring = RingBuffer::new(self.capacity);
            for item in cursor {
                ring.push(item);
            }
            tracing::trace!(retained = ring.len(), "take_last buffered suffix");
            self.retained = ring.into_ordered();
        }
        self.retained.next()
    }
}

impl<T: 'static> Seq<T> {
    /// Returns the first `count` elements.
    ///
    /// Upstream is pulled exactly `min(count, len)` times: `take` stops the
    /// moment it has delivered `count` elements, and `take(0)` never pulls.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ranger::{range, range_open};
    ///
    /// assert_eq!(range(0, 10).take(4).to_vec(), vec![0, 1, 2, 3]);
    /// assert_eq!(range(1, 5).take(8).to_vec(), vec![1, 2, 3, 4]);
    /// assert_eq!(range_open(0, 1).take(3).to_vec(), vec![0, 1, 2]);
    /// ```
    pub fn take(&self, count: usize) -> Self {
        self.derive(move |cursor| cursor.take(count))
    }

    /// Skips the first `count` elements and returns the rest.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ranger::range;
    ///
    /// assert_eq!(range(0, 10).drop(4).to_vec(), vec![4, 5, 6, 7, 8, 9]);
    /// assert!(range(1, 5).drop(8).is_empty());
    /// ```
    pub fn drop(&self, count: usize) -> Self {
        self.derive(move |cursor| cursor.skip(count))
    }

    /// Returns all elements but the first. Equivalent to `drop(1)`.
    pub fn rest(&self) -> Self {
        self.drop(1)
    }

    /// Returns the longest prefix whose elements satisfy `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ranger::seq;
    /// use ranger::numeric::is_even;
    ///
    /// let numbers = seq![0, 2, 4, 6, 8, 1, 3, 5, 7];
    /// assert_eq!(numbers.take_while(is_even).to_vec(), vec![0, 2, 4, 6, 8]);
    /// ```
    pub fn take_while<P>(&self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + 'static,
    {
        let predicate = Rc::new(predicate);
        self.derive(move |cursor| {
            let predicate = Rc::clone(&predicate);
            cursor.take_while(move |item| predicate(item))
        })
    }

    /// Skips the longest prefix whose elements satisfy `predicate`.
    ///
    /// Once `predicate` has returned `false` it is never evaluated again for
    /// the rest of that traversal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ranger::seq;
    /// use ranger::numeric::is_even;
    ///
    /// let numbers = seq![0, 2, 4, 6, 8, 1, 3, 4, 5];
    /// assert_eq!(numbers.drop_while(is_even).to_vec(), vec![1, 3, 4, 5]);
    /// ```
    pub fn drop_while<P>(&self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + 'static,
    {
        let predicate = Rc::new(predicate);
        self.derive(move |cursor| {
            let predicate = Rc::clone(&predicate);
            cursor.skip_while(move |item| predicate(item))
        })
    }

    /// Returns all but the last `count` elements.
    ///
    /// Runs two cursors in lockstep, one of them `count` elements ahead, and
    /// emits from the lagging one while the leading one still has elements.
    /// The upstream is therefore traversed twice.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ranger::range;
    ///
    /// assert_eq!(range(1, 11).drop_last(4).to_vec(), vec![1, 2, 3, 4, 5, 6]);
    /// assert!(range(1, 3).drop_last(5).is_empty());
    /// ```
    pub fn drop_last(&self, count: usize) -> Self {
        self.map2(&self.drop(count), |item, _| item)
    }

    /// Returns the last `count` elements, or the whole sequence if it is
    /// shorter.
    ///
    /// The whole upstream is consumed (into a ring buffer of `count` slots)
    /// before the first element is produced, so this never returns on an
    /// infinite sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ranger::range;
    ///
    /// assert_eq!(range(0, 10).take_last(3).to_vec(), vec![7, 8, 9]);
    /// assert_eq!(range(0, 2).take_last(5).to_vec(), vec![0, 1]);
    /// ```
    pub fn take_last(&self, count: usize) -> Self {
        self.derive(move |cursor| TakeLast {
            pending: Some(cursor),
            capacity: count,
            retained: Vec::new().into_iter(),
        })
    }

    /// Returns the first element.
    ///
    /// # Errors
    ///
    /// Returns [`SeqError::Empty`] if the sequence has no elements.
    pub fn first(&self) -> Result<T> {
        self.cursor().next().ok_or_else(|| SeqError::empty("first"))
    }

    /// Returns the first element, or `default` if there is none.
    pub fn first_or(&self, default: T) -> T {
        self.cursor().next().unwrap_or(default)
    }

    /// Returns the element at `index` (0-based), pulling only as far as
    /// needed.
    ///
    /// # Errors
    ///
    /// Returns [`SeqError::IndexOutOfRange`] if the sequence has `index` or
    /// fewer elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ranger::{SeqError, seq};
    ///
    /// let numbers = seq![1, 2, 3, 4];
    /// assert_eq!(numbers.nth(2), Ok(3));
    /// assert_eq!(
    ///     numbers.nth(9),
    ///     Err(SeqError::IndexOutOfRange { operation: "nth", index: 9, length: 4 })
    /// );
    /// ```
    pub fn nth(&self, index: usize) -> Result<T> {
        let mut length = 0;
        self.try_each(|item| {
            if length == index {
                ControlFlow::Break(item)
            } else {
                length += 1;
                ControlFlow::Continue(())
            }
        })
        .ok_or_else(|| SeqError::index_out_of_range("nth", index, length))
    }

    /// Returns the element at `index`, or `default` if there is none.
    pub fn nth_or(&self, index: usize, default: T) -> T {
        self.cursor().nth(index).unwrap_or(default)
    }

    /// Returns the last element.
    ///
    /// Never returns on an infinite sequence.
    ///
    /// # Errors
    ///
    /// Returns [`SeqError::Empty`] if the sequence has no elements.
    pub fn last(&self) -> Result<T> {
        self.cursor().last().ok_or_else(|| SeqError::empty("last"))
    }

    /// Returns the last element, or `default` if there is none.
    pub fn last_or(&self, default: T) -> T {
        self.cursor().last().unwrap_or(default)
    }

    /// Returns a uniformly chosen element, using the thread-local generator.
    ///
    /// Walks the sequence twice: once to count it and once to reach the
    /// chosen index. Never returns on an infinite sequence.
    ///
    /// # Errors
    ///
    /// Returns [`SeqError::Empty`] if the sequence has no elements.
    #[cfg(feature = "random")]
    pub fn rand_nth(&self) -> Result<T> {
        self.rand_nth_with(&mut rand::rng())
    }

    /// Returns a uniformly chosen element drawn with `rng`.
    ///
    /// # Errors
    ///
    /// Returns [`SeqError::Empty`] if the sequence has no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use ranger::range;
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let picked = range(1, 10).rand_nth_with(&mut rng).unwrap();
    /// assert!((1..10).contains(&picked));
    /// ```
    #[cfg(feature = "random")]
    pub fn rand_nth_with<R>(&self, rng: &mut R) -> Result<T>
    where
        R: rand::Rng,
    {
        let length = self.count();
        if length == 0 {
            return Err(SeqError::empty("rand_nth"));
        }
        self.nth(rng.random_range(0..length))
    }
}
