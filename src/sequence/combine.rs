//! Multi-sequence combinators.
//!
//! `zip`, `map2` and `interleave` advance two sequences in lockstep through
//! one [`Cursor`] each. Both cursors are released the moment either side is
//! exhausted, so a long (or infinite) partner is never polled past the end
//! of the shorter one.

use std::hash::Hash;
use std::rc::Rc;

use super::aggregate::FastMap;
use super::{Cursor, Seq, repeat};

/// Pulls one element from each cursor per step; stops when either ends.
struct Lockstep<A, B> {
    left: Cursor<A>,
    right: Cursor<B>,
}

impl<A, B> Lockstep<A, B> {
    fn release(&mut self) {
        self.left.release();
        self.right.release();
    }
}

impl<A, B> Iterator for Lockstep<A, B> {
    type Item = (A, B);

    fn next(&mut self) -> Option<(A, B)> {
        let Some(left) = self.left.next() else {
            self.release();
            return None;
        };
        let Some(right) = self.right.next() else {
            self.release();
            return None;
        };
        Some((left, right))
    }
}

/// Emits `a0, b0, a1, b1, ...`, only ever emitting complete pairs.
struct Interleave<T> {
    pairs: Lockstep<T, T>,
    pending: Option<T>,
}

impl<T> Iterator for Interleave<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if let Some(second) = self.pending.take() {
            return Some(second);
        }
        let (first, second) = self.pairs.next()?;
        self.pending = Some(second);
        Some(first)
    }
}

/// Re-walks the source every lap; stops if a lap produces nothing.
struct Cycle<T> {
    source: Seq<T>,
    lap: Cursor<T>,
    lap_produced: bool,
}

impl<T: 'static> Iterator for Cycle<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        loop {
            if let Some(item) = self.lap.next() {
                self.lap_produced = true;
                return Some(item);
            }
            if !self.lap_produced {
                return None;
            }
            self.lap = self.source.cursor();
            self.lap_produced = false;
        }
    }
}

/// Returns the elements of every sequence in `sequences`, one after the other.
///
/// A sub-sequence is only started once the previous one is exhausted, and
/// never started at all if the consumer stops first.
///
/// # Examples
///
/// ```rust
/// use ranger::{concat, range};
///
/// let joined = concat([range(0, 3), range(3, 5), range(5, 7)]);
/// assert_eq!(joined.to_vec(), vec![0, 1, 2, 3, 4, 5, 6]);
/// assert_eq!(joined.take(4).to_vec(), vec![0, 1, 2, 3]);
/// ```
pub fn concat<T, I>(sequences: I) -> Seq<T>
where
    T: 'static,
    I: IntoIterator<Item = Seq<T>>,
{
    let sequences: Rc<[Seq<T>]> = sequences.into_iter().collect();
    Seq::new(move || {
        let sequences = Rc::clone(&sequences);
        (0..sequences.len()).flat_map(move |index| sequences[index].cursor())
    })
}

impl<T: 'static> Seq<T> {
    /// Returns this sequence followed by `other`.
    pub fn chain(&self, other: &Self) -> Self {
        concat([self.clone(), other.clone()])
    }

    /// Pairs up elements of `self` and `other` position by position.
    ///
    /// The result is as long as the shorter input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ranger::{range, repeat};
    ///
    /// let pairs = range(0, 3).zip(&repeat('x'));
    /// assert_eq!(pairs.to_vec(), vec![(0, 'x'), (1, 'x'), (2, 'x')]);
    /// ```
    pub fn zip<U: 'static>(&self, other: &Seq<U>) -> Seq<(T, U)> {
        let left = self.clone();
        let right = other.clone();
        Seq::new(move || Lockstep {
            left: left.cursor(),
            right: right.cursor(),
        })
    }

    /// Combines elements of `self` and `other` position by position.
    ///
    /// The result is as long as the shorter input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ranger::{range, repeat_n};
    ///
    /// let sums = range(0, 10).map2(&repeat_n(2, 1), |left, right| left + right);
    /// assert_eq!(sums.to_vec(), vec![1, 2]);
    /// ```
    pub fn map2<U, O, F>(&self, other: &Seq<U>, combine: F) -> Seq<O>
    where
        U: 'static,
        O: 'static,
        F: Fn(T, U) -> O + 'static,
    {
        let combine = Rc::new(combine);
        self.zip(other).derive(move |pairs| {
            let combine = Rc::clone(&combine);
            pairs.map(move |(left, right)| combine(left, right))
        })
    }

    /// Alternates elements of `self` and `other`: `a0, b0, a1, b1, ...`.
    ///
    /// Stops as soon as either side is exhausted, so the result always holds
    /// complete pairs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ranger::range;
    ///
    /// let woven = range(0, 10).interleave(&range(10, 13));
    /// assert_eq!(woven.to_vec(), vec![0, 10, 1, 11, 2, 12]);
    /// ```
    pub fn interleave(&self, other: &Self) -> Self {
        let left = self.clone();
        let right = other.clone();
        Self::new(move || Interleave {
            pairs: Lockstep {
                left: left.cursor(),
                right: right.cursor(),
            },
            pending: None,
        })
    }

    /// Repeats the whole sequence forever.
    ///
    /// The source is re-walked on every lap, so it must be finite and
    /// replayable. Cycling an empty sequence yields an empty sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ranger::range;
    ///
    /// assert_eq!(range(0, 2).cycle().take(5).to_vec(), vec![0, 1, 0, 1, 0]);
    /// ```
    pub fn cycle(&self) -> Self {
        let source = self.clone();
        Self::new(move || Cycle {
            lap: source.cursor(),
            source: source.clone(),
            lap_produced: false,
        })
    }
}

impl<T: Clone + 'static> Seq<T> {
    /// Places `separator` between consecutive elements.
    ///
    /// Equivalent to interleaving an endless stream of `separator` with the
    /// sequence and dropping the leading separator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ranger::range;
    ///
    /// assert_eq!(range(0, 3).interpose(-1).to_vec(), vec![0, -1, 1, -1, 2]);
    /// ```
    pub fn interpose(&self, separator: T) -> Self {
        repeat(separator).interleave(self).drop(1)
    }
}

impl<T: 'static> Seq<Seq<T>> {
    /// Concatenates a sequence of sequences into one flat sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ranger::range;
    ///
    /// let rows = range(0, 3).map(|row| range(row * 10, row * 10 + 2));
    /// assert_eq!(rows.flatten().to_vec(), vec![0, 1, 10, 11, 20, 21]);
    /// ```
    pub fn flatten(&self) -> Seq<T> {
        self.derive(|rows| rows.flat_map(|row| row.cursor()))
    }
}

impl<K: Eq + Hash + 'static> Seq<K> {
    /// Builds a map from `self` as keys and `values` as values, paired
    /// position by position.
    ///
    /// Stops at the end of the shorter input; a repeated key keeps the value
    /// paired with its last occurrence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ranger::range;
    ///
    /// let map = range(0, 6).zip_map(&range(10, 15));
    /// assert_eq!(map.len(), 5);
    /// assert_eq!(map[&4], 14);
    /// ```
    pub fn zip_map<V: 'static>(&self, values: &Seq<V>) -> FastMap<K, V> {
        self.zip(values).cursor().collect()
    }
}
