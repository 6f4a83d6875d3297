//! Aggregation and grouping combinators.
//!
//! Everything here except [`Seq::partition`] is a terminal operation that
//! traverses the whole sequence; none of them return on an infinite one.
//!
//! Keyed results are returned as [`FastMap`], whose hasher is chosen by cargo
//! feature:
//!
//! | Feature  | Hasher                            |
//! |----------|-----------------------------------|
//! | `fxhash` | `rustc_hash::FxBuildHasher`       |
//! | `ahash`  | `ahash::RandomState`              |
//! | neither  | `std` `RandomState` (SipHash)     |

use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

use super::error::{Result, SeqError};
use super::{Cursor, Seq};
use crate::numeric::Numeric;

/// The hasher used by keyed aggregations.
#[cfg(feature = "fxhash")]
pub type FastBuildHasher = rustc_hash::FxBuildHasher;

/// The hasher used by keyed aggregations.
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type FastBuildHasher = ahash::RandomState;

/// The hasher used by keyed aggregations.
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type FastBuildHasher = std::collections::hash_map::RandomState;

/// A `HashMap` using [`FastBuildHasher`].
pub type FastMap<K, V> = HashMap<K, V, FastBuildHasher>;

/// Sliding or hopping windows of a fixed length over a cursor.
///
/// Advancing to the next window is deferred until that window is requested,
/// so upstream is never pulled ahead of demand.
struct Windows<T> {
    cursor: Cursor<T>,
    window: VecDeque<T>,
    length: usize,
    stride: usize,
    advance_due: bool,
}

impl<T: Clone> Windows<T> {
    fn advance(&mut self) {
        if self.stride < self.length {
            self.window.drain(..self.stride);
        } else {
            self.window.clear();
            let mut gap = self.stride - self.length;
            while gap > 0 && self.cursor.next().is_some() {
                gap -= 1;
            }
        }
    }
}

impl<T: Clone + 'static> Iterator for Windows<T> {
    type Item = Seq<T>;

    fn next(&mut self) -> Option<Seq<T>> {
        if self.advance_due {
            self.advance();
        }
        while self.window.len() < self.length {
            let item = self.cursor.next()?;
            self.window.push_back(item);
        }
        self.advance_due = true;
        Some(self.window.iter().cloned().collect())
    }
}

impl<T: 'static> Seq<T> {
    /// Returns the number of elements.
    ///
    /// Never returns on an infinite sequence.
    pub fn count(&self) -> usize {
        self.each(|_| true)
    }

    /// Returns `true` if the sequence has no elements.
    ///
    /// Pulls at most one element.
    pub fn is_empty(&self) -> bool {
        self.cursor().next().is_none()
    }

    /// Groups elements by `key`, keeping each group in encounter order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ranger::range;
    ///
    /// let groups = range(0, 5).chain(&range(1, 4)).group_by(|n| n.to_string());
    /// assert_eq!(groups["0"], vec![0]);
    /// assert_eq!(groups["2"], vec![2, 2]);
    /// assert_eq!(groups.len(), 5);
    /// ```
    pub fn group_by<K, F>(&self, key: F) -> FastMap<K, Vec<T>>
    where
        K: Eq + Hash,
        F: Fn(&T) -> K,
    {
        self.reduce(FastMap::default(), |mut groups, item| {
            groups.entry(key(&item)).or_insert_with(Vec::new).push(item);
            groups
        })
    }

    /// Indexes elements by `key`. When several elements share a key, the last
    /// one encountered wins.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ranger::seq;
    ///
    /// let words = seq!["apple", "avocado", "banana"];
    /// let by_initial = words.index_by(|word| word.as_bytes()[0]);
    /// assert_eq!(by_initial[&b'a'], "avocado");
    /// assert_eq!(by_initial[&b'b'], "banana");
    /// ```
    pub fn index_by<K, F>(&self, key: F) -> FastMap<K, T>
    where
        K: Eq + Hash,
        F: Fn(&T) -> K,
    {
        self.reduce(FastMap::default(), |mut index, item| {
            index.insert(key(&item), item);
            index
        })
    }
}

impl<T: Clone + 'static> Seq<T> {
    /// Returns successive windows of exactly `length` elements, each starting
    /// `stride` elements after the previous one.
    ///
    /// `stride < length` gives overlapping windows, `stride == length`
    /// adjacent ones and `stride > length` skips elements between windows.
    /// A trailing window shorter than `length` is never emitted. A zero
    /// `length` or `stride` gives an empty sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ranger::{range, seq};
    ///
    /// let chunks = range(1, 10).partition(3, 3).map(|window| window.to_vec());
    /// assert_eq!(chunks.to_vec(), vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]);
    ///
    /// let sliding = seq![1, 2, 3, 4].partition(3, 1).map(|window| window.to_vec());
    /// assert_eq!(sliding.to_vec(), vec![vec![1, 2, 3], vec![2, 3, 4]]);
    /// ```
    pub fn partition(&self, length: usize, stride: usize) -> Seq<Self> {
        if length == 0 || stride == 0 {
            return Seq::empty();
        }
        self.derive(move |cursor| Windows {
            cursor,
            window: VecDeque::with_capacity(length),
            length,
            stride,
            advance_due: false,
        })
    }
}

impl<T: PartialOrd + 'static> Seq<T> {
    /// Returns the smallest element; the earliest one wins a tie.
    ///
    /// # Errors
    ///
    /// Returns [`SeqError::Empty`] if the sequence has no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ranger::seq;
    ///
    /// assert_eq!(seq![1, 6, -2, 3, 42].min(), Ok(-2));
    /// ```
    pub fn min(&self) -> Result<T> {
        let mut cursor = self.cursor();
        let first = cursor.next().ok_or_else(|| SeqError::empty("min"))?;
        Ok(cursor.fold(first, |best, item| if item < best { item } else { best }))
    }

    /// Returns the largest element; the earliest one wins a tie.
    ///
    /// # Errors
    ///
    /// Returns [`SeqError::Empty`] if the sequence has no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ranger::range;
    ///
    /// assert_eq!(range(4, 20).max(), Ok(19));
    /// ```
    pub fn max(&self) -> Result<T> {
        let mut cursor = self.cursor();
        let first = cursor.next().ok_or_else(|| SeqError::empty("max"))?;
        Ok(cursor.fold(first, |best, item| if item > best { item } else { best }))
    }
}

impl<N: Numeric> Seq<N> {
    /// Returns the sum of all elements, or zero for an empty sequence.
    pub fn sum(&self) -> N {
        self.reduce(N::ZERO, |total, item| total + item)
    }

    /// Returns the product of all elements, or one for an empty sequence.
    pub fn product(&self) -> N {
        self.reduce(N::ONE, |total, item| total * item)
    }
}

impl<T: Eq + Hash + 'static> Seq<T> {
    /// Counts the occurrences of each distinct element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ranger::seq;
    ///
    /// let counts = seq!['a', 'b', 'c', 'b', 'a', 'a'].frequencies();
    /// assert_eq!(counts[&'a'], 3);
    /// assert_eq!(counts[&'b'], 2);
    /// assert_eq!(counts[&'c'], 1);
    /// ```
    pub fn frequencies(&self) -> FastMap<T, usize> {
        self.reduce(FastMap::default(), |mut counts, item| {
            *counts.entry(item).or_insert(0) += 1;
            counts
        })
    }
}

impl<K: Eq + Hash + 'static, V: 'static> Seq<(K, V)> {
    /// Collects key/value pairs into a map; the last pair for a key wins.
    pub fn pairs_map(&self) -> FastMap<K, V> {
        self.collect()
    }
}

impl<K: Clone + 'static, V: Clone + 'static> Seq<(K, V)> {
    /// Creates a sequence of the key/value pairs of `map`.
    ///
    /// The pairs are copied when the sequence is created and replayed in the
    /// map's iteration order, which is unspecified. This is the inverse of
    /// [`Seq::pairs_map`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ranger::{Seq, seq};
    ///
    /// let totals = seq![("a", 1), ("b", 2), ("a", 3)].pairs_map();
    /// let pairs = Seq::from_map(&totals);
    ///
    /// assert_eq!(pairs.count(), 2);
    /// assert_eq!(pairs.map(|(_, total)| total).sum(), 5);
    /// ```
    pub fn from_map<S>(map: &HashMap<K, V, S>) -> Self {
        map.iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn windows(items: Vec<i32>, length: usize, stride: usize) -> Vec<Vec<i32>> {
        Seq::from_vec(items)
            .partition(length, stride)
            .map(|window| window.to_vec())
            .to_vec()
    }

    #[test]
    fn test_windows_hop_over_gap() {
        assert_eq!(
            windows((1..=10).collect(), 2, 4),
            vec![vec![1, 2], vec![5, 6], vec![9, 10]]
        );
    }

    #[test]
    fn test_windows_drop_short_tail() {
        assert_eq!(
            windows(vec![1, 2, 3, 4, 5], 2, 2),
            vec![vec![1, 2], vec![3, 4]]
        );
    }

    #[test]
    fn test_windows_zero_length_or_stride() {
        assert!(windows(vec![1, 2, 3], 0, 1).is_empty());
        assert!(windows(vec![1, 2, 3], 1, 0).is_empty());
    }

    #[test]
    fn test_windows_shorter_than_length() {
        assert!(windows(vec![1, 2], 3, 1).is_empty());
    }
}
