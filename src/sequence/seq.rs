//! The lazy, replayable sequence type.
//!
//! A [`Seq<T>`] is a suspended computation that produces elements of type `T`
//! on demand. Building a sequence, or deriving a new one with a combinator,
//! never touches the underlying data; only a terminal operation does.
//!
//! Every consumption starts from scratch: a `Seq` describes *how* to produce
//! its elements, not *where* a traversal currently is. Traversal state lives
//! in the [`Cursor`] opened for that consumption and dies with it.
//!
//! # Consumption protocols
//!
//! - **Push**: [`Seq::each`] drives a consumer callback until the sequence
//!   ends or the callback returns `false`.
//! - **Pull**: [`Seq::cursor`] opens a [`Cursor`] that hands out one element
//!   per call to `next`.
//!
//! # Examples
//!
//! ```rust
//! use ranger::range;
//!
//! let squares = range(1, 6).map(|n| n * n);
//!
//! // Nothing has been computed yet; each terminal call replays the pipeline.
//! assert_eq!(squares.to_vec(), vec![1, 4, 9, 16, 25]);
//! assert_eq!(squares.sum(), 55);
//!
//! let mut seen = Vec::new();
//! let delivered = squares.each(|n| {
//!     seen.push(n);
//!     n < 9
//! });
//! assert_eq!(seen, vec![1, 4, 9]);
//! assert_eq!(delivered, 3);
//! ```

use std::fmt;
use std::ops::ControlFlow;
use std::rc::Rc;

use super::cursor::Cursor;

type Factory<T> = dyn Fn() -> Box<dyn Iterator<Item = T>>;

/// A lazily evaluated, replayable sequence of values.
///
/// Cloning a `Seq` is O(1): clones share the same description and each one
/// can be consumed any number of times.
///
/// # Replayability
///
/// A sequence built from data (a `Vec`, a range, a constant) yields the same
/// elements on every consumption. A sequence built from a stateful producer
/// ([`repeatedly`](super::repeatedly) over a random source, for instance)
/// continues that producer's state instead; combinators that consume their
/// upstream more than once (`drop_last`, `partition` on such a source,
/// `rand_nth`) will then observe different values on each pass.
///
/// # Infinite sequences
///
/// `range_open`, `repeat`, `repeatedly`, `iterate` and `cycle` never end on
/// their own. Operations that need the whole sequence (`count`, `last`,
/// `take_last`, `sum`, `to_vec`, ...) never return on them; bound them first
/// with [`take`](Seq::take) or [`take_while`](Seq::take_while).
pub struct Seq<T> {
    factory: Rc<Factory<T>>,
}

impl<T: 'static> Seq<T> {
    /// Creates a sequence from a replayable iterator factory.
    ///
    /// `factory` is called once per consumption and must return a fresh
    /// iterator positioned at the first element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ranger::Seq;
    ///
    /// let letters = Seq::new(|| "abc".chars());
    /// assert_eq!(letters.to_vec(), vec!['a', 'b', 'c']);
    /// assert_eq!(letters.count(), 3);
    /// ```
    pub fn new<F, I>(factory: F) -> Self
    where
        F: Fn() -> I + 'static,
        I: IntoIterator<Item = T>,
        I::IntoIter: 'static,
    {
        Self {
            factory: Rc::new(move || -> Box<dyn Iterator<Item = T>> {
                Box::new(factory().into_iter())
            }),
        }
    }

    /// Creates a sequence with no elements.
    pub fn empty() -> Self {
        Self::new(std::iter::empty)
    }

    /// Opens a pull-cursor positioned at the first element.
    ///
    /// The cursor is independent of any other cursor on this sequence.
    pub fn cursor(&self) -> Cursor<T> {
        Cursor::open((self.factory)())
    }

    /// Pushes every element to `consumer` in order, stopping the first time
    /// it returns `false`.
    ///
    /// Returns the number of elements handed to `consumer`, including the
    /// one that stopped the traversal.
    pub fn each<F>(&self, mut consumer: F) -> usize
    where
        F: FnMut(T) -> bool,
    {
        let mut cursor = self.cursor();
        for item in cursor.by_ref() {
            if !consumer(item) {
                break;
            }
        }
        cursor.position()
    }

    /// Pushes elements to `consumer` until it breaks, returning the break
    /// value, or `None` if the sequence ended first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::ops::ControlFlow;
    /// use ranger::range_open;
    ///
    /// let first_square_over_50 = range_open(1, 1).try_each(|n| {
    ///     if n * n > 50 { ControlFlow::Break(n) } else { ControlFlow::Continue(()) }
    /// });
    /// assert_eq!(first_square_over_50, Some(8));
    /// ```
    pub fn try_each<B, F>(&self, mut consumer: F) -> Option<B>
    where
        F: FnMut(T) -> ControlFlow<B>,
    {
        for item in self.cursor() {
            if let ControlFlow::Break(value) = consumer(item) {
                return Some(value);
            }
        }
        None
    }

    /// Materializes the sequence into a `Vec`, preserving order.
    pub fn to_vec(&self) -> Vec<T> {
        self.cursor().collect()
    }

    /// Materializes the sequence into any collection, preserving emitted
    /// order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::collections::BTreeSet;
    /// use ranger::seq;
    ///
    /// let set: BTreeSet<i32> = seq![3, 1, 2, 1].collect();
    /// assert_eq!(set.into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    /// ```
    pub fn collect<C>(&self) -> C
    where
        C: FromIterator<T>,
    {
        self.cursor().collect()
    }

    /// Builds a derived sequence by adapting a cursor over this one.
    ///
    /// `adapt` runs once per consumption of the derived sequence.
    pub(crate) fn derive<U, F, I>(&self, adapt: F) -> Seq<U>
    where
        U: 'static,
        F: Fn(Cursor<T>) -> I + 'static,
        I: Iterator<Item = U> + 'static,
    {
        let upstream = self.clone();
        Seq::new(move || adapt(upstream.cursor()))
    }
}

impl<T: Clone + 'static> Seq<T> {
    /// Creates a sequence that replays a snapshot of `items`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ranger::Seq;
    ///
    /// let numbers = Seq::from_vec(vec![1, 2, 3]);
    /// assert_eq!(numbers.take(2).to_vec(), vec![1, 2]);
    /// assert_eq!(numbers.to_vec(), vec![1, 2, 3]);
    /// ```
    pub fn from_vec(items: Vec<T>) -> Self {
        Self::from_shared(items.into())
    }

    /// Creates a sequence that replays a copy of `items`.
    pub fn from_slice(items: &[T]) -> Self {
        Self::from_shared(items.into())
    }

    /// Creates a sequence that replays a cloneable iterable.
    ///
    /// The iterable is cloned for every consumption, so it should be cheap
    /// to clone (a range, an iterator over borrowed `'static` data, ...).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ranger::Seq;
    ///
    /// let evens = Seq::from_iterable((0..10).step_by(2));
    /// assert_eq!(evens.to_vec(), vec![0, 2, 4, 6, 8]);
    /// ```
    pub fn from_iterable<I>(iterable: I) -> Self
    where
        I: IntoIterator<Item = T> + Clone + 'static,
        I::IntoIter: 'static,
    {
        Self::new(move || iterable.clone())
    }

    fn from_shared(items: Rc<[T]>) -> Self {
        Self::new(move || {
            let items = Rc::clone(&items);
            (0..items.len()).map(move |index| items[index].clone())
        })
    }
}

impl<T> Clone for Seq<T> {
    fn clone(&self) -> Self {
        Self {
            factory: Rc::clone(&self.factory),
        }
    }
}

impl<T: 'static> Default for Seq<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> fmt::Debug for Seq<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Seq").finish_non_exhaustive()
    }
}

impl<T: Clone + 'static> From<Vec<T>> for Seq<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_vec(items)
    }
}

impl<T: Clone + 'static> FromIterator<T> for Seq<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iterable: I) -> Self {
        Self::from_shared(iterable.into_iter().collect())
    }
}

impl<T: 'static> IntoIterator for Seq<T> {
    type Item = T;
    type IntoIter = Cursor<T>;

    fn into_iter(self) -> Cursor<T> {
        self.cursor()
    }
}

impl<T: 'static> IntoIterator for &Seq<T> {
    type Item = T;
    type IntoIter = Cursor<T>;

    fn into_iter(self) -> Cursor<T> {
        self.cursor()
    }
}

/// Creates a [`Seq`] from a list of values.
///
/// # Examples
///
/// ```rust
/// use ranger::seq;
///
/// assert_eq!(seq![1, 2, 3].to_vec(), vec![1, 2, 3]);
///
/// let nothing: ranger::Seq<i32> = seq![];
/// assert!(nothing.is_empty());
/// ```
#[macro_export]
macro_rules! seq {
    () => {
        $crate::Seq::empty()
    };
    ($($item:expr),+ $(,)?) => {
        $crate::Seq::from_vec(vec![$($item),+])
    };
}

static_assertions::assert_impl_all!(Seq<i32>: Clone, Default, fmt::Debug);
static_assertions::assert_not_impl_any!(Seq<i32>: Send, Sync);
