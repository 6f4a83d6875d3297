//! Element-wise combinators: transformations that look at one element at a
//! time and keep no positional state.

use std::rc::Rc;

use super::{Cursor, Seq};

/// Returns the logical negation of `predicate`.
///
/// # Examples
///
/// ```rust
/// use ranger::complement;
/// use ranger::numeric::is_even;
///
/// let is_not_even = complement(is_even::<i32>);
/// assert!(is_not_even(&3));
/// assert!(!is_not_even(&4));
/// ```
pub fn complement<T, P>(predicate: P) -> impl Fn(&T) -> bool
where
    P: Fn(&T) -> bool,
{
    move |item: &T| !predicate(item)
}

struct Reductions<T, A, F> {
    cursor: Cursor<T>,
    accumulator: Option<A>,
    combine: Rc<F>,
}

impl<T, A, F> Iterator for Reductions<T, A, F>
where
    A: Clone,
    F: Fn(A, T) -> A,
{
    type Item = A;

    fn next(&mut self) -> Option<A> {
        let item = self.cursor.next()?;
        let accumulator = (self.combine)(self.accumulator.take()?, item);
        self.accumulator = Some(accumulator.clone());
        Some(accumulator)
    }
}

impl<T: 'static> Seq<T> {
    /// Returns a sequence of `transform` applied to every element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ranger::seq;
    ///
    /// let upper = seq!['a', 's', 'd', 'f'].map(|c| c.to_ascii_uppercase());
    /// assert_eq!(upper.collect::<String>(), "ASDF");
    /// ```
    pub fn map<U, F>(&self, transform: F) -> Seq<U>
    where
        U: 'static,
        F: Fn(T) -> U + 'static,
    {
        let transform = Rc::new(transform);
        self.derive(move |cursor| {
            let transform = Rc::clone(&transform);
            cursor.map(move |item| transform(item))
        })
    }

    /// Returns the elements for which `predicate` holds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ranger::range;
    /// use ranger::numeric::is_even;
    ///
    /// assert_eq!(range(0, 10).filter(is_even).take(4).to_vec(), vec![0, 2, 4, 6]);
    /// ```
    pub fn filter<P>(&self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + 'static,
    {
        let predicate = Rc::new(predicate);
        self.derive(move |cursor| {
            let predicate = Rc::clone(&predicate);
            cursor.filter(move |item| predicate(item))
        })
    }

    /// Returns the elements for which `predicate` does not hold.
    ///
    /// Equivalent to `filter(complement(predicate))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ranger::range;
    /// use ranger::numeric::is_even;
    ///
    /// assert_eq!(range(0, 10).remove(is_even).take(4).to_vec(), vec![1, 3, 5, 7]);
    /// ```
    pub fn remove<P>(&self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + 'static,
    {
        self.filter(complement(predicate))
    }

    /// Folds the sequence from the left, starting with `initial`.
    ///
    /// Returns `initial` unchanged for an empty sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ranger::range;
    ///
    /// assert_eq!(range(1, 6).reduce(0, |total, n| total + n), 15);
    /// assert_eq!(range(0, 0).reduce(7, |total, n| total + n), 7);
    /// ```
    pub fn reduce<A, F>(&self, initial: A, combine: F) -> A
    where
        F: FnMut(A, T) -> A,
    {
        self.cursor().fold(initial, combine)
    }

    /// Returns the running fold: every intermediate accumulator, one per
    /// element.
    ///
    /// The last element of `reductions(initial, f)` equals
    /// `reduce(initial, f)` for a non-empty sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ranger::range;
    ///
    /// let running = range(1, 6).reductions(0, |total, n| total + n);
    /// assert_eq!(running.to_vec(), vec![1, 3, 6, 10, 15]);
    /// ```
    pub fn reductions<A, F>(&self, initial: A, combine: F) -> Seq<A>
    where
        A: Clone + 'static,
        F: Fn(A, T) -> A + 'static,
    {
        let combine = Rc::new(combine);
        self.derive(move |cursor| Reductions {
            cursor,
            accumulator: Some(initial.clone()),
            combine: Rc::clone(&combine),
        })
    }

    /// Traverses the whole sequence, calling `effect` on every element.
    ///
    /// Never returns on an infinite sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ranger::range;
    ///
    /// let mut seen = Vec::new();
    /// range(1, 4).do_all(|n| seen.push(n));
    /// assert_eq!(seen, vec![1, 2, 3]);
    /// ```
    pub fn do_all<F>(&self, effect: F)
    where
        F: FnMut(T),
    {
        self.cursor().for_each(effect);
    }
}
