//! Source constructors: sequences that do not derive from another sequence.
//!
//! - [`range`], [`range_step`]: bounded arithmetic progressions
//! - [`range_open`]: an unbounded arithmetic progression
//! - [`repeat`], [`repeat_n`]: constant streams
//! - [`repeatedly`]: a stream of producer results
//! - [`iterate`]: `seed, f(seed), f(f(seed)), ...`
//! - [`nest`]: a sequence of sequences from nested vectors
//!
//! Collections are wrapped with [`Seq::from_vec`], [`Seq::from_slice`],
//! [`Seq::from_iterable`] or the [`seq!`](crate::seq) macro.
//!
//! Every unbounded source here produces its next element only when it is
//! pulled, so bounding it downstream (`take`, `take_while`) is enough to make
//! a pipeline terminate.

use std::cell::RefCell;
use std::rc::Rc;

use super::Seq;
use crate::numeric::Numeric;

/// Advances towards `stop` and ends on exact equality.
///
/// Integer steps wrap around at the bounds of the type, so a step that
/// overshoots `stop` keeps cycling through the type's values until it lands
/// on `stop`.
struct Progression<N> {
    current: N,
    stop: Option<N>,
    step: N,
    descending: bool,
    started: bool,
    finished: bool,
}

impl<N: Numeric> Progression<N> {
    const fn new(start: N, stop: Option<N>, step: N, descending: bool) -> Self {
        Self {
            current: start,
            stop,
            step,
            descending,
            started: false,
            finished: false,
        }
    }
}

impl<N: Numeric> Iterator for Progression<N> {
    type Item = N;

    fn next(&mut self) -> Option<N> {
        if self.finished {
            return None;
        }
        if self.started {
            self.current = if self.descending {
                self.current.step_down(self.step)
            } else {
                self.current.step_up(self.step)
            };
        }
        self.started = true;
        if self.stop == Some(self.current) {
            self.finished = true;
            return None;
        }
        Some(self.current)
    }
}

/// Returns the progression from `start` up to (or down to) `stop`, exclusive.
///
/// Counts upward by one when `start < stop` and downward by one otherwise.
///
/// # Examples
///
/// ```rust
/// use ranger::range;
///
/// assert_eq!(range(1, 5).to_vec(), vec![1, 2, 3, 4]);
/// assert_eq!(range(4, 0).to_vec(), vec![4, 3, 2, 1]);
/// assert_eq!(range(3_u8, 0).to_vec(), vec![3, 2, 1]);
/// assert!(range(7, 7).is_empty());
/// ```
pub fn range<N: Numeric>(start: N, stop: N) -> Seq<N> {
    let descending = stop < start;
    Seq::new(move || Progression::new(start, Some(stop), N::ONE, descending))
}

/// Returns the progression `start, start + step, ...` that ends when a value
/// equals `stop` exactly.
///
/// The stop test is equality, not "reached or passed". Integer steps wrap
/// around at the bounds of the type, so a step that jumps over `stop` keeps
/// going past the maximum and back from the minimum until a value equals
/// `stop`; it never ends if no such value exists (including every float
/// overshoot). Pass a negative `step` to count downward.
///
/// # Examples
///
/// ```rust
/// use ranger::range_step;
///
/// assert_eq!(range_step(0, 10, 2).to_vec(), vec![0, 2, 4, 6, 8]);
/// assert_eq!(range_step(9, 0, -3).to_vec(), vec![9, 6, 3]);
/// assert_eq!(range_step(0, 9, 2).take(6).to_vec(), vec![0, 2, 4, 6, 8, 10]);
/// assert_eq!(range_step(0_u8, 10, 3).count(), 174);
/// ```
pub fn range_step<N: Numeric>(start: N, stop: N, step: N) -> Seq<N> {
    Seq::new(move || Progression::new(start, Some(stop), step, false))
}

/// Returns the unbounded progression `start, start + step, start + 2*step, ...`.
///
/// Integer progressions wrap around at the bounds of the type.
///
/// # Examples
///
/// ```rust
/// use ranger::range_open;
///
/// assert_eq!(range_open(10, 5).take(3).to_vec(), vec![10, 15, 20]);
/// assert_eq!(range_open(0, -1).take(3).to_vec(), vec![0, -1, -2]);
/// assert_eq!(range_open(254_u8, 1).take(4).to_vec(), vec![254, 255, 0, 1]);
/// ```
pub fn range_open<N: Numeric>(start: N, step: N) -> Seq<N> {
    Seq::new(move || Progression::new(start, None, step, false))
}

/// Returns an unbounded sequence of `value`.
///
/// # Examples
///
/// ```rust
/// use ranger::repeat;
///
/// assert_eq!(repeat(3).take(5).to_vec(), vec![3, 3, 3, 3, 3]);
/// ```
pub fn repeat<T: Clone + 'static>(value: T) -> Seq<T> {
    Seq::new(move || std::iter::repeat(value.clone()))
}

/// Returns a sequence of `count` copies of `value`.
pub fn repeat_n<T: Clone + 'static>(count: usize, value: T) -> Seq<T> {
    repeat(value).take(count)
}

/// Returns an unbounded sequence of `producer` results.
///
/// `producer` is called exactly once per element pulled, at the moment it is
/// pulled. Its state is shared by every consumption of the sequence, so a
/// stateful producer makes the sequence non-replayable.
///
/// # Examples
///
/// ```rust
/// use ranger::repeatedly;
///
/// let mut next = 0;
/// let counter = repeatedly(move || {
///     next += 1;
///     next
/// });
/// assert_eq!(counter.take(3).to_vec(), vec![1, 2, 3]);
/// assert_eq!(counter.take(2).to_vec(), vec![4, 5]);
/// ```
pub fn repeatedly<T, F>(producer: F) -> Seq<T>
where
    T: 'static,
    F: FnMut() -> T + 'static,
{
    let producer = Rc::new(RefCell::new(producer));
    Seq::new(move || {
        let producer = Rc::clone(&producer);
        std::iter::repeat_with(move || (*producer.borrow_mut())())
    })
}

struct Iterate<T, F> {
    step: Rc<F>,
    seed: Option<T>,
    previous: Option<T>,
}

impl<T: Clone, F: Fn(T) -> T> Iterator for Iterate<T, F> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let value = match self.seed.take() {
            Some(seed) => seed,
            None => (self.step)(self.previous.take()?),
        };
        self.previous = Some(value.clone());
        Some(value)
    }
}

/// Returns the unbounded sequence `seed, step(seed), step(step(seed)), ...`.
///
/// `step` is applied only when the next element is pulled.
///
/// # Examples
///
/// ```rust
/// use ranger::iterate;
///
/// assert_eq!(iterate(|n| n * 2, 1).take(5).to_vec(), vec![1, 2, 4, 8, 16]);
/// ```
pub fn iterate<T, F>(step: F, seed: T) -> Seq<T>
where
    T: Clone + 'static,
    F: Fn(T) -> T + 'static,
{
    let step = Rc::new(step);
    Seq::new(move || Iterate {
        step: Rc::clone(&step),
        seed: Some(seed.clone()),
        previous: None,
    })
}

/// Returns a sequence of row sequences built from nested vectors.
///
/// # Examples
///
/// ```rust
/// use ranger::nest;
///
/// let matrix = nest(vec![vec![1, 2], vec![3]]);
/// assert_eq!(matrix.count(), 2);
/// assert_eq!(matrix.flatten().to_vec(), vec![1, 2, 3]);
/// ```
pub fn nest<T: Clone + 'static>(rows: Vec<Vec<T>>) -> Seq<Seq<T>> {
    rows.into_iter().map(Seq::from_vec).collect()
}
