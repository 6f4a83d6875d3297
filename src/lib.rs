//! # ranger
//!
//! Lazy, replayable sequences for Rust with a Clojure-flavoured combinator
//! vocabulary.
//!
//! ## Overview
//!
//! A [`Seq<T>`] describes how to produce a stream of values without
//! producing any of them. Combinators derive new sequences from old ones,
//! and nothing is evaluated until a terminal operation pulls elements
//! through the pipeline. Every consumption replays the description from the
//! start, so a sequence can be shared, cloned and consumed repeatedly.
//!
//! - **Sources**: [`range`], [`range_step`], [`range_open`], [`repeat`],
//!   [`repeat_n`], [`repeatedly`], [`iterate`], [`nest`], [`seq!`]
//! - **Element-wise**: `map`, `filter`, `remove`, `reduce`, `reductions`,
//!   `do_all`
//! - **Positional**: `take`, `drop`, `take_while`, `drop_while`,
//!   `take_last`, `drop_last`, `first`, `last`, `nth`, `rest`, `rand_nth`
//! - **Combining**: [`concat`], `chain`, `zip`, `interleave`, `map2`,
//!   `cycle`, `interpose`, `flatten`, `zip_map`
//! - **Aggregation**: `sum`, `product`, `min`, `max`, `count`, `is_empty`,
//!   `frequencies`, `group_by`, `index_by`, `pairs_map`, `partition`
//!
//! ## Feature Flags
//!
//! - `random` (default): `Seq::rand_nth` and `Seq::rand_nth_with`
//! - `fxhash`: use `rustc-hash` for the maps returned by keyed aggregations
//! - `ahash`: use `ahash` for those maps (ignored when `fxhash` is enabled)
//!
//! ## Example
//!
//! ```rust
//! use ranger::prelude::*;
//!
//! let score = range(0, 15)
//!     .map(|n| n * 3)
//!     .remove(is_odd)
//!     .interpose(1)
//!     .take_while(|n| *n < 30)
//!     .sum();
//! assert_eq!(score, 65);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the sequence type, its constructors and the numeric helpers.
///
/// # Usage
///
/// ```rust
/// use ranger::prelude::*;
///
/// assert_eq!(range(1, 4).map(square).sum(), 14);
/// ```
pub mod prelude {
    pub use crate::numeric::*;
    pub use crate::seq;
    pub use crate::sequence::{
        Cursor, FastMap, Seq, SeqError, complement, concat, iterate, nest, range, range_open,
        range_step, repeat, repeat_n, repeatedly,
    };
}

pub mod numeric;
pub mod sequence;

pub use sequence::{
    Cursor, FastBuildHasher, FastMap, Seq, SeqError, complement, concat, iterate, nest, range,
    range_open, range_step, repeat, repeat_n, repeatedly,
};
