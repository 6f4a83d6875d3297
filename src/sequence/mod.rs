//! Lazy, replayable sequences and their combinators.
//!
//! This module provides:
//!
//! - [`Seq`]: a description of how to produce a stream of values
//! - [`Cursor`]: a single pull-based traversal of a `Seq`
//! - [`SeqError`]: the failure type of positional and aggregate operations
//! - source constructors such as [`range`], [`repeat`] and [`iterate`]
//!
//! Combinators are methods on [`Seq`] and always return a new sequence
//! without evaluating anything; terminal operations (`to_vec`, `sum`,
//! `first`, `each`, ...) drive the pipeline.
//!
//! # Examples
//!
//! ## Threading a pipeline
//!
//! ```rust
//! use ranger::numeric::{is_even, square};
//! use ranger::range_open;
//!
//! let total = range_open(1, 1)
//!     .map(square)
//!     .filter(is_even)
//!     .take_while(|n| *n < 1000)
//!     .sum();
//! assert_eq!(total, 4_960);
//! ```
//!
//! ## Windows over a replayed source
//!
//! ```rust
//! use ranger::seq;
//!
//! let readings = seq![3, 5, 4, 8, 9, 7];
//! let rising = readings
//!     .partition(2, 1)
//!     .filter(|pair| pair.first_or(0) < pair.last_or(0))
//!     .count();
//! assert_eq!(rising, 3);
//! ```

mod aggregate;
mod combine;
mod cursor;
mod element;
mod error;
mod positional;
mod ring;
mod seq;
mod source;

pub use aggregate::{FastBuildHasher, FastMap};
pub use combine::concat;
pub use cursor::Cursor;
pub use element::complement;
pub use error::{Result, SeqError};
pub use seq::Seq;
pub use source::{iterate, nest, range, range_open, range_step, repeat, repeat_n, repeatedly};
