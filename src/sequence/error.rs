//! Error types for terminal sequence operations.
//!
//! Positional and extremum lookups (`first`, `last`, `nth`, `min`, `max`,
//! `rand_nth`) fail with [`SeqError`] when the sequence cannot satisfy the
//! request. Callers that prefer a fallback value use the `*_or` variants
//! instead.

/// Represents a failed terminal operation on a [`Seq`](super::Seq).
///
/// # Examples
///
/// ```rust
/// use ranger::{Seq, SeqError};
///
/// let empty: Seq<i32> = Seq::empty();
/// assert_eq!(empty.first(), Err(SeqError::Empty { operation: "first" }));
/// assert_eq!(
///     format!("{}", SeqError::Empty { operation: "max" }),
///     "max: sequence is empty"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeqError {
    /// The operation needs at least one element but the sequence had none.
    #[error("{operation}: sequence is empty")]
    Empty {
        /// The name of the operation that failed.
        operation: &'static str,
    },
    /// The requested position lies past the end of the sequence.
    #[error("{operation}: index {index} out of range for length {length}")]
    IndexOutOfRange {
        /// The name of the operation that failed.
        operation: &'static str,
        /// The requested (0-based) index.
        index: usize,
        /// The number of elements the sequence actually produced.
        length: usize,
    },
}

impl SeqError {
    pub(crate) fn empty(operation: &'static str) -> Self {
        let error = Self::Empty { operation };
        tracing::debug!(%error, "terminal operation on empty sequence");
        error
    }

    pub(crate) fn index_out_of_range(operation: &'static str, index: usize, length: usize) -> Self {
        let error = Self::IndexOutOfRange {
            operation,
            index,
            length,
        };
        tracing::debug!(%error, "positional lookup past the end of sequence");
        error
    }
}

/// A specialized `Result` for terminal sequence operations.
pub type Result<T> = std::result::Result<T, SeqError>;
