//! Errors returned by the fallible operations in this crate.
//!
//! Most queries in this crate are deliberately lenient: asking a graph about a vertex it has
//! never seen yields an empty answer and an empty heap yields `None`. Only the operations that
//! have no sensible "absent" answer fail.

use thiserror::Error;

/// All errors that can occur in this crate.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An extremum was requested from a structure with no elements.
    #[error("cannot {operation} on an empty structure")]
    EmptyStructure {
        /// The operation that was attempted, e.g. `"find_min"`.
        operation: &'static str,
    },

    /// A fixed-capacity structure has no room for another vertex.
    #[error("vertex capacity of {capacity} exceeded")]
    CapacityExceeded {
        /// The fixed number of vertices the structure was built with.
        capacity: usize,
    },
}

/// Result type alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;
