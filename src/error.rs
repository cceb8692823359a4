//! Error types for the exonic library.

use thiserror::Error;

/// Errors that can occur during exonic operations.
#[derive(Debug, Error)]
pub enum Error {
    /// An I/O error occurred.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A parse error occurred while reading input data.
    #[error("{0}")]
    Parse(String),

    /// A validation constraint was violated.
    #[error("{0}")]
    Validation(String),

    /// A genomic coordinate fell outside a feature interval's bounds.
    /// Callers validate positions first, or catch this and treat it as
    /// "no annotation here".
    #[error("coordinate {position} outside interval [{start}, {end}]")]
    CoordinateOutOfRange { position: i32, start: i32, end: i32 },
}
