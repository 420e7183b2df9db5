//! Error types for the primitives crate.

use thiserror::Error;

/// Result type for primitive operations
pub type Result<T> = std::result::Result<T, PrimitivesError>;

/// Errors raised by the byte helpers
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitivesError {
    /// Requested range does not fit inside the input
    #[error("out of bounds: {length} bytes at offset {offset} exceeds input of {available} bytes")]
    OutOfBounds {
        /// Start of the requested range
        offset: usize,
        /// Length of the requested range
        length: usize,
        /// Length of the input
        available: usize,
    },
}
