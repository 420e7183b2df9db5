//! Error types for the validator.
//!
//! Every variant describes input that is not shaped like the thing it claims to be.
//! Well-formed input that simply fails verification is reported as `Ok(false)` by
//! the checking functions and never surfaces here.

use plasma_primitives::PrimitivesError;
use thiserror::Error;

use crate::signature::SignatureError;

/// Result type for validator operations
pub type Result<T> = std::result::Result<T, ValidatorError>;

/// Structural failures raised before any hashing or signature recovery
#[derive(Error, Debug)]
pub enum ValidatorError {
    /// A byte range could not be extracted
    #[error(transparent)]
    Slice(#[from] PrimitivesError),

    /// Proof length is not a whole number of 32-byte nodes
    #[error("malformed proof: {length} bytes is not a multiple of 32")]
    MalformedProof {
        /// Length of the rejected proof
        length: usize,
    },

    /// Proof or tree is deeper than permitted
    #[error("proof depth {depth} exceeds maximum of {max}")]
    ProofTooDeep {
        /// Depth described by the input
        depth: usize,
        /// Configured maximum
        max: usize,
    },

    /// Signature set length does not match the expected number of 65-byte slots
    #[error("malformed signature set: expected {expected} bytes, got {actual}")]
    MalformedSignatureSet {
        /// Required length in bytes
        expected: usize,
        /// Length supplied
        actual: usize,
    },

    /// A single signature could not be decoded or recovered
    #[error("invalid signature: {0}")]
    InvalidSignature(#[from] SignatureError),

    /// More leaves than a tree of the requested depth can hold
    #[error("tree of depth {depth} cannot hold {leaves} leaves")]
    TreeFull {
        /// Tree depth
        depth: usize,
        /// Number of leaves supplied
        leaves: usize,
    },

    /// Leaf index outside the tree
    #[error("leaf index {index} is outside a tree of depth {depth}")]
    IndexOutOfRange {
        /// Requested index
        index: u64,
        /// Tree depth
        depth: usize,
    },

    /// Configuration could not be parsed
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}
