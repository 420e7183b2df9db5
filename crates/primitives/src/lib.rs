//! Core primitives for the Plasma rootchain validator.
//!
//! This crate provides the fixed-size values, constants and byte helpers that the
//! verification routines in `plasma-validator` are built on. Hash and address types
//! come straight from `alloy_primitives`.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![warn(missing_docs)]

pub use alloy_primitives::{Address, B256, Bytes};

pub mod error;
pub mod hashing;
pub mod slice;
pub mod zero_hashes;

pub use error::{PrimitivesError, Result};
pub use hashing::{confirmation_hash, hash_pair, transaction_leaf};
pub use slice::{slice, slice_array};
pub use zero_hashes::{zero_hash, ZERO_HASHES};

/// Constants used throughout the validator.
pub mod constants {
    /// Size of a hash (leaf, root, proof node) in bytes.
    pub const HASH_SIZE: usize = 32;

    /// Size of a recovered signer address in bytes.
    pub const ADDRESS_SIZE: usize = 20;

    /// Size of an `r || s || v` ECDSA signature in bytes.
    pub const SIGNATURE_SIZE: usize = 65;

    /// Maximum number of signatures in a signature set (one per transaction input).
    pub const MAX_SIGNATURES: usize = 2;

    /// Size of a full two-slot signature set.
    pub const SIGNATURE_SET_SIZE: usize = MAX_SIGNATURES * SIGNATURE_SIZE;

    /// Depth of the transaction tree committed by each rootchain block.
    pub const BLOCK_TREE_DEPTH: usize = 16;

    /// Deepest tree a proof may describe. Bounded by the width of a leaf index.
    pub const MAX_TREE_DEPTH: usize = 64;

    /// The all-zero signature standing in for an absent input.
    pub const ZERO_SIGNATURE: [u8; SIGNATURE_SIZE] = [0u8; SIGNATURE_SIZE];
}
