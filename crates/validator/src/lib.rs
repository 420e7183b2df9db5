//! Verification routines guarding exits from a Plasma rootchain.
//!
//! The rootchain calls into this crate to decide whether an exit may proceed:
//!
//! - [`check_membership`] proves a transaction leaf is included under a block root.
//! - [`recover`] recovers the signer of a 65-byte ECDSA signature.
//! - [`check_sigs`] checks that each input owner signed both the transaction and its
//!   confirmation.
//!
//! Every routine separates input that is not shaped correctly, returned as
//! [`ValidatorError`], from well-formed input that fails verification, returned as
//! `Ok(false)`. The free functions use the default [`ValidatorConfig`]; build a
//! [`Validator`] to change it.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![warn(missing_docs)]

use alloy_primitives::B256;

pub mod config;
pub mod error;
pub mod exit;
pub mod merkle;
pub mod signature;
mod validator;

pub use config::{UnusedSlotPolicy, ValidatorConfig};
pub use error::{Result, ValidatorError};
pub use exit::ExitSigners;
pub use merkle::{MerkleProof, MerkleTree};
pub use signature::{recover, SignatureError, SignatureSet, NULL_ADDRESS};
pub use validator::Validator;

/// Check that `leaf` sits at `index` under `root`. See [`Validator::check_membership`].
pub fn check_membership(leaf: B256, index: u64, root: B256, proof: &[u8]) -> Result<bool> {
    Validator::default().check_membership(leaf, index, root, proof)
}

/// Check that the signatures authorize an exit. See [`Validator::check_sigs`].
pub fn check_sigs(
    tx_hash: &B256,
    confirmation_hash: &B256,
    has_second_input: bool,
    tx_signatures: &[u8],
    confirm_signatures: &[u8],
) -> Result<bool> {
    Validator::default().check_sigs(
        tx_hash,
        confirmation_hash,
        has_second_input,
        tx_signatures,
        confirm_signatures,
    )
}
