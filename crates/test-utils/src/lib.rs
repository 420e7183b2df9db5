//! Test utilities for plasma validator crates.
//!
//! Provides deterministic signers, signing helpers that produce raw 65-byte signatures,
//! builders for the two-slot signature sets exits carry, and sample tree leaves.

#![allow(clippy::expect_used)]

use alloy_primitives::{keccak256, B256};
use alloy_signer::SignerSync;
use alloy_signer_local::PrivateKeySigner;
use plasma_primitives::constants::{SIGNATURE_SIZE, ZERO_SIGNATURE};

/// A raw `r || s || v` signature.
pub type RawSignature = [u8; SIGNATURE_SIZE];

/// Deterministic signer derived from `label`.
///
/// The same label always yields the same key, so failures reproduce.
pub fn signer(label: &str) -> PrivateKeySigner {
    let key = keccak256(format!("plasma-test-signer:{label}"));
    PrivateKeySigner::from_bytes(&key).expect("keccak output is a valid secp256k1 scalar")
}

/// Sign `hash` directly, without any message prefix.
pub fn sign(signer: &PrivateKeySigner, hash: &B256) -> RawSignature {
    signer
        .sign_hash_sync(hash)
        .expect("local signing does not fail")
        .as_bytes()
}

/// Two-slot signature set with the given signatures.
pub fn signature_set(first: &RawSignature, second: &RawSignature) -> Vec<u8> {
    [first.as_slice(), second.as_slice()].concat()
}

/// Two-slot signature set for a single-input transaction: `first || zero`.
pub fn single_input_set(first: &RawSignature) -> Vec<u8> {
    signature_set(first, &ZERO_SIGNATURE)
}

/// Transaction and confirmation signature sets for an exit signed by `owners`.
///
/// One owner produces a single-input exit, two owners a two-input exit.
pub fn exit_signatures(
    owners: &[&PrivateKeySigner],
    tx_hash: &B256,
    confirmation_hash: &B256,
) -> (Vec<u8>, Vec<u8>) {
    let slot = |i: usize, hash: &B256| {
        owners
            .get(i)
            .map_or(ZERO_SIGNATURE, |owner| sign(owner, hash))
    };

    (
        signature_set(&slot(0, tx_hash), &slot(1, tx_hash)),
        signature_set(&slot(0, confirmation_hash), &slot(1, confirmation_hash)),
    )
}

/// Hash of a label, for readable fixture values.
pub fn hash_of(label: &str) -> B256 {
    keccak256(label)
}

/// `count` distinct leaves `keccak256("leaf-<i>")`.
pub fn sample_leaves(count: usize) -> Vec<B256> {
    (0..count).map(|i| hash_of(&format!("leaf-{i}"))).collect()
}
