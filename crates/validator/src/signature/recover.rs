//! Signer recovery from `r || s || v` signatures.

use alloy_primitives::{Address, B256, Signature};
use plasma_primitives::constants::{SIGNATURE_SIZE, ZERO_SIGNATURE};
use thiserror::Error;

/// Address recovered from the all-zero sentinel signature.
pub const NULL_ADDRESS: Address = Address::ZERO;

/// Reasons a single signature cannot yield a signer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignatureError {
    /// Signature is not exactly 65 bytes
    #[error("expected {SIGNATURE_SIZE} bytes, got {0}")]
    InvalidLength(usize),

    /// `v` is not one of 0, 1, 27 or 28
    #[error("invalid recovery id {0}")]
    InvalidRecoveryId(u8),

    /// Scalars or curve point do not describe a valid signature
    #[error("recovery failed: {0}")]
    Recovery(String),
}

/// Recover the address that signed `message_hash`.
///
/// `signature` is `r (32) || s (32) || v (1)` with `v` either 27/28 or 0/1. The all-zero
/// signature is the "no signature" sentinel and recovers to [`NULL_ADDRESS`]; no real
/// signature ever does.
pub fn recover(message_hash: &B256, signature: &[u8]) -> Result<Address, SignatureError> {
    let raw: &[u8; SIGNATURE_SIZE] = signature
        .try_into()
        .map_err(|_| SignatureError::InvalidLength(signature.len()))?;

    if is_sentinel(raw) {
        return Ok(NULL_ADDRESS);
    }

    let [.., v] = *raw;
    if !matches!(v, 0 | 1 | 27 | 28) {
        return Err(SignatureError::InvalidRecoveryId(v));
    }

    let sig = Signature::try_from(raw.as_slice())
        .map_err(|e| SignatureError::Recovery(e.to_string()))?;
    let signer = sig
        .recover_address_from_prehash(message_hash)
        .map_err(|e| SignatureError::Recovery(e.to_string()))?;

    if signer == NULL_ADDRESS {
        return Err(SignatureError::Recovery("recovered the null address".into()));
    }

    Ok(signer)
}

/// Whether `signature` is the all-zero "no signature" sentinel.
pub fn is_sentinel(signature: &[u8]) -> bool {
    signature == ZERO_SIGNATURE.as_slice()
}
