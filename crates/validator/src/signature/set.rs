//! Concatenated signature sets, one 65-byte slot per transaction input.

use plasma_primitives::{
    constants::{MAX_SIGNATURES, SIGNATURE_SET_SIZE, SIGNATURE_SIZE, ZERO_SIGNATURE},
    slice,
};

use crate::error::{Result, ValidatorError};

/// A borrowed view over a signature set of zero, one or two signatures.
///
/// Slots beyond the supplied signatures read as the all-zero sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignatureSet<'a> {
    bytes: &'a [u8],
}

impl<'a> SignatureSet<'a> {
    /// Parse a set of 0, 65 or 130 bytes. Any other length is rejected, never truncated.
    pub fn parse(bytes: &'a [u8]) -> Result<Self> {
        if bytes.len() % SIGNATURE_SIZE != 0 || bytes.len() > SIGNATURE_SET_SIZE {
            return Err(ValidatorError::MalformedSignatureSet {
                expected: SIGNATURE_SET_SIZE,
                actual: bytes.len(),
            });
        }
        Ok(Self { bytes })
    }

    /// Parse a set that must hold exactly `slots` signatures.
    pub fn parse_exact(bytes: &'a [u8], slots: usize) -> Result<Self> {
        let expected = slots.saturating_mul(SIGNATURE_SIZE);
        if slots > MAX_SIGNATURES || bytes.len() != expected {
            return Err(ValidatorError::MalformedSignatureSet {
                expected,
                actual: bytes.len(),
            });
        }
        Ok(Self { bytes })
    }

    /// Number of signatures actually supplied.
    pub fn len(&self) -> usize {
        self.bytes.len() / SIGNATURE_SIZE
    }

    /// Whether the set holds no signatures.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Raw bytes of the set.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Signature in `slot`, or the zero sentinel if the set is shorter.
    pub fn slot(&self, slot: usize) -> Result<&'a [u8]> {
        if slot >= MAX_SIGNATURES {
            return Err(ValidatorError::MalformedSignatureSet {
                expected: SIGNATURE_SET_SIZE,
                actual: slot.saturating_add(1).saturating_mul(SIGNATURE_SIZE),
            });
        }
        if slot >= self.len() {
            return Ok(&ZERO_SIGNATURE);
        }
        Ok(slice(self.bytes, slot * SIGNATURE_SIZE, SIGNATURE_SIZE)?)
    }
}
