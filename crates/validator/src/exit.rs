//! Exit authorization from transaction and confirmation signatures.
//!
//! An exit is authorized when every input owner signed the transaction hash and the
//! same owner later signed the confirmation hash, acknowledging the block the
//! transaction was included in. Both signature sets carry two 65-byte slots; slot `i`
//! belongs to input `i`.

use alloy_primitives::{Address, B256};
use plasma_primitives::constants::MAX_SIGNATURES;
use tracing::{debug, trace};

use crate::{
    config::UnusedSlotPolicy,
    error::Result,
    signature::{recover, SignatureSet, NULL_ADDRESS},
};

/// Owners whose signatures authorize an exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExitSigners {
    /// Owner of the first input.
    pub first: Address,
    /// Owner of the second input, for two-input transactions.
    pub second: Option<Address>,
}

impl ExitSigners {
    /// Whether `owner` signed for any input.
    pub fn contains(&self, owner: &Address) -> bool {
        self.first == *owner || self.second.as_ref() == Some(owner)
    }
}

/// Recover the owners authorizing an exit, or `None` if the signatures do not line up.
///
/// Both sets must be exactly two slots long; anything else is a structural error.
pub(crate) fn exit_signers(
    policy: UnusedSlotPolicy,
    tx_hash: &B256,
    confirmation_hash: &B256,
    has_second_input: bool,
    tx_signatures: &[u8],
    confirm_signatures: &[u8],
) -> Result<Option<ExitSigners>> {
    let tx_set = SignatureSet::parse_exact(tx_signatures, MAX_SIGNATURES)?;
    let confirm_set = SignatureSet::parse_exact(confirm_signatures, MAX_SIGNATURES)?;

    trace!(%tx_hash, %confirmation_hash, has_second_input, "checking exit signatures");

    let Some(first) = confirmed_signer(
        0,
        tx_hash,
        confirmation_hash,
        tx_set.slot(0)?,
        confirm_set.slot(0)?,
    ) else {
        return Ok(None);
    };

    let second = if has_second_input {
        let Some(second) = confirmed_signer(
            1,
            tx_hash,
            confirmation_hash,
            tx_set.slot(1)?,
            confirm_set.slot(1)?,
        ) else {
            return Ok(None);
        };
        Some(second)
    } else {
        if policy.requires_sentinel()
            && !(recovers_null(tx_hash, tx_set.slot(1)?)
                && recovers_null(confirmation_hash, confirm_set.slot(1)?))
        {
            debug!(%tx_hash, "unused second input slot holds a signature");
            return Ok(None);
        }
        None
    };

    Ok(Some(ExitSigners { first, second }))
}

/// Signer of `signature` over `tx_hash`, if it also signed `confirm_signature` over
/// `confirmation_hash` and is not the null sentinel.
fn confirmed_signer(
    slot: usize,
    tx_hash: &B256,
    confirmation_hash: &B256,
    signature: &[u8],
    confirm_signature: &[u8],
) -> Option<Address> {
    let signer = recover(tx_hash, signature)
        .inspect_err(|err| debug!(slot, %err, "transaction signature does not recover"))
        .ok()?;
    if signer == NULL_ADDRESS {
        debug!(slot, "required transaction signature is missing");
        return None;
    }

    let confirmer = recover(confirmation_hash, confirm_signature)
        .inspect_err(|err| debug!(slot, %err, "confirmation signature does not recover"))
        .ok()?;
    if confirmer != signer {
        debug!(slot, %signer, %confirmer, "confirmation signed by a different owner");
        return None;
    }

    Some(signer)
}

fn recovers_null(hash: &B256, signature: &[u8]) -> bool {
    matches!(recover(hash, signature), Ok(address) if address == NULL_ADDRESS)
}
