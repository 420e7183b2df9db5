//! Configured entry point for the verification routines.

use alloy_primitives::{Address, B256};
use tracing::{debug, trace, warn};

use crate::{
    config::ValidatorConfig,
    error::Result,
    exit::{self, ExitSigners},
    merkle::{fold_root, index_fits, proof_depth},
    signature::recover,
};

/// Stateless validator parameterised by a [`ValidatorConfig`].
///
/// All methods are pure: output depends only on the arguments and the configuration,
/// so a single instance can be shared freely across threads.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    config: ValidatorConfig,
}

impl Validator {
    /// Create a validator with the given configuration.
    pub fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Check that `leaf` sits at `index` in the tree committed to by `root`.
    ///
    /// `proof` is the concatenation of sibling hashes from the leaf level up. At each
    /// level the low bit of `index` selects the side of the running hash (`0` left,
    /// `1` right) before the index shifts right by one.
    ///
    /// Returns an error if `proof` is not a whole number of 32-byte nodes or is deeper
    /// than the configured maximum. A well-formed proof that does not reach `root`, or
    /// an index with bits above the proof depth, yields `Ok(false)`.
    pub fn check_membership(
        &self,
        leaf: B256,
        index: u64,
        root: B256,
        proof: &[u8],
    ) -> Result<bool> {
        let depth = proof_depth(proof, self.config.effective_max_proof_depth())
            .inspect_err(|err| warn!(%err, "rejecting membership proof"))?;

        if !index_fits(index, depth) {
            debug!(index, depth, "leaf index outside proof depth");
            return Ok(false);
        }

        let computed = fold_root(leaf, index, proof);
        trace!(%leaf, index, depth, %computed, %root, "folded membership proof");
        Ok(computed == root)
    }

    /// Recover the signer of `message_hash`. See [`recover`](crate::recover).
    pub fn recover(&self, message_hash: &B256, signature: &[u8]) -> Result<Address> {
        Ok(recover(message_hash, signature)?)
    }

    /// Check that the transaction and confirmation signatures authorize an exit.
    ///
    /// Both signature sets must be exactly 130 bytes (two 65-byte slots), otherwise an
    /// error is returned. Slot 0 must recover the same owner over `tx_hash` and over
    /// `confirmation_hash`; with `has_second_input`, so must slot 1. Required owners may
    /// not be the null sentinel. For single-input exits the treatment of slot 1 follows
    /// [`ValidatorConfig::unused_slot`].
    pub fn check_sigs(
        &self,
        tx_hash: &B256,
        confirmation_hash: &B256,
        has_second_input: bool,
        tx_signatures: &[u8],
        confirm_signatures: &[u8],
    ) -> Result<bool> {
        self.exit_signers(
            tx_hash,
            confirmation_hash,
            has_second_input,
            tx_signatures,
            confirm_signatures,
        )
        .map(|signers| signers.is_some())
    }

    /// Like [`check_sigs`](Self::check_sigs), but returns the authorizing owners.
    pub fn exit_signers(
        &self,
        tx_hash: &B256,
        confirmation_hash: &B256,
        has_second_input: bool,
        tx_signatures: &[u8],
        confirm_signatures: &[u8],
    ) -> Result<Option<ExitSigners>> {
        exit::exit_signers(
            self.config.unused_slot,
            tx_hash,
            confirmation_hash,
            has_second_input,
            tx_signatures,
            confirm_signatures,
        )
        .inspect_err(|err| warn!(%err, "rejecting exit signatures"))
    }
}
