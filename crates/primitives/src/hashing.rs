//! Keccak-256 commitments used by the rootchain.

use alloy_primitives::{B256, Keccak256};

/// Hashes two tree nodes into their parent: `keccak256(left || right)`.
///
/// Both children are exactly 32 bytes and no separator is inserted, so the result
/// matches what the rootchain computes when it folds a membership proof.
pub fn hash_pair(left: &B256, right: &B256) -> B256 {
    let mut hasher = Keccak256::new();
    hasher.update(left);
    hasher.update(right);
    hasher.finalize()
}

/// Commitment signed by confirmation signatures: `keccak256(tx_hash || block_root)`.
///
/// Binds a transaction to the root of the block it was included in.
pub fn confirmation_hash(tx_hash: &B256, block_root: &B256) -> B256 {
    hash_pair(tx_hash, block_root)
}

/// Block leaf of a signed transaction: `keccak256(tx_hash || signatures)`.
pub fn transaction_leaf(tx_hash: &B256, signatures: &[u8]) -> B256 {
    let mut hasher = Keccak256::new();
    hasher.update(tx_hash);
    hasher.update(signatures);
    hasher.finalize()
}
