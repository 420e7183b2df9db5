//! Membership proofs against a block's transaction root.

use std::str::FromStr;

use alloy_primitives::{B256, Bytes};
use plasma_primitives::{constants::HASH_SIZE, hash_pair};

use crate::error::{Result, ValidatorError};

/// Sibling hashes on the path from a leaf to the root, concatenated leaf level first.
///
/// The byte length is always a whole number of 32-byte nodes; the depth of the tree is
/// `len / 32`. Construct through [`MerkleProof::new`] or parse from hex.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct MerkleProof {
    bytes: Bytes,
}

impl MerkleProof {
    /// Wrap raw proof bytes, rejecting lengths that are not a multiple of 32.
    pub fn new(bytes: impl Into<Bytes>) -> Result<Self> {
        let bytes = bytes.into();
        validate_length(&bytes)?;
        Ok(Self { bytes })
    }

    /// Build a proof from its sibling hashes, leaf level first.
    pub fn from_siblings(siblings: impl IntoIterator<Item = B256>) -> Self {
        let bytes: Vec<u8> = siblings
            .into_iter()
            .flat_map(|sibling| sibling.0)
            .collect();
        Self {
            bytes: bytes.into(),
        }
    }

    /// Number of tree levels this proof spans.
    pub fn depth(&self) -> usize {
        self.bytes.len() / HASH_SIZE
    }

    /// Iterate over the sibling hashes, leaf level first.
    pub fn siblings(&self) -> impl Iterator<Item = B256> + '_ {
        self.bytes.chunks_exact(HASH_SIZE).map(B256::from_slice)
    }

    /// Raw proof bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume the proof, returning the raw bytes.
    pub fn into_bytes(self) -> Bytes {
        self.bytes
    }

    /// Root obtained by folding `leaf` at `index` up through the siblings.
    pub fn compute_root(&self, leaf: B256, index: u64) -> B256 {
        fold_root(leaf, index, &self.bytes)
    }

    /// Whether `leaf` sits at `index` under `root`.
    pub fn verify(&self, leaf: B256, index: u64, root: B256) -> bool {
        index_fits(index, self.depth()) && self.compute_root(leaf, index) == root
    }
}

impl AsRef<[u8]> for MerkleProof {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl TryFrom<Bytes> for MerkleProof {
    type Error = ValidatorError;

    fn try_from(bytes: Bytes) -> Result<Self> {
        Self::new(bytes)
    }
}

impl FromStr for MerkleProof {
    type Err = ValidatorError;

    /// Parse a hex encoded proof, with or without the `0x` prefix.
    fn from_str(s: &str) -> Result<Self> {
        let bytes = Bytes::from_str(s).map_err(|_| ValidatorError::MalformedProof {
            length: s.len(),
        })?;
        Self::new(bytes)
    }
}

/// Depth of a raw proof, or a structural error if it is not shaped like one.
pub(crate) fn proof_depth(proof: &[u8], max_depth: usize) -> Result<usize> {
    validate_length(proof)?;
    let depth = proof.len() / HASH_SIZE;
    if depth > max_depth {
        return Err(ValidatorError::ProofTooDeep {
            depth,
            max: max_depth,
        });
    }
    Ok(depth)
}

fn validate_length(proof: &[u8]) -> Result<()> {
    if proof.len() % HASH_SIZE != 0 {
        return Err(ValidatorError::MalformedProof {
            length: proof.len(),
        });
    }
    Ok(())
}

/// Fold `leaf` up the tree. At each level the low bit of `index` picks the side: `0`
/// keeps the running hash on the left and the sibling on the right, `1` swaps them.
/// The index shifts right by one bit per level.
pub(crate) fn fold_root(leaf: B256, index: u64, proof: &[u8]) -> B256 {
    let mut hash = leaf;
    let mut index = index;

    for sibling in proof.chunks_exact(HASH_SIZE) {
        let sibling = B256::from_slice(sibling);
        hash = if index & 1 == 0 {
            hash_pair(&hash, &sibling)
        } else {
            hash_pair(&sibling, &hash)
        };
        index >>= 1;
    }

    hash
}

/// An index addresses a leaf only if it has no bits above the tree depth.
pub(crate) fn index_fits(index: u64, depth: usize) -> bool {
    u32::try_from(depth)
        .ok()
        .and_then(|depth| index.checked_shr(depth))
        .is_none_or(|rest| rest == 0)
}
