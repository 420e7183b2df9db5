//! Fixed-depth transaction tree and its proof generator.
//!
//! Leaves occupy positions `0..n` of a complete binary tree of the requested depth.
//! Every position past the last leaf holds the zero hash, so an empty branch at height
//! `h` hashes to `ZERO_HASHES[h]`. Proofs list the sibling at each height from the leaf
//! upward, and a position's low bit at each height says whether the running hash is
//! the right child (`1`) or the left child (`0`). This is exactly the order
//! [`check_membership`](crate::check_membership) folds in.

use alloy_primitives::B256;
use plasma_primitives::{
    constants::{BLOCK_TREE_DEPTH, MAX_TREE_DEPTH},
    hash_pair, ZERO_HASHES,
};

use super::proof::{index_fits, MerkleProof};
use crate::error::{Result, ValidatorError};

/// A binary Keccak-256 Merkle tree of fixed depth.
#[derive(Clone, Debug)]
pub struct MerkleTree {
    depth: usize,
    /// `levels[0]` holds the leaves, `levels[depth]` the root. Trailing zero nodes are
    /// not stored.
    levels: Vec<Vec<B256>>,
}

impl MerkleTree {
    /// Build a tree of `depth` levels over `leaves`.
    pub fn new(leaves: impl IntoIterator<Item = B256>, depth: usize) -> Result<Self> {
        if depth > MAX_TREE_DEPTH {
            return Err(ValidatorError::ProofTooDeep {
                depth,
                max: MAX_TREE_DEPTH,
            });
        }

        let leaves: Vec<B256> = leaves.into_iter().collect();
        let fits = u64::try_from(leaves.len())
            .is_ok_and(|count| count == 0 || index_fits(count - 1, depth));
        if !fits {
            return Err(ValidatorError::TreeFull {
                depth,
                leaves: leaves.len(),
            });
        }

        let mut levels = Vec::with_capacity(depth + 1);
        let mut current = leaves;
        for zero in ZERO_HASHES.iter().take(depth) {
            let next = current
                .chunks(2)
                .map(|pair| match pair {
                    [left, right] => hash_pair(left, right),
                    [left] => hash_pair(left, zero),
                    _ => *zero,
                })
                .collect();
            levels.push(current);
            current = next;
        }
        levels.push(current);

        Ok(Self { depth, levels })
    }

    /// Build a tree with the depth used by rootchain blocks.
    pub fn for_block(leaves: impl IntoIterator<Item = B256>) -> Result<Self> {
        Self::new(leaves, BLOCK_TREE_DEPTH)
    }

    /// Number of levels between the leaves and the root.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Number of leaves the tree was built from.
    pub fn leaf_count(&self) -> usize {
        self.levels.first().map_or(0, Vec::len)
    }

    /// The tree root.
    pub fn root(&self) -> B256 {
        self.node(self.depth, 0)
    }

    /// Leaf at `index`, or the zero hash for an unused position.
    pub fn leaf(&self, index: u64) -> Result<B256> {
        self.check_index(index)?;
        Ok(self.node(0, index))
    }

    /// Membership proof for the leaf at `index`.
    ///
    /// Any position inside the tree can be proven, including padding positions whose
    /// leaf is the zero hash.
    pub fn proof(&self, index: u64) -> Result<MerkleProof> {
        self.check_index(index)?;

        let siblings = (0..self.depth).map(|height| {
            let position = u32::try_from(height)
                .ok()
                .and_then(|shift| index.checked_shr(shift))
                .unwrap_or(0);
            self.node(height, position ^ 1)
        });

        Ok(MerkleProof::from_siblings(siblings))
    }

    fn check_index(&self, index: u64) -> Result<()> {
        if !index_fits(index, self.depth) {
            return Err(ValidatorError::IndexOutOfRange {
                index,
                depth: self.depth,
            });
        }
        Ok(())
    }

    fn node(&self, height: usize, position: u64) -> B256 {
        usize::try_from(position)
            .ok()
            .and_then(|position| self.levels.get(height)?.get(position))
            .or_else(|| ZERO_HASHES.get(height))
            .copied()
            .unwrap_or_default()
    }
}
