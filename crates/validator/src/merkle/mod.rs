//! Merkle membership proofs over rootchain block trees.

mod proof;
mod tree;

pub(crate) use proof::{fold_root, index_fits, proof_depth};
pub use proof::MerkleProof;
pub use tree::MerkleTree;
