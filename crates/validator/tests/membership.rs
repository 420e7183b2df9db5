//! Membership proofs checked through the public API.

use alloy_primitives::B256;
use assert_matches::assert_matches;
use plasma_primitives::{hash_pair, ZERO_HASHES};
use plasma_test_utils::{hash_of, sample_leaves};
use plasma_validator::{
    check_membership, MerkleProof, MerkleTree, Validator, ValidatorConfig, ValidatorError,
};
use proptest::prelude::*;

fn five_leaf_tree() -> (Vec<B256>, MerkleTree) {
    let leaves = vec![
        hash_of("h1"),
        hash_of("h2"),
        hash_of("h3"),
        hash_of("h4"),
        B256::ZERO,
    ];
    let tree = MerkleTree::new(leaves.clone(), 3).unwrap();
    (leaves, tree)
}

#[test]
fn five_leaves_verify_against_one_root() {
    plasma_observability::init_test_logging();
    let (leaves, tree) = five_leaf_tree();
    let root = tree.root();

    // Computed by hand from the pairwise construction.
    let expected_root = hash_pair(
        &hash_pair(
            &hash_pair(&leaves[0], &leaves[1]),
            &hash_pair(&leaves[2], &leaves[3]),
        ),
        &hash_pair(&hash_pair(&leaves[4], &ZERO_HASHES[0]), &ZERO_HASHES[1]),
    );
    assert_eq!(root, expected_root);

    for (index, leaf) in leaves.iter().enumerate() {
        let index = index as u64;
        let proof = tree.proof(index).unwrap();
        assert!(
            check_membership(*leaf, index, root, proof.as_bytes()).unwrap(),
            "leaf {index} should verify"
        );
    }
}

#[test]
fn altered_inputs_do_not_verify() {
    let (leaves, tree) = five_leaf_tree();
    let root = tree.root();
    let proof = tree.proof(2).unwrap();
    let proof = proof.as_bytes();

    assert!(check_membership(leaves[2], 2, root, proof).unwrap());

    // wrong leaf
    assert!(!check_membership(hash_of("h9"), 2, root, proof).unwrap());
    // off-by-one index, both ways
    assert!(!check_membership(leaves[2], 1, root, proof).unwrap());
    assert!(!check_membership(leaves[2], 3, root, proof).unwrap());
    // wrong root
    assert!(!check_membership(leaves[2], 2, hash_of("root"), proof).unwrap());
    // index beyond the tree that aliases position 2
    assert!(!check_membership(leaves[2], 2 + 8, root, proof).unwrap());
}

#[test]
fn malformed_proofs_are_errors() {
    let (leaves, tree) = five_leaf_tree();
    let root = tree.root();
    let proof = tree.proof(0).unwrap().into_bytes();

    let truncated = &proof[..proof.len() - 1];
    assert_matches!(
        check_membership(leaves[0], 0, root, truncated),
        Err(ValidatorError::MalformedProof { length: 95 })
    );

    let mut padded = proof.to_vec();
    padded.push(0);
    assert_matches!(
        check_membership(leaves[0], 0, root, &padded),
        Err(ValidatorError::MalformedProof { length: 97 })
    );

    // A whole extra node is well formed but describes a different tree.
    let mut extended = proof.to_vec();
    extended.extend_from_slice(&[0u8; 32]);
    assert!(!check_membership(leaves[0], 0, root, &extended).unwrap());
}

#[test]
fn single_leaf_tree_uses_empty_proof() {
    let leaf = hash_of("lonely");
    assert!(check_membership(leaf, 0, leaf, &[]).unwrap());
    assert!(!check_membership(leaf, 0, hash_of("other"), &[]).unwrap());
    assert!(!check_membership(leaf, 1, leaf, &[]).unwrap());
}

#[test]
fn block_depth_proofs() {
    let leaves = sample_leaves(37);
    let tree = MerkleTree::for_block(leaves.clone()).unwrap();

    for index in [0u64, 1, 17, 36, 37, 65_535] {
        let proof = tree.proof(index).unwrap();
        assert_eq!(proof.as_bytes().len(), 512);
        let leaf = leaves.get(index as usize).copied().unwrap_or(B256::ZERO);
        assert!(check_membership(leaf, index, tree.root(), proof.as_bytes()).unwrap());
    }
}

#[test]
fn configured_depth_limit() {
    let tree = MerkleTree::for_block(sample_leaves(3)).unwrap();
    let proof = tree.proof(1).unwrap();
    let leaf = tree.leaf(1).unwrap();

    let shallow = Validator::new(ValidatorConfig::default().with_max_proof_depth(8));
    assert_matches!(
        shallow.check_membership(leaf, 1, tree.root(), proof.as_bytes()),
        Err(ValidatorError::ProofTooDeep { depth: 16, max: 8 })
    );

    let default = Validator::default();
    assert!(default
        .check_membership(leaf, 1, tree.root(), proof.as_bytes())
        .unwrap());
}

#[test]
fn checks_are_deterministic() {
    let (leaves, tree) = five_leaf_tree();
    let proof = tree.proof(3).unwrap();

    let first = check_membership(leaves[3], 3, tree.root(), proof.as_bytes()).unwrap();
    let second = check_membership(leaves[3], 3, tree.root(), proof.as_bytes()).unwrap();
    assert_eq!(first, second);
    assert_eq!(proof.compute_root(leaves[3], 3), tree.root());
}

#[test]
fn hex_encoded_proof() {
    let (leaves, tree) = five_leaf_tree();
    let proof = tree.proof(4).unwrap();
    let encoded = alloy_primitives::hex::encode_prefixed(proof.as_bytes());

    let parsed: MerkleProof = encoded.parse().unwrap();
    assert_eq!(parsed, proof);
    assert!(check_membership(leaves[4], 4, tree.root(), parsed.as_ref()).unwrap());
}

proptest! {
    #[test]
    fn every_leaf_verifies(count in 1usize..64, depth in 6usize..10, pick in any::<prop::sample::Index>()) {
        let leaves = sample_leaves(count);
        let tree = MerkleTree::new(leaves.clone(), depth).unwrap();
        let index = pick.index(count);

        let proof = tree.proof(index as u64).unwrap();
        prop_assert!(check_membership(leaves[index], index as u64, tree.root(), proof.as_bytes()).unwrap());
    }

    #[test]
    fn any_flipped_proof_bit_fails(count in 2usize..32, pick in any::<prop::sample::Index>(), bit in any::<prop::sample::Index>()) {
        let leaves = sample_leaves(count);
        let tree = MerkleTree::new(leaves.clone(), 5).unwrap();
        let index = pick.index(count);

        let mut proof = tree.proof(index as u64).unwrap().into_bytes().to_vec();
        let bit = bit.index(proof.len() * 8);
        proof[bit / 8] ^= 1 << (bit % 8);

        prop_assert!(!check_membership(leaves[index], index as u64, tree.root(), &proof).unwrap());
    }
}
