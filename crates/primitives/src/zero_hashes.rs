//! Roots of all-zero subtrees.
//!
//! `ZERO_HASHES[h]` is the root of a subtree of height `h` whose leaves are all the zero
//! hash. Trees pad missing leaves with these values, so the sibling of an empty branch
//! at height `h` is always `ZERO_HASHES[h]`.

use alloy_primitives::B256;
use once_cell::sync::Lazy;

use crate::{constants::MAX_TREE_DEPTH, hashing::hash_pair};

/// Zero-subtree roots for every height from `0` to [`MAX_TREE_DEPTH`] inclusive.
pub static ZERO_HASHES: Lazy<[B256; MAX_TREE_DEPTH + 1]> = Lazy::new(|| {
    let mut hashes = [B256::ZERO; MAX_TREE_DEPTH + 1];
    let mut current = B256::ZERO;
    for slot in hashes.iter_mut() {
        *slot = current;
        current = hash_pair(&current, &current);
    }
    hashes
});

/// Root of an all-zero subtree of the given height, if within [`MAX_TREE_DEPTH`].
pub fn zero_hash(height: usize) -> Option<B256> {
    ZERO_HASHES.get(height).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::b256;

    #[test]
    fn test_zero_hashes_match_rootchain_values() {
        let expected = [
            b256!("0000000000000000000000000000000000000000000000000000000000000000"),
            b256!("ad3228b676f7d3cd4284a5443f17f1962b36e491b30a40b2405849e597ba5fb5"),
            b256!("b4c11951957c6f8f642c4af61cd6b24640fec6dc7fc607ee8206a99e92410d30"),
            b256!("21ddb9a356815c3fac1026b6dec5df3124afbadb485c9ba5a3e3398a04b7ba85"),
            b256!("e58769b32a1beaf1ea27375a44095a0d1fb664ce2dd358e7fcbfb78c26a19344"),
            b256!("0eb01ebfc9ed27500cd4dfc979272d1f0913cc9f66540d7e8005811109e1cf2d"),
            b256!("887c22bd8750d34016ac3c66b5ff102dacdd73f6b014e710b51e8022af9a1968"),
            b256!("ffd70157e48063fc33c97a050f7f640233bf646cc98d9524c6b92bcf3ab56f83"),
            b256!("9867cc5f7f196b93bae1e27e6320742445d290f2263827498b54fec539f756af"),
            b256!("cefad4e508c098b9a7e1d8feb19955fb02ba9675585078710969d3440f5054e0"),
            b256!("f9dc3e7fe016e050eff260334f18a5d4fe391d82092319f5964f2e2eb7c1c3a5"),
            b256!("f8b13a49e282f609c317a833fb8d976d11517c571d1221a265d25af778ecf892"),
            b256!("3490c6ceeb450aecdc82e28293031d10c7d73bf85e57bf041a97360aa2c5d99c"),
            b256!("c1df82d9c4b87413eae2ef048f94b4d3554cea73d92b0f7af96e0271c691e2bb"),
            b256!("5c67add7c6caf302256adedf7ab114da0acfe870d449a3a489f781d659e8becc"),
            b256!("da7bce9f4e8618b6bd2f4132ce798cdc7a60e7e1460a7299e3c6342a579626d2"),
        ];

        for (height, hash) in expected.iter().enumerate() {
            assert_eq!(&ZERO_HASHES[height], hash, "zero hash mismatch at height {height}");
        }
    }

    #[test]
    fn test_zero_hash_bounds() {
        assert_eq!(zero_hash(0), Some(B256::ZERO));
        assert!(zero_hash(MAX_TREE_DEPTH).is_some());
        assert_eq!(zero_hash(MAX_TREE_DEPTH + 1), None);
    }
}
