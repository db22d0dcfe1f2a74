//! Sorted-pair Merkle verification of airdrop allocations.
//!
//! A leaf commits to one `(claimant, amount)` allocation. Interior nodes hash
//! their two children in ascending byte order, so a proof is just the list of
//! sibling digests from the leaf up to the root, without position bits.

use anchor_lang::prelude::*;
use solana_program::keccak::hashv;

use crate::constants::CLAIM_LEAF_DOMAIN;

/// Leaf = keccak256(domain || claimant || amount_le)
pub fn claim_leaf(claimant: &Pubkey, amount: u64) -> [u8; 32] {
    hashv(&[
        CLAIM_LEAF_DOMAIN,
        &claimant.to_bytes(),
        &amount.to_le_bytes(),
    ])
    .0
}

/// Hashes two nodes with the smaller digest first.
pub fn hash_sorted_pair(a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
    if a <= b {
        hashv(&[a, b]).0
    } else {
        hashv(&[b, a]).0
    }
}

/// Recomputes the root from `leaf` and `proof` and compares it with `root`.
///
/// Every proof element is consumed; there is no early exit on a partial match.
pub fn verify(root: &[u8; 32], leaf: [u8; 32], proof: &[[u8; 32]]) -> bool {
    let computed = proof
        .iter()
        .fold(leaf, |current, sibling| hash_sorted_pair(&current, sibling));

    computed == *root
}

#[cfg(test)]
mod tests {
    use super::*;

    fn four_leaf_tree() -> ([u8; 32], Vec<[u8; 32]>) {
        let leaves: Vec<[u8; 32]> = (1..=4u64)
            .map(|i| claim_leaf(&Pubkey::new_from_array([i as u8; 32]), i * 100))
            .collect();
        let left = hash_sorted_pair(&leaves[0], &leaves[1]);
        let right = hash_sorted_pair(&leaves[2], &leaves[3]);
        (hash_sorted_pair(&left, &right), leaves)
    }

    #[test]
    fn sorted_pair_is_order_independent() {
        let a = [1u8; 32];
        let b = [2u8; 32];
        assert_eq!(hash_sorted_pair(&a, &b), hash_sorted_pair(&b, &a));
    }

    #[test]
    fn leaf_binds_claimant_and_amount() {
        let claimant = Pubkey::new_unique();
        let other = Pubkey::new_unique();
        assert_ne!(claim_leaf(&claimant, 1000), claim_leaf(&claimant, 1001));
        assert_ne!(claim_leaf(&claimant, 1000), claim_leaf(&other, 1000));
        assert_eq!(claim_leaf(&claimant, 1000), claim_leaf(&claimant, 1000));
    }

    #[test]
    fn verifies_every_leaf_of_a_four_leaf_tree() {
        let (root, leaves) = four_leaf_tree();
        let right = hash_sorted_pair(&leaves[2], &leaves[3]);
        let left = hash_sorted_pair(&leaves[0], &leaves[1]);

        assert!(verify(&root, leaves[0], &[leaves[1], right]));
        assert!(verify(&root, leaves[1], &[leaves[0], right]));
        assert!(verify(&root, leaves[2], &[leaves[3], left]));
        assert!(verify(&root, leaves[3], &[leaves[2], left]));
    }

    #[test]
    fn rejects_foreign_leaf_and_truncated_proof() {
        let (root, leaves) = four_leaf_tree();
        let right = hash_sorted_pair(&leaves[2], &leaves[3]);
        let stranger = claim_leaf(&Pubkey::new_unique(), 100);

        assert!(!verify(&root, stranger, &[leaves[1], right]));
        assert!(!verify(&root, leaves[0], &[leaves[1]]));
        assert!(!verify(&root, leaves[0], &[]));
    }

    #[test]
    fn single_leaf_tree_uses_empty_proof() {
        let leaf = claim_leaf(&Pubkey::new_unique(), 42);
        assert!(verify(&leaf, leaf, &[]));
    }
}
