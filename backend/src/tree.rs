use sha3::{Digest, Keccak256};

use crate::error::{ProofError, Result};

/// Hashes two nodes with the smaller digest first.
pub fn hash_sorted_pair(a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
    let (first, second) = if a <= b { (a, b) } else { (b, a) };
    Keccak256::new()
        .chain_update(first)
        .chain_update(second)
        .finalize()
        .into()
}

/// Folds the proof from the leaf up and compares with the root.
pub fn verify(root: &[u8; 32], leaf: [u8; 32], proof: &[[u8; 32]]) -> bool {
    let computed = proof
        .iter()
        .fold(leaf, |current, sibling| hash_sorted_pair(&current, sibling));
    computed == *root
}

/// Binary Merkle tree over sorted leaves with sorted-pair interior nodes.
///
/// A node without a sibling is promoted to the next layer unchanged, so it
/// contributes nothing to the proofs passing through it.
#[derive(Debug, Clone)]
pub struct ClaimTree {
    /// layers[0] are the sorted leaves, the last layer holds the root
    layers: Vec<Vec<[u8; 32]>>,
}

impl ClaimTree {
    pub fn new(mut leaves: Vec<[u8; 32]>) -> Result<Self> {
        if leaves.is_empty() {
            return Err(ProofError::EmptyInput);
        }
        leaves.sort_unstable();

        let mut layers = vec![leaves];
        loop {
            let level = &layers[layers.len() - 1];
            if level.len() <= 1 {
                break;
            }
            let next: Vec<[u8; 32]> = level
                .chunks(2)
                .map(|pair| match pair {
                    [left, right] => hash_sorted_pair(left, right),
                    [single] => *single,
                    _ => unreachable!("chunks(2) yields one or two nodes"),
                })
                .collect();
            layers.push(next);
        }

        Ok(Self { layers })
    }

    pub fn root(&self) -> [u8; 32] {
        self.layers[self.layers.len() - 1][0]
    }

    pub fn leaf_count(&self) -> usize {
        self.layers[0].len()
    }

    /// Sibling digests from `leaf` up to the root, `None` if the leaf is absent.
    pub fn proof(&self, leaf: &[u8; 32]) -> Option<Vec<[u8; 32]>> {
        let mut index = self.layers[0].binary_search(leaf).ok()?;
        let mut proof = Vec::new();

        for level in &self.layers[..self.layers.len() - 1] {
            let sibling = index ^ 1;
            if let Some(node) = level.get(sibling) {
                proof.push(*node);
            }
            index /= 2;
        }

        Some(proof)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaves(n: u8) -> Vec<[u8; 32]> {
        (0..n).map(|i| [i.wrapping_mul(37); 32]).collect()
    }

    #[test]
    fn test_single_leaf_is_root() {
        let tree = ClaimTree::new(vec![[9u8; 32]]).unwrap();
        assert_eq!(tree.root(), [9u8; 32]);
        assert_eq!(tree.proof(&[9u8; 32]).unwrap(), Vec::<[u8; 32]>::new());
    }

    #[test]
    fn test_two_leaves_hash_to_sorted_pair() {
        let tree = ClaimTree::new(vec![[2u8; 32], [1u8; 32]]).unwrap();
        assert_eq!(tree.root(), hash_sorted_pair(&[1u8; 32], &[2u8; 32]));
        assert_eq!(tree.proof(&[2u8; 32]).unwrap(), vec![[1u8; 32]]);
    }

    #[test]
    fn test_every_leaf_verifies_for_odd_and_even_sizes() {
        for n in 1..=9u8 {
            let leaves = leaves(n);
            let tree = ClaimTree::new(leaves.clone()).unwrap();
            for leaf in &leaves {
                let proof = tree.proof(leaf).unwrap();
                assert!(verify(&tree.root(), *leaf, &proof), "n = {n}");
            }
        }
    }

    #[test]
    fn test_root_is_independent_of_input_order() {
        let mut shuffled = leaves(7);
        let forward = ClaimTree::new(shuffled.clone()).unwrap();
        shuffled.reverse();
        let backward = ClaimTree::new(shuffled).unwrap();
        assert_eq!(forward.root(), backward.root());
    }

    #[test]
    fn test_unknown_leaf_has_no_proof() {
        let tree = ClaimTree::new(leaves(4)).unwrap();
        assert!(tree.proof(&[255u8; 32]).is_none());
    }

    #[test]
    fn test_empty_tree_is_rejected() {
        assert!(matches!(ClaimTree::new(vec![]), Err(ProofError::EmptyInput)));
    }
}
