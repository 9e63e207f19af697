//! Inclusion proofs and root re-derivation

use serde::{Deserialize, Serialize};

use crate::{hasher::Keccak256Hasher, Hash};

/// Inclusion proof for one leaf: sibling hashes in leaf-to-root order.
///
/// No left/right flags are carried. The verifier re-derives each
/// sibling's side from the canonical ordering rule used during
/// construction: the smaller hash is always the left field.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MerkleProof {
    /// The leaf hash being proven.
    pub leaf: Hash,
    /// Sibling hashes from the leaf's level up to just below the root.
    pub siblings: Vec<Hash>,
}

impl MerkleProof {
    /// Re-derive the root this proof commits to.
    pub fn compute_root(&self) -> Hash {
        fold_root(&self.leaf, &self.siblings)
    }

    /// True iff the proof re-derives `root` from its leaf.
    pub fn verify(&self, root: &Hash) -> bool {
        verify_proof(&self.leaf, &self.siblings, root)
    }
}

/// Verify a leaf against an expected root using only the sibling path.
///
/// An invalid proof is a normal `false`, not an error.
pub fn verify_proof(leaf: &Hash, siblings: &[Hash], expected_root: &Hash) -> bool {
    fold_root(leaf, siblings) == *expected_root
}

fn fold_root(leaf: &Hash, siblings: &[Hash]) -> Hash {
    let mut current = *leaf;
    for sibling in siblings {
        // Ties fall through to the sibling-as-left branch, the same
        // branch the self-paired build step produces.
        current = if current < *sibling {
            Keccak256Hasher::hash_pair(&current, sibling)
        } else {
            Keccak256Hasher::hash_pair(sibling, &current)
        };
    }
    current
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MerkleTree;

    fn leaves(n: usize) -> Vec<Hash> {
        (0..n)
            .map(|i| Keccak256Hasher::hash(&(i as u64).to_be_bytes()))
            .collect()
    }

    #[test]
    fn test_round_trip_all_sizes() {
        for n in 1..=12 {
            let leaves = leaves(n);
            let tree = MerkleTree::build(&leaves).unwrap();
            for leaf in &leaves {
                let proof = tree.proof(leaf).unwrap();
                assert!(proof.verify(&tree.root()), "round trip failed for n={n}");
            }
        }
    }

    #[test]
    fn test_single_bit_tamper_fails() {
        let leaves = leaves(7);
        let tree = MerkleTree::build(&leaves).unwrap();
        let root = tree.root();
        let proof = tree.proof(&leaves[3]).unwrap();

        for i in 0..proof.siblings.len() {
            for bit in [0u8, 7, 128] {
                let mut tampered = proof.clone();
                tampered.siblings[i][(bit / 8) as usize] ^= 1 << (bit % 8);
                assert!(!tampered.verify(&root));
            }
        }
    }

    #[test]
    fn test_substituted_leaf_fails() {
        let leaves = leaves(8);
        let tree = MerkleTree::build(&leaves).unwrap();
        let root = tree.root();
        let proof = tree.proof(&leaves[0]).unwrap();

        // A leaf outside the set cannot ride another leaf's path.
        let outsider = Keccak256Hasher::hash(b"outsider");
        assert!(!verify_proof(&outsider, &proof.siblings, &root));
    }

    #[test]
    fn test_empty_proof_binds_leaf_to_root() {
        let leaf = Keccak256Hasher::hash(b"leaf");
        assert!(verify_proof(&leaf, &[], &leaf));
        assert!(!verify_proof(&leaf, &[], &[0u8; 32]));
    }

    #[test]
    fn test_proof_serde_round_trip() {
        let leaves = leaves(5);
        let tree = MerkleTree::build(&leaves).unwrap();
        let proof = tree.proof(&leaves[2]).unwrap();

        let encoded = serde_json::to_string(&proof).unwrap();
        let decoded: MerkleProof = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, proof);
        assert!(decoded.verify(&tree.root()));
    }
}
