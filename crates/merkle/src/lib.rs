//! Sorted binary Merkle tree for land-sale and giveaway claims
//!
//! This crate builds the commitment that authorizes claims against an
//! on-chain verifier holding a single 32-byte root:
//! - Canonical ordering: every level is sorted ascending by the hash
//!   value before pairing, so the root is independent of input order
//! - Even padding: an odd level duplicates its last (maximum) element
//! - Parent hashing: keccak256 over the two 32-byte child hashes,
//!   left then right, matching `keccak256(abi.encodePacked(a, b))`
//!
//! Proofs carry no left/right flags; verification re-derives the side
//! of each sibling from the same ordering rule used during build.

mod error;
mod hasher;
mod proof;
mod tree;

pub use error::MerkleError;
pub use hasher::Keccak256Hasher;
pub use proof::{verify_proof, MerkleProof};
pub use tree::MerkleTree;

/// 32-byte hash value, the unit of every leaf, node and root.
pub type Hash = [u8; 32];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_prove_verify() {
        let leaves: Vec<Hash> = (1u8..=4).map(|i| [i; 32]).collect();
        let tree = MerkleTree::build(&leaves).unwrap();

        for leaf in &leaves {
            let proof = tree.proof(leaf).unwrap();
            assert!(proof.verify(&tree.root()));
        }
    }

    #[test]
    fn test_proof_rejected_against_wrong_root() {
        let leaves: Vec<Hash> = (1u8..=4).map(|i| [i; 32]).collect();
        let tree = MerkleTree::build(&leaves).unwrap();
        let proof = tree.proof(&leaves[0]).unwrap();

        assert!(!proof.verify(&[0u8; 32]));
    }
}
