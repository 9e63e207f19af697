//! Keccak256 hasher for the claim tree

use tiny_keccak::{Hasher, Keccak};

use crate::Hash;

/// Keccak256 hasher
pub struct Keccak256Hasher;

impl Keccak256Hasher {
    /// Hash two 32-byte values together, left then right.
    ///
    /// This is the parent-node scheme the on-chain verifier replays:
    /// `keccak256(abi.encodePacked(left, right))`. Field width and
    /// order must never change or every issued proof breaks.
    pub fn hash_pair(left: &Hash, right: &Hash) -> Hash {
        let mut hasher = Keccak::v256();
        hasher.update(left);
        hasher.update(right);
        let mut output = [0u8; 32];
        hasher.finalize(&mut output);
        output
    }

    /// Hash an arbitrary byte string.
    pub fn hash(data: &[u8]) -> Hash {
        let mut hasher = Keccak::v256();
        hasher.update(data);
        let mut output = [0u8; 32];
        hasher.finalize(&mut output);
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_pair() {
        let left = [1u8; 32];
        let right = [2u8; 32];
        let hash = Keccak256Hasher::hash_pair(&left, &right);
        assert_ne!(hash, [0u8; 32]);
        assert_ne!(hash, Keccak256Hasher::hash_pair(&right, &left));
    }

    #[test]
    fn test_known_keccak_vectors() {
        // keccak256("") and keccak256("abc"), the classic reference values
        assert_eq!(
            hex::encode(Keccak256Hasher::hash(b"")),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
        assert_eq!(
            hex::encode(Keccak256Hasher::hash(b"abc")),
            "4e03657aea45a94fc7d47ba826c8d667c0d1e6e33a64a036ec44f58fa12d6c45"
        );
    }

    #[test]
    fn test_hash_pair_is_concatenation() {
        let left = [0xabu8; 32];
        let right = [0xcdu8; 32];
        let mut concat = [0u8; 64];
        concat[..32].copy_from_slice(&left);
        concat[32..].copy_from_slice(&right);
        assert_eq!(
            Keccak256Hasher::hash_pair(&left, &right),
            Keccak256Hasher::hash(&concat)
        );
    }
}
