//! Merkle tree errors

use thiserror::Error;

use crate::Hash;

/// Errors raised by tree construction and proof extraction.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MerkleError {
    /// Construction was requested with zero leaves.
    #[error("cannot build a merkle tree from an empty leaf set")]
    EmptyLeaves,

    /// A proof was requested for a hash that is not a leaf of the tree.
    #[error("leaf 0x{} is not part of the tree", hex::encode(.0))]
    LeafNotFound(Hash),
}
