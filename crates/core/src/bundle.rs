//! Proof bundles distributed to claimants

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use landsale_merkle::{verify_proof, MerkleError, MerkleTree};

use crate::types::{parse_hash, to_hex, Hash, ParseError};

/// Errors from re-checking a bundle.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum BundleError {
    /// A hash field in the bundle is not valid hex.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// An entry's proof does not re-derive the bundle root.
    #[error("proof for leaf {leaf} does not match the root")]
    ProofMismatch { leaf: String },
}

/// One claimant's leaf hash and sibling path, hex-encoded for JSON.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProofEntry {
    pub leaf: String,
    pub proof: Vec<String>,
}

/// The full artifact written after a sale's claim data is finalized:
/// the published root and one proof per distinct leaf.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProofBundle {
    pub root: String,
    pub entries: Vec<ProofEntry>,
}

impl ProofBundle {
    /// Extract a proof for every distinct leaf of a built tree.
    pub fn from_tree(tree: &MerkleTree) -> Result<Self, MerkleError> {
        let mut seen = HashSet::new();
        let mut entries = Vec::with_capacity(tree.leaf_count());
        for leaf in tree.leaves() {
            if !seen.insert(*leaf) {
                continue;
            }
            let proof = tree.proof(leaf)?;
            entries.push(ProofEntry {
                leaf: to_hex(leaf),
                proof: proof.siblings.iter().map(|s| to_hex(s)).collect(),
            });
        }

        Ok(Self {
            root: to_hex(&tree.root()),
            entries,
        })
    }

    /// The bundle's root as raw bytes.
    pub fn root_hash(&self) -> Result<Hash, ParseError> {
        parse_hash(&self.root)
    }

    /// Re-verify every entry against an expected root.
    ///
    /// Fails on the first entry whose proof does not re-derive the
    /// root; a bundle that passes is safe to distribute.
    pub fn verify_all(&self, expected_root: &Hash) -> Result<(), BundleError> {
        for entry in &self.entries {
            let leaf = parse_hash(&entry.leaf)?;
            let siblings = entry
                .proof
                .iter()
                .map(|s| parse_hash(s))
                .collect::<Result<Vec<_>, _>>()?;

            if !verify_proof(&leaf, &siblings, expected_root) {
                return Err(BundleError::ProofMismatch {
                    leaf: entry.leaf.clone(),
                });
            }
            debug!(leaf = %entry.leaf, "proof verified");
        }
        Ok(())
    }
}
