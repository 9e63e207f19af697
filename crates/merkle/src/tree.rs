//! Sorted Merkle tree construction and proof extraction

use std::collections::HashMap;

use crate::{hasher::Keccak256Hasher, proof::MerkleProof, Hash, MerkleError};

/// One vertex of the node arena.
///
/// Children are strong (tree-shaped, owned by the arena); the parent
/// index is a weak back-reference set during construction and used
/// only for the leaf-to-root proof walk.
#[derive(Clone, Debug)]
struct Node {
    hash: Hash,
    left: Option<usize>,
    right: Option<usize>,
    parent: Option<usize>,
}

impl Node {
    fn leaf(hash: Hash) -> Self {
        Self {
            hash,
            left: None,
            right: None,
            parent: None,
        }
    }
}

/// Immutable sorted Merkle tree over a fixed leaf set.
///
/// Built once from the finalized claim data, then queried for the root
/// and per-leaf inclusion proofs. There is no insertion or removal
/// after construction; a changed leaf set means a new tree. A built
/// tree is read-only, so shared references can extract proofs from
/// multiple threads without synchronization.
#[derive(Clone, Debug)]
pub struct MerkleTree {
    /// Node arena; leaves first, then each parent level in build order.
    nodes: Vec<Node>,
    /// Arena index of the root node.
    root: usize,
    /// Leaf hash -> arena index. On duplicate leaf hashes the later
    /// leaf wins the lookup entry; both still count toward the root.
    leaves_by_hash: HashMap<Hash, usize>,
    /// The input leaves, in their original order.
    leaves: Vec<Hash>,
}

impl MerkleTree {
    /// Build a tree from a non-empty set of 32-byte leaf hashes.
    ///
    /// Each level is sorted ascending by hash value (byte-wise, which
    /// is unsigned big-integer order for big-endian words) and padded
    /// to an even count by duplicating its maximum element, then
    /// adjacent elements are paired into keccak256 parents. Sorting
    /// before padding keeps the root invariant under any permutation
    /// of the input.
    pub fn build(leaves: &[Hash]) -> Result<Self, MerkleError> {
        if leaves.is_empty() {
            return Err(MerkleError::EmptyLeaves);
        }

        let mut nodes: Vec<Node> = leaves.iter().map(|hash| Node::leaf(*hash)).collect();

        let mut leaves_by_hash = HashMap::with_capacity(leaves.len());
        for (index, hash) in leaves.iter().enumerate() {
            leaves_by_hash.insert(*hash, index);
        }

        let mut level: Vec<usize> = (0..nodes.len()).collect();

        // A lone leaf is still hashed with itself.
        if level.len() == 1 {
            level.push(level[0]);
        }

        while level.len() > 1 {
            level.sort_by(|a, b| nodes[*a].hash.cmp(&nodes[*b].hash));
            if level.len() % 2 != 0 {
                level.push(level[level.len() - 1]);
            }

            let mut parents = Vec::with_capacity(level.len() / 2);
            for pair in level.chunks(2) {
                let left = pair[0];
                // A lone element pairs with itself.
                let right = pair.get(1).copied().unwrap_or(left);

                let hash = Keccak256Hasher::hash_pair(&nodes[left].hash, &nodes[right].hash);
                let parent = nodes.len();
                nodes.push(Node {
                    hash,
                    left: Some(left),
                    right: Some(right),
                    parent: None,
                });
                nodes[left].parent = Some(parent);
                nodes[right].parent = Some(parent);
                parents.push(parent);
            }
            level = parents;
        }

        Ok(Self {
            nodes,
            root: level[0],
            leaves_by_hash,
            leaves: leaves.to_vec(),
        })
    }

    /// The root hash committing to the entire leaf set.
    pub fn root(&self) -> Hash {
        self.nodes[self.root].hash
    }

    /// The input leaves, in their original order.
    pub fn leaves(&self) -> &[Hash] {
        &self.leaves
    }

    /// Number of distinct leaf hashes the tree can prove.
    pub fn leaf_count(&self) -> usize {
        self.leaves_by_hash.len()
    }

    /// Extract the inclusion proof for a leaf hash.
    ///
    /// Walks parent back-references from the leaf to the root, pushing
    /// the sibling hash at every level. A node paired with itself
    /// contributes its own hash.
    pub fn proof(&self, leaf: &Hash) -> Result<MerkleProof, MerkleError> {
        let mut index = *self
            .leaves_by_hash
            .get(leaf)
            .ok_or(MerkleError::LeafNotFound(*leaf))?;

        let mut siblings = Vec::new();
        while let Some(parent) = self.nodes[index].parent {
            let node = &self.nodes[parent];
            let sibling = if node.left == Some(index) {
                node.right.or(node.left)
            } else {
                node.left.or(node.right)
            };
            if let Some(sibling) = sibling {
                siblings.push(self.nodes[sibling].hash);
            }
            index = parent;
        }

        Ok(MerkleProof {
            leaf: *leaf,
            siblings,
        })
    }
}
