//! Giveaway claim records

use serde::{Deserialize, Serialize};
use tiny_keccak::{Hasher, Keccak};

use crate::types::{addr_hex, hash_hex, Address, Hash};

/// One giveaway entry: a recipient and the asset amounts reserved for
/// them, salted like land parcels.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssetClaim {
    #[serde(with = "addr_hex")]
    pub to: Address,
    pub asset_ids: Vec<u128>,
    pub asset_values: Vec<u64>,
    #[serde(with = "hash_hex")]
    pub salt: Hash,
}

impl AssetClaim {
    /// Compute the canonical leaf hash for this claim.
    ///
    /// Packed layout, matching the on-chain verifier:
    /// `address to || uint256[] assetIds || uint256[] assetValues ||
    /// bytes32 salt`, array elements as 32-byte big-endian words.
    pub fn leaf_hash(&self) -> Hash {
        let mut hasher = Keccak::v256();
        hasher.update(&self.to);
        for id in &self.asset_ids {
            update_word(&mut hasher, *id);
        }
        for value in &self.asset_values {
            update_word(&mut hasher, u128::from(*value));
        }
        hasher.update(&self.salt);

        let mut output = [0u8; 32];
        hasher.finalize(&mut output);
        output
    }
}

/// Feed a value into the hasher as a 32-byte big-endian word.
fn update_word(hasher: &mut Keccak, value: u128) {
    let mut word = [0u8; 32];
    word[16..].copy_from_slice(&value.to_be_bytes());
    hasher.update(&word);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::to_hex;

    fn sample() -> AssetClaim {
        AssetClaim {
            to: [0xaau8; 20],
            asset_ids: vec![101, 102],
            asset_values: vec![5, 1],
            salt: [0x22u8; 32],
        }
    }

    #[test]
    fn test_known_leaf_vector() {
        assert_eq!(
            to_hex(&sample().leaf_hash()),
            "0xc04292bdf385f207e49e26774c27def1f6d2933e7753ffe7c4a17de5cf547258"
        );
    }

    #[test]
    fn test_asset_order_is_committed() {
        let claim = sample();
        let mut reordered = claim.clone();
        reordered.asset_ids.reverse();
        assert_ne!(claim.leaf_hash(), reordered.leaf_hash());
    }

    #[test]
    fn test_recipient_is_committed() {
        let claim = sample();
        let mut redirected = claim.clone();
        redirected.to = [0xbbu8; 20];
        assert_ne!(claim.leaf_hash(), redirected.leaf_hash());
    }

    #[test]
    fn test_serde_round_trip() {
        let claim = sample();
        let json = serde_json::to_string(&claim).unwrap();
        assert!(json.contains("\"0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa\""));

        let decoded: AssetClaim = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, claim);
    }
}
