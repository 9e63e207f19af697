//! Salted land-sale records

use serde::{Deserialize, Serialize};
use tiny_keccak::{Hasher, Keccak};

use crate::types::{addr_hex, hash_hex, Address, Hash};

/// One salted parcel of a land sale.
///
/// `reserved` is the address allowed to buy the parcel, or all zeroes
/// for an open parcel. The salt blinds the committed record so the
/// full sale list cannot be enumerated from published proofs.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LandParcel {
    pub x: u64,
    pub y: u64,
    pub size: u64,
    pub price: u128,
    #[serde(with = "addr_hex")]
    pub reserved: Address,
    #[serde(with = "hash_hex")]
    pub salt: Hash,
}

impl LandParcel {
    /// Compute the canonical leaf hash for this parcel.
    ///
    /// Packed layout, matching the on-chain verifier:
    /// `uint256 x || uint256 y || uint256 size || uint256 price ||
    /// address reserved || bytes32 salt`, all integers big-endian.
    pub fn leaf_hash(&self) -> Hash {
        let mut hasher = Keccak::v256();
        update_word(&mut hasher, self.x as u128);
        update_word(&mut hasher, self.y as u128);
        update_word(&mut hasher, self.size as u128);
        update_word(&mut hasher, self.price);
        hasher.update(&self.reserved);
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
