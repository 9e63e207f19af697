//! Common types and hex codecs

use thiserror::Error;

pub use landsale_merkle::Hash;

/// 20-byte account address.
pub type Address = [u8; 20];

/// Errors from parsing hex-encoded values out of JSON artifacts.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The string is not valid hexadecimal.
    #[error("invalid hex string {0:?}")]
    InvalidHex(String),

    /// The decoded value has the wrong width.
    #[error("expected {expected} bytes, got {actual}")]
    BadLength { expected: usize, actual: usize },
}

/// Format bytes as a `0x`-prefixed lowercase hex string.
pub fn to_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Parse a `0x`-prefixed (or bare) hex string into a 32-byte hash.
pub fn parse_hash(s: &str) -> Result<Hash, ParseError> {
    parse_fixed(s)
}

/// Parse a `0x`-prefixed (or bare) hex string into a 20-byte address.
pub fn parse_address(s: &str) -> Result<Address, ParseError> {
    parse_fixed(s)
}

fn parse_fixed<const N: usize>(s: &str) -> Result<[u8; N], ParseError> {
    let stripped = s.strip_prefix("0x").unwrap_or(s);
    let bytes = hex::decode(stripped).map_err(|_| ParseError::InvalidHex(s.to_string()))?;
    let actual = bytes.len();
    bytes
        .try_into()
        .map_err(|_| ParseError::BadLength {
            expected: N,
            actual,
        })
}

/// Serde adapter storing a 32-byte hash as a `0x` hex string.
pub mod hash_hex {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::{parse_hash, to_hex, Hash};

    pub fn serialize<S: Serializer>(value: &Hash, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&to_hex(value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Hash, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse_hash(&s).map_err(serde::de::Error::custom)
    }
}

/// Serde adapter storing a 20-byte address as a `0x` hex string.
pub mod addr_hex {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::{parse_address, to_hex, Address};

    pub fn serialize<S: Serializer>(value: &Address, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&to_hex(value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Address, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse_address(&s).map_err(serde::de::Error::custom)
    }
}
