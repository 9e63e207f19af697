//! Claim records and proof artifacts for land sales and giveaways
//!
//! This crate turns domain records into the canonical 32-byte leaves
//! the claim tree commits to, and packages per-leaf proofs into the
//! JSON bundle distributed to end users. The packed byte layouts here
//! are a contract with the on-chain verifier and must not drift.

pub mod bundle;
pub mod claim;
pub mod land;
pub mod types;

pub use bundle::{BundleError, ProofBundle, ProofEntry};
pub use claim::AssetClaim;
pub use land::LandParcel;
pub use types::{Address, Hash, ParseError};
