//! Rootgen - Build the claim tree and write the proof bundle
//!
//! One-shot tool run after a sale's claim data is finalized: reads the
//! input records, encodes the canonical leaves, builds the sorted
//! Merkle tree, prints the root to publish on-chain, and writes the
//! proof bundle file distributed to claimants.

use std::env;
use std::fs;

use anyhow::{bail, Context, Result};
use tracing::info;

use landsale_core::{types::parse_hash, AssetClaim, Hash, LandParcel, ProofBundle};
use landsale_merkle::MerkleTree;

/// What the input file contains.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum InputKind {
    /// JSON array of salted land parcels
    Lands,
    /// JSON array of giveaway claims
    Claims,
    /// JSON array of pre-encoded 0x-prefixed leaf hashes
    Leaves,
}

impl InputKind {
    fn parse(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "lands" => Ok(Self::Lands),
            "claims" => Ok(Self::Claims),
            "leaves" => Ok(Self::Leaves),
            other => bail!("unknown INPUT_KIND {other:?} (expected lands, claims or leaves)"),
        }
    }
}

/// Rootgen configuration
#[derive(Debug, Clone)]
struct Config {
    /// Input JSON file with claim records
    input_file: String,
    /// What the input file contains
    input_kind: String,
    /// Where to write the proof bundle
    output_file: String,
}

impl Config {
    fn from_env() -> Self {
        Self {
            input_file: env::var("INPUT_FILE").unwrap_or_else(|_| "lands.json".to_string()),
            input_kind: env::var("INPUT_KIND").unwrap_or_else(|_| "lands".to_string()),
            output_file: env::var("OUTPUT_FILE").unwrap_or_else(|_| "proofs.json".to_string()),
        }
    }
}

fn load_leaves(config: &Config, kind: InputKind) -> Result<Vec<Hash>> {
    let raw = fs::read_to_string(&config.input_file)
        .with_context(|| format!("reading {}", config.input_file))?;

    let leaves = match kind {
        InputKind::Lands => {
            let lands: Vec<LandParcel> = serde_json::from_str(&raw)?;
            info!("Loaded {} land parcels", lands.len());
            lands.iter().map(LandParcel::leaf_hash).collect()
        }
        InputKind::Claims => {
            let claims: Vec<AssetClaim> = serde_json::from_str(&raw)?;
            info!("Loaded {} asset claims", claims.len());
            claims.iter().map(AssetClaim::leaf_hash).collect()
        }
        InputKind::Leaves => {
            let hashes: Vec<String> = serde_json::from_str(&raw)?;
            info!("Loaded {} pre-encoded leaves", hashes.len());
            hashes
                .iter()
                .map(|s| parse_hash(s))
                .collect::<Result<Vec<_>, _>>()?
        }
    };

    Ok(leaves)
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("===========================================");
    info!("        Land Sale Root Generator");
    info!("===========================================");

    let config = Config::from_env();
    let kind = InputKind::parse(&config.input_kind)?;

    info!("  Input:  {} ({:?})", config.input_file, kind);
    info!("  Output: {}", config.output_file);

    let leaves = load_leaves(&config, kind)?;
    let tree = MerkleTree::build(&leaves)?;

    info!("Merkle root: 0x{}", hex::encode(tree.root()));

    let bundle = ProofBundle::from_tree(&tree)?;

    // Re-check the bundle before it leaves the building.
    bundle.verify_all(&tree.root())?;

    let json = serde_json::to_string_pretty(&bundle)?;
    fs::write(&config.output_file, json)
        .with_context(|| format!("writing {}", config.output_file))?;

    info!(
        "Wrote {} proofs to {}",
        bundle.entries.len(),
        config.output_file
    );

    Ok(())
}
