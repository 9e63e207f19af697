//! Proofcheck - Re-verify a proof bundle against a published root
//!
//! Run before distributing a bundle, or against the root actually
//! stored on-chain: every entry's proof is replayed with the same
//! pairwise-hash ordering the verifier contract uses.

use std::env;
use std::fs;

use anyhow::{Context, Result};
use tracing::{error, info};

use landsale_core::{types::parse_hash, ProofBundle};

/// Proofcheck configuration
#[derive(Debug, Clone)]
struct Config {
    /// Bundle file to verify
    bundle_file: String,
    /// Expected root; falls back to the root recorded in the bundle
    expected_root: Option<String>,
}

impl Config {
    fn from_env() -> Self {
        Self {
            bundle_file: env::var("BUNDLE_FILE").unwrap_or_else(|_| "proofs.json".to_string()),
            expected_root: env::var("EXPECTED_ROOT").ok(),
        }
    }
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
    info!("        Proof Bundle Checker");
    info!("===========================================");

    let config = Config::from_env();

    let raw = fs::read_to_string(&config.bundle_file)
        .with_context(|| format!("reading {}", config.bundle_file))?;
    let bundle: ProofBundle = serde_json::from_str(&raw)?;

    let root = match &config.expected_root {
        Some(s) => parse_hash(s).context("parsing EXPECTED_ROOT")?,
        None => bundle.root_hash()?,
    };

    info!("  Bundle:  {}", config.bundle_file);
    info!("  Root:    0x{}", hex::encode(root));
    info!("  Entries: {}", bundle.entries.len());

    match bundle.verify_all(&root) {
        Ok(()) => {
            info!("All {} proofs verified", bundle.entries.len());
            Ok(())
        }
        Err(e) => {
            error!("Bundle verification failed: {}", e);
            std::process::exit(1);
        }
    }
}
