#![forbid(unsafe_code)]

use std::fs;
use std::path::{Path, PathBuf};

use airdrop_backend::{parse_allocations, AllocationEntry, ClaimProofs};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "airdrop-proofs")]
#[command(about = "Build the airdrop Merkle root and claim proofs", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build the tree from a JSON list of {address, amount} entries
    Build {
        /// Input JSON file with the claimant list
        #[arg(short, long)]
        input: PathBuf,

        /// Output JSON file for the root and proofs
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Check one claimant's proof against the root of a proofs file
    Verify {
        /// Proofs JSON file produced by `build`
        #[arg(short, long)]
        proofs: PathBuf,

        /// Base58 address of the claimant
        #[arg(short, long)]
        address: String,
    },
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Build { input, output } => build(&input, &output),
        Commands::Verify { proofs, address } => verify(&proofs, &address),
    }
}

fn build(input: &Path, output: &Path) -> Result<()> {
    info!(?input, "reading claimant list");
    let contents = fs::read_to_string(input).context("Failed to read input file")?;
    let entries: Vec<AllocationEntry> =
        serde_json::from_str(&contents).context("Failed to parse claimant list")?;

    let allocations = parse_allocations(&entries)?;
    let total: u128 = allocations.iter().map(|a| u128::from(a.amount)).sum();
    info!(claimants = allocations.len(), total, "building merkle tree");

    let proofs = ClaimProofs::generate(&allocations)?;
    proofs.write(output).context("Failed to write proofs file")?;

    info!(root = %proofs.root, ?output, "proofs written");
    println!("{}", proofs.root);
    Ok(())
}

fn verify(path: &Path, address: &str) -> Result<()> {
    let proofs = ClaimProofs::read(path).context("Failed to read proofs file")?;
    let root = proofs.root_bytes()?;
    let claim = proofs.get(address)?;

    if !claim.verify(&root)? {
        warn!(address, amount = claim.amount, "proof does not match root");
        bail!("Proof for {} does not verify against {}", address, proofs.root);
    }

    info!(address, amount = claim.amount, "proof verifies");
    Ok(())
}
