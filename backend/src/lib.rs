//! Offline generator for the airdrop's Merkle root and per-claimant proofs.
//!
//! Leaves and interior nodes are hashed exactly like the on-chain verifier
//! does; any drift between the two makes every claim fail.

pub mod allocation;
pub mod error;
pub mod proofs;
pub mod tree;

pub use allocation::{parse_address, parse_allocations, Allocation, AllocationEntry};
pub use error::{ProofError, Result};
pub use proofs::{decode_digest, encode_digest, ClaimProof, ClaimProofs};
pub use tree::{hash_sorted_pair, verify, ClaimTree};
