use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use sha3::{Digest, Keccak256};

use crate::error::{ProofError, Result};

/// Domain tag prepended to every leaf, shared with the on-chain verifier
pub const CLAIM_LEAF_DOMAIN: &[u8] = b"airdrop_claim";

/// One line of the claimant list as it appears in the input file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationEntry {
    /// Base58 wallet address
    pub address: String,
    pub amount: u64,
}

/// A claimant's allocation with the address decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Allocation {
    pub claimant: [u8; 32],
    pub amount: u64,
}

impl Allocation {
    pub fn new(claimant: [u8; 32], amount: u64) -> Self {
        Self { claimant, amount }
    }

    /// keccak256(domain || claimant || amount_le), byte for byte what the
    /// program hashes in `claim`
    pub fn leaf(&self) -> [u8; 32] {
        Keccak256::new()
            .chain_update(CLAIM_LEAF_DOMAIN)
            .chain_update(self.claimant)
            .chain_update(self.amount.to_le_bytes())
            .finalize()
            .into()
    }

    pub fn address(&self) -> String {
        bs58::encode(self.claimant).into_string()
    }
}

impl TryFrom<&AllocationEntry> for Allocation {
    type Error = ProofError;

    fn try_from(entry: &AllocationEntry) -> Result<Self> {
        Ok(Self::new(parse_address(&entry.address)?, entry.amount))
    }
}

/// Decodes a base58 wallet address into its 32 raw bytes.
pub fn parse_address(address: &str) -> Result<[u8; 32]> {
    let trimmed = address.trim();
    let mut bytes = [0u8; 32];
    let written = bs58::decode(trimmed)
        .onto(&mut bytes)
        .map_err(|e| ProofError::InvalidAddress(trimmed.to_owned(), e.to_string()))?;
    if written != 32 {
        return Err(ProofError::InvalidAddress(
            trimmed.to_owned(),
            format!("expected 32 bytes, got {written}"),
        ));
    }
    Ok(bytes)
}

/// Decodes the claimant list, rejecting empty input and repeated addresses.
///
/// Claims are keyed by address on-chain, so a second entry for the same
/// address could never be claimed.
pub fn parse_allocations(entries: &[AllocationEntry]) -> Result<Vec<Allocation>> {
    if entries.is_empty() {
        return Err(ProofError::EmptyInput);
    }

    let mut seen = HashSet::with_capacity(entries.len());
    entries
        .iter()
        .map(|entry| {
            let allocation = Allocation::try_from(entry)?;
            if !seen.insert(allocation.claimant) {
                return Err(ProofError::DuplicateClaimant(allocation.address()));
            }
            Ok(allocation)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address(byte: u8) -> String {
        bs58::encode([byte; 32]).into_string()
    }

    #[test]
    fn test_parse_address_roundtrip() {
        let parsed = parse_address(&address(7)).unwrap();
        assert_eq!(parsed, [7u8; 32]);
    }

    #[test]
    fn test_parse_address_invalid() {
        assert!(parse_address("0OIl").is_err());
        assert!(parse_address(&bs58::encode([1u8; 20]).into_string()).is_err());
    }

    #[test]
    fn test_leaf_depends_on_amount_and_claimant() {
        let a = Allocation::new([1u8; 32], 1000);
        assert_ne!(a.leaf(), Allocation::new([1u8; 32], 1001).leaf());
        assert_ne!(a.leaf(), Allocation::new([2u8; 32], 1000).leaf());
    }

    #[test]
    fn test_parse_allocations_rejects_duplicates_and_empty() {
        let entries = vec![
            AllocationEntry { address: address(1), amount: 1000 },
            AllocationEntry { address: address(1), amount: 9000 },
        ];
        assert!(matches!(
            parse_allocations(&entries),
            Err(ProofError::DuplicateClaimant(_))
        ));
        assert!(matches!(parse_allocations(&[]), Err(ProofError::EmptyInput)));
    }
}
