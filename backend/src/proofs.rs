use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::allocation::{parse_address, Allocation};
use crate::error::{ProofError, Result};
use crate::tree::{verify, ClaimTree};

/// Proof bundle for a single claimant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimProof {
    pub claimant: String,
    pub amount: u64,
    /// Sibling digests from leaf to root, `0x`-prefixed hex
    pub proof: Vec<String>,
}

impl ClaimProof {
    pub fn allocation(&self) -> Result<Allocation> {
        Ok(Allocation::new(parse_address(&self.claimant)?, self.amount))
    }

    pub fn proof_bytes(&self) -> Result<Vec<[u8; 32]>> {
        self.proof.iter().map(|node| decode_digest(node)).collect()
    }

    pub fn verify(&self, root: &[u8; 32]) -> Result<bool> {
        let leaf = self.allocation()?.leaf();
        Ok(verify(root, leaf, &self.proof_bytes()?))
    }
}

/// Root plus every claimant's proof, keyed by address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimProofs {
    pub root: String,
    pub claims: BTreeMap<String, ClaimProof>,
}

impl ClaimProofs {
    pub fn generate(allocations: &[Allocation]) -> Result<Self> {
        let tree = ClaimTree::new(allocations.iter().map(Allocation::leaf).collect())?;

        let claims = allocations
            .iter()
            .map(|allocation| {
                let address = allocation.address();
                let proof = tree
                    .proof(&allocation.leaf())
                    .ok_or_else(|| ProofError::UnknownClaimant(address.clone()))?;
                let entry = ClaimProof {
                    claimant: address.clone(),
                    amount: allocation.amount,
                    proof: proof.iter().map(encode_digest).collect(),
                };
                Ok((address, entry))
            })
            .collect::<Result<BTreeMap<_, _>>>()?;

        Ok(Self {
            root: encode_digest(&tree.root()),
            claims,
        })
    }

    pub fn root_bytes(&self) -> Result<[u8; 32]> {
        decode_digest(&self.root)
    }

    pub fn get(&self, address: &str) -> Result<&ClaimProof> {
        self.claims
            .get(address.trim())
            .ok_or_else(|| ProofError::UnknownClaimant(address.to_owned()))
    }

    pub fn read(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

pub fn encode_digest(digest: &[u8; 32]) -> String {
    format!("0x{}", hex::encode(digest))
}

pub fn decode_digest(encoded: &str) -> Result<[u8; 32]> {
    let cleaned = encoded.trim();
    let cleaned = cleaned.strip_prefix("0x").unwrap_or(cleaned);
    let mut digest = [0u8; 32];
    hex::decode_to_slice(cleaned, &mut digest)
        .map_err(|_| ProofError::InvalidDigest(encoded.to_owned()))?;
    Ok(digest)
}
