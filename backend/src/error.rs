use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProofError {
    #[error("Empty input provided")]
    EmptyInput,
    #[error("Invalid address {0}: {1}")]
    InvalidAddress(String, String),
    #[error("Duplicate claimant {0}")]
    DuplicateClaimant(String),
    #[error("Claimant {0} is not in the tree")]
    UnknownClaimant(String),
    #[error("Invalid digest {0}")]
    InvalidDigest(String),
    #[error("io Error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Serde Error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ProofError>;
