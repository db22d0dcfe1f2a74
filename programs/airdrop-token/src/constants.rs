/// Program constants for the airdrop token

/// PDA seed for the singleton token state account
pub const TOKEN_STATE_SEED: &[u8] = b"token_state";

/// PDA seed for the token mint
pub const MINT_SEED: &[u8] = b"mint";

/// PDA seed for the token account holding the airdrop-reserved supply
pub const AIRDROP_VAULT_SEED: &[u8] = b"airdrop_vault";

/// PDA seed for per-claimant claim status accounts
pub const CLAIM_STATUS_SEED: &[u8] = b"claim_status";

/// PDA seed for per-holder delegation records
pub const DELEGATION_SEED: &[u8] = b"delegation";

/// Domain tag prepended to every claim leaf before hashing
pub const CLAIM_LEAF_DOMAIN: &[u8] = b"airdrop_claim";

/// Decimals of the token mint
pub const TOKEN_DECIMALS: u8 = 9;

/// Minimum number of seconds between two owner mints (365 days)
pub const MINIMUM_MINT_INTERVAL: i64 = 365 * 24 * 60 * 60;

/// Maximum mint per interval, in basis points of the current supply (2%)
pub const MINT_CAP_BPS: u64 = 200;

/// Basis points denominator
pub const BPS_DENOMINATOR: u64 = 10_000;

/// Account discriminator size (Anchor adds this automatically)
pub const DISCRIMINATOR_SIZE: usize = 8;
