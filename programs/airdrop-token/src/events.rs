use anchor_lang::prelude::*;

/// Event emitted when the token and its airdrop are initialized
#[event]
pub struct TokenInitialized {
    pub owner: Pubkey,
    pub mint: Pubkey,
    pub airdrop_vault: Pubkey,
    pub merkle_root: [u8; 32],
    pub free_mint_amount: u64,
    pub airdrop_supply: u64,
    pub end_timestamp: i64,
    pub timestamp: i64,
}

/// Event emitted when a claimant successfully claims their allocation
#[event]
pub struct AirdropClaimed {
    pub claimant: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

/// Event emitted when the unclaimed remainder is swept to the recovery destination
#[event]
pub struct AirdropEnded {
    pub recovery: Pubkey,
    pub recovery_token_account: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

/// Event emitted when a holder's voting weight moves to another delegate
#[event]
pub struct DelegateChanged {
    pub delegator: Pubkey,
    pub from_delegate: Pubkey,
    pub to_delegate: Pubkey,
    pub timestamp: i64,
}

/// Event emitted when the owner mints new supply
#[event]
pub struct TokensMinted {
    pub recipient: Pubkey,
    pub amount: u64,
    pub new_supply: u64,
    pub timestamp: i64,
}

/// Event emitted when ownership is transferred
#[event]
pub struct OwnerUpdated {
    pub old_owner: Pubkey,
    pub new_owner: Pubkey,
    pub timestamp: i64,
}
