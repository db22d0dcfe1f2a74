use anchor_lang::prelude::*;

use crate::constants::DISCRIMINATOR_SIZE;
use crate::errors::*;
use crate::merkle;
use crate::states::{AirdropWindow, ClaimStatus, MintPolicy};

/// Parameters fixed at initialization
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct InitializeParams {
    /// Minted to the owner at initialization
    pub free_mint_amount: u64,
    /// Minted to the airdrop vault at initialization
    pub airdrop_supply: u64,
    /// Root committing to every (claimant, amount) allocation
    pub merkle_root: [u8; 32],
    /// Earliest timestamp at which the owner may sweep unclaimed tokens
    pub end_timestamp: i64,
}

impl InitializeParams {
    /// Returns the initial total supply.
    pub fn validate(&self, now: i64) -> Result<u64> {
        require!(self.end_timestamp > now, TokenError::InvalidEndTimestamp);
        self.free_mint_amount
            .checked_add(self.airdrop_supply)
            .ok_or_else(|| error!(TokenError::ArithmeticOverflow))
    }
}

/// Singleton state of the token: ownership, airdrop lifecycle and mint policy
#[account]
#[derive(Debug, InitSpace)]
pub struct TokenState {
    /// Owner allowed to mint, sweep and hand over ownership
    pub owner: Pubkey, // 32 bytes

    /// Token mint, its authority is this account
    pub mint: Pubkey, // 32 bytes

    /// Token account holding the not yet claimed airdrop supply
    pub airdrop_vault: Pubkey, // 32 bytes

    /// Merkle root of the airdrop allocations, never rewritten
    pub merkle_root: [u8; 32], // 32 bytes

    /// Amount reserved for the airdrop at initialization
    pub airdrop_supply: u64, // 8 bytes

    /// Sum of all successful claims
    pub total_claimed: u64, // 8 bytes

    pub window: AirdropWindow, // 9 bytes

    pub mint_policy: MintPolicy, // 8 bytes

    /// Bump seeds for PDA verification
    pub bump: u8,
    pub mint_bump: u8,
    pub vault_bump: u8,
}

impl TokenState {
    /// Account size for rent
    pub const LEN: usize = DISCRIMINATOR_SIZE + Self::INIT_SPACE;

    pub fn new(
        owner: Pubkey,
        mint: Pubkey,
        airdrop_vault: Pubkey,
        params: &InitializeParams,
    ) -> Self {
        Self {
            owner,
            mint,
            airdrop_vault,
            merkle_root: params.merkle_root,
            airdrop_supply: params.airdrop_supply,
            total_claimed: 0,
            window: AirdropWindow::new(params.end_timestamp),
            mint_policy: MintPolicy::default(),
            bump: 0,
            mint_bump: 0,
            vault_bump: 0,
        }
    }

    pub fn authorize(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.owner, TokenError::Unauthorized);
        Ok(())
    }

    /// Reserved supply not claimed yet
    pub fn unclaimed(&self) -> u64 {
        self.airdrop_supply.saturating_sub(self.total_claimed)
    }

    /// Admits a claim and records it in `status`.
    ///
    /// All checks run before the first write: on error neither `self` nor
    /// `status` is modified.
    pub fn register_claim(
        &mut self,
        status: &mut ClaimStatus,
        claimant: Pubkey,
        amount: u64,
        proof: &[[u8; 32]],
        now: i64,
    ) -> Result<()> {
        self.window.ensure_open()?;
        status.ensure_unclaimed()?;

        let leaf = merkle::claim_leaf(&claimant, amount);
        require!(
            merkle::verify(&self.merkle_root, leaf, proof),
            TokenError::NotEligible
        );

        let total_claimed = self
            .total_claimed
            .checked_add(amount)
            .ok_or(TokenError::ArithmeticOverflow)?;
        require!(
            total_claimed <= self.airdrop_supply,
            TokenError::InsufficientBalance
        );

        status.mark_claimed(claimant, amount, now);
        self.total_claimed = total_claimed;

        Ok(())
    }

    pub fn authorize_mint(
        &self,
        caller: &Pubkey,
        now: i64,
        amount: u64,
        supply: u64,
    ) -> Result<()> {
        self.authorize(caller)?;
        self.mint_policy.check(now, amount, supply)
    }

    pub fn record_mint(&mut self, now: i64) {
        self.mint_policy.record(now);
    }

    pub fn authorize_sweep(&self, caller: &Pubkey, now: i64) -> Result<()> {
        self.authorize(caller)?;
        self.window.ensure_sweepable(now)
    }

    pub fn record_sweep(&mut self) {
        self.window.close();
    }

    /// Replaces the owner and returns the previous one.
    pub fn transfer_ownership(&mut self, caller: &Pubkey, new_owner: Pubkey) -> Result<Pubkey> {
        self.authorize(caller)?;
        Ok(std::mem::replace(&mut self.owner, new_owner))
    }
}
