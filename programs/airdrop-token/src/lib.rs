//! Governance token with a capped, rate-limited mint and a one-time Merkle airdrop.
//!
//! A singleton [`TokenState`](states::TokenState) owns the mint and a vault
//! holding the airdrop-reserved supply. Claimants prove their allocation
//! against the committed root; after the end date the owner sweeps whatever
//! is left to a recovery account.

#![allow(clippy::result_large_err)]
use anchor_lang::prelude::*;
use instructions::*;
use states::InitializeParams;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod ledger;
pub mod merkle;
pub mod states;

declare_id!("DAkcXugoBvzHBVrvPr4kSEx5tEvLDNJ5dn3jMfMu6yEw");

#[program]
pub mod airdrop_token {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>, params: InitializeParams) -> Result<()> {
        handle_initialize(ctx, params)
    }

    /// Claims the signer's allocation and points its voting weight at `delegate`.
    pub fn claim(
        ctx: Context<Claim>,
        amount: u64,
        delegate: Pubkey,
        proof: Vec<[u8; 32]>,
    ) -> Result<()> {
        handle_claim(ctx, amount, delegate, proof)
    }

    /// Sweeps the unclaimed remainder to the recovery account. Owner only,
    /// after the end date, once.
    pub fn end_airdrop(ctx: Context<EndAirdrop>) -> Result<()> {
        handle_end_airdrop(ctx)
    }

    pub fn mint_tokens(ctx: Context<MintTokens>, amount: u64) -> Result<()> {
        handle_mint_tokens(ctx, amount)
    }

    pub fn delegate(ctx: Context<Delegate>, delegatee: Pubkey) -> Result<()> {
        handle_delegate(ctx, delegatee)
    }

    pub fn update_owner(ctx: Context<UpdateOwner>, new_owner: Pubkey) -> Result<()> {
        handle_update_owner(ctx, new_owner)
    }
}
