use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{Mint, Token, TokenAccount};
use crate::constants::*;
use crate::errors::*;
use crate::events::*;
use crate::ledger;
use crate::states::*;

#[derive(Accounts)]
pub struct Claim<'info> {
    // Step 1: Claimant signs and pays for its registry entry
    #[account(mut)]
    pub claimant: Signer<'info>,

    // Step 2: Token state holds the root and the airdrop window
    #[account(
        mut,
        seeds = [TOKEN_STATE_SEED],
        bump = token_state.bump
    )]
    pub token_state: Account<'info, TokenState>,

    #[account(address = token_state.mint @ TokenError::MintMismatch)]
    pub mint: Account<'info, Mint>,

    // Step 3: Vault must match the token state's vault
    #[account(
        mut,
        address = token_state.airdrop_vault @ TokenError::VaultMismatch
    )]
    pub airdrop_vault: Account<'info, TokenAccount>,

    // Step 4: Claim registry entry, created unclaimed on first touch
    #[account(
        init_if_needed,
        payer = claimant,
        space = DISCRIMINATOR_SIZE + ClaimStatus::INIT_SPACE,
        seeds = [CLAIM_STATUS_SEED, claimant.key().as_ref()],
        bump
    )]
    pub claim_status: Account<'info, ClaimStatus>,

    // Step 5: Claimant's delegation record
    #[account(
        init_if_needed,
        payer = claimant,
        space = DISCRIMINATOR_SIZE + VoteDelegation::INIT_SPACE,
        seeds = [DELEGATION_SEED, claimant.key().as_ref()],
        bump
    )]
    pub delegation: Account<'info, VoteDelegation>,

    // Step 6: Claimant's token account to receive tokens
    #[account(
        init_if_needed,
        payer = claimant,
        associated_token::mint = mint,
        associated_token::authority = claimant
    )]
    pub claimant_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

pub fn handle_claim(
    ctx: Context<Claim>,
    amount: u64,
    delegate: Pubkey,
    proof: Vec<[u8; 32]>,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let claimant = ctx.accounts.claimant.key();

    // Step 1: Check window, replay and proof, then mark claimed
    ctx.accounts.token_state.register_claim(
        &mut ctx.accounts.claim_status,
        claimant,
        amount,
        &proof,
        now,
    )?;
    ctx.accounts.claim_status.bump = ctx.bumps.claim_status;

    // Step 2: Transfer the allocation out of the vault
    ledger::transfer_from_vault(
        ctx.accounts.token_program.to_account_info(),
        ctx.accounts.airdrop_vault.to_account_info(),
        ctx.accounts.claimant_token_account.to_account_info(),
        ctx.accounts.token_state.to_account_info(),
        ctx.accounts.token_state.bump,
        amount,
    )?;

    // Step 3: Point the claimant's voting weight at the requested delegate
    let delegation = &mut ctx.accounts.delegation;
    delegation.bump = ctx.bumps.delegation;
    if let Some(from_delegate) = delegation.redirect(claimant, delegate) {
        emit!(DelegateChanged {
            delegator: claimant,
            from_delegate,
            to_delegate: delegate,
            timestamp: now,
        });
    }

    emit!(AirdropClaimed {
        claimant,
        amount,
        timestamp: now,
    });

    msg!(
        "Claim successful - Wallet: {}, Amount: {}, Delegate: {}",
        claimant,
        amount,
        delegate
    );

    Ok(())
}
