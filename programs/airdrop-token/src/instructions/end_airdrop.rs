use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};
use crate::constants::*;
use crate::errors::*;
use crate::events::*;
use crate::ledger;
use crate::states::*;

#[derive(Accounts)]
pub struct EndAirdrop<'info> {
    // Step 1: Owner must sign, checked against the stored owner in the handler
    pub owner: Signer<'info>,

    // Step 2: Token state must exist
    #[account(
        mut,
        seeds = [TOKEN_STATE_SEED],
        bump = token_state.bump
    )]
    pub token_state: Account<'info, TokenState>,

    // Step 3: Vault must match the token state's vault
    #[account(
        mut,
        address = token_state.airdrop_vault @ TokenError::VaultMismatch
    )]
    pub airdrop_vault: Account<'info, TokenAccount>,

    // Step 4: Recovery destination chosen by the owner for this call
    #[account(
        mut,
        constraint = recovery_token_account.mint == token_state.mint @ TokenError::MintMismatch,
        constraint = recovery_token_account.key() != token_state.airdrop_vault @ TokenError::VaultMismatch
    )]
    pub recovery_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

pub fn handle_end_airdrop(ctx: Context<EndAirdrop>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    // Step 1: Owner, end date and single-shot checks
    ctx.accounts
        .token_state
        .authorize_sweep(&ctx.accounts.owner.key(), now)?;

    // Step 2: Sweep whatever is left in the vault
    let remaining = ctx.accounts.airdrop_vault.amount;
    if remaining > 0 {
        ledger::transfer_from_vault(
            ctx.accounts.token_program.to_account_info(),
            ctx.accounts.airdrop_vault.to_account_info(),
            ctx.accounts.recovery_token_account.to_account_info(),
            ctx.accounts.token_state.to_account_info(),
            ctx.accounts.token_state.bump,
            remaining,
        )?;
    }

    // Step 3: Close the window, claims are rejected from now on
    ctx.accounts.token_state.record_sweep();

    emit!(AirdropEnded {
        recovery: ctx.accounts.recovery_token_account.owner,
        recovery_token_account: ctx.accounts.recovery_token_account.key(),
        amount: remaining,
        timestamp: now,
    });

    msg!(
        "Airdrop ended - Swept {} tokens to {}",
        remaining,
        ctx.accounts.recovery_token_account.key()
    );

    Ok(())
}
