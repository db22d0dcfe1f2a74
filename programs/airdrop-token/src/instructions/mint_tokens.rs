use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};
use crate::constants::*;
use crate::errors::*;
use crate::events::*;
use crate::ledger;
use crate::states::*;

#[derive(Accounts)]
pub struct MintTokens<'info> {
    // Step 1: Owner must sign, checked against the stored owner in the handler
    pub owner: Signer<'info>,

    // Step 2: Token state carries the mint policy
    #[account(
        mut,
        seeds = [TOKEN_STATE_SEED],
        bump = token_state.bump
    )]
    pub token_state: Account<'info, TokenState>,

    // Step 3: Mint must be the token's mint, its supply is the cap base
    #[account(
        mut,
        address = token_state.mint @ TokenError::MintMismatch
    )]
    pub mint: Account<'info, Mint>,

    #[account(
        mut,
        constraint = recipient_token_account.mint == mint.key() @ TokenError::MintMismatch
    )]
    pub recipient_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

pub fn handle_mint_tokens(ctx: Context<MintTokens>, amount: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let supply = ctx.accounts.mint.supply;

    // Step 1: Owner, interval and cap checks
    ctx.accounts
        .token_state
        .authorize_mint(&ctx.accounts.owner.key(), now, amount, supply)?;
    let new_supply = supply
        .checked_add(amount)
        .ok_or(TokenError::ArithmeticOverflow)?;

    // Step 2: Mint, zero only restarts the interval
    if amount > 0 {
        ledger::mint_supply(
            ctx.accounts.token_program.to_account_info(),
            ctx.accounts.mint.to_account_info(),
            ctx.accounts.recipient_token_account.to_account_info(),
            ctx.accounts.token_state.to_account_info(),
            ctx.accounts.token_state.bump,
            amount,
        )?;
    }

    // Step 3: Restart the interval
    ctx.accounts.token_state.record_mint(now);

    emit!(TokensMinted {
        recipient: ctx.accounts.recipient_token_account.owner,
        amount,
        new_supply,
        timestamp: now,
    });

    msg!("Minted {} tokens, supply is now {}", amount, new_supply);

    Ok(())
}
