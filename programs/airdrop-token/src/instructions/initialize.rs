use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{Mint, Token, TokenAccount};
use crate::constants::*;
use crate::events::*;
use crate::ledger;
use crate::states::*;

#[derive(Accounts)]
pub struct Initialize<'info> {
    // Step 1: Owner pays for account creation and signs
    #[account(mut)]
    pub owner: Signer<'info>,

    // Step 2: Create the singleton token state PDA
    #[account(
        init,
        payer = owner,
        space = TokenState::LEN,
        seeds = [TOKEN_STATE_SEED],
        bump
    )]
    pub token_state: Account<'info, TokenState>,

    // Step 3: Create the mint, only the token state can mint
    #[account(
        init,
        payer = owner,
        seeds = [MINT_SEED],
        bump,
        mint::decimals = TOKEN_DECIMALS,
        mint::authority = token_state
    )]
    pub mint: Account<'info, Mint>,

    // Step 4: Create the vault holding the airdrop-reserved supply
    #[account(
        init,
        payer = owner,
        seeds = [AIRDROP_VAULT_SEED],
        bump,
        token::mint = mint,
        token::authority = token_state
    )]
    pub airdrop_vault: Account<'info, TokenAccount>,

    // Step 5: Owner's token account receiving the free mint
    #[account(
        init,
        payer = owner,
        associated_token::mint = mint,
        associated_token::authority = owner
    )]
    pub owner_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

pub fn handle_initialize(ctx: Context<Initialize>, params: InitializeParams) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    params.validate(now)?;

    // Store ownership, root, window and mint policy
    let mut state = TokenState::new(
        ctx.accounts.owner.key(),
        ctx.accounts.mint.key(),
        ctx.accounts.airdrop_vault.key(),
        &params,
    );
    state.bump = ctx.bumps.token_state;
    state.mint_bump = ctx.bumps.mint;
    state.vault_bump = ctx.bumps.airdrop_vault;
    ctx.accounts.token_state.set_inner(state);

    let bump = ctx.bumps.token_state;

    // Mint the free supply to the owner and reserve the airdrop supply
    if params.free_mint_amount > 0 {
        ledger::mint_supply(
            ctx.accounts.token_program.to_account_info(),
            ctx.accounts.mint.to_account_info(),
            ctx.accounts.owner_token_account.to_account_info(),
            ctx.accounts.token_state.to_account_info(),
            bump,
            params.free_mint_amount,
        )?;
    }
    if params.airdrop_supply > 0 {
        ledger::mint_supply(
            ctx.accounts.token_program.to_account_info(),
            ctx.accounts.mint.to_account_info(),
            ctx.accounts.airdrop_vault.to_account_info(),
            ctx.accounts.token_state.to_account_info(),
            bump,
            params.airdrop_supply,
        )?;
    }

    emit!(TokenInitialized {
        owner: ctx.accounts.owner.key(),
        mint: ctx.accounts.mint.key(),
        airdrop_vault: ctx.accounts.airdrop_vault.key(),
        merkle_root: params.merkle_root,
        free_mint_amount: params.free_mint_amount,
        airdrop_supply: params.airdrop_supply,
        end_timestamp: params.end_timestamp,
        timestamp: now,
    });

    msg!(
        "Token initialized - Mint: {}, Airdrop supply: {}, Ends: {}",
        ctx.accounts.mint.key(),
        params.airdrop_supply,
        params.end_timestamp
    );

    Ok(())
}
