//! Balance and supply changes, delegated to the SPL Token program.
//!
//! Every call is signed by the `TokenState` PDA, which is both the mint
//! authority and the owner of the airdrop vault.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, MintTo, Transfer};

use crate::constants::TOKEN_STATE_SEED;

/// Moves `amount` out of the airdrop vault.
pub fn transfer_from_vault<'info>(
    token_program: AccountInfo<'info>,
    vault: AccountInfo<'info>,
    to: AccountInfo<'info>,
    token_state: AccountInfo<'info>,
    bump: u8,
    amount: u64,
) -> Result<()> {
    let bump = [bump];
    let seeds: &[&[u8]] = &[TOKEN_STATE_SEED, &bump];
    let signer = &[seeds];

    let cpi_accounts = Transfer {
        from: vault,
        to,
        authority: token_state,
    };
    let cpi_ctx = CpiContext::new_with_signer(token_program, cpi_accounts, signer);

    token::transfer(cpi_ctx, amount)
}

/// Mints `amount` new tokens into `to`, growing the total supply.
pub fn mint_supply<'info>(
    token_program: AccountInfo<'info>,
    mint: AccountInfo<'info>,
    to: AccountInfo<'info>,
    token_state: AccountInfo<'info>,
    bump: u8,
    amount: u64,
) -> Result<()> {
    let bump = [bump];
    let seeds: &[&[u8]] = &[TOKEN_STATE_SEED, &bump];
    let signer = &[seeds];

    let cpi_accounts = MintTo {
        mint,
        to,
        authority: token_state,
    };
    let cpi_ctx = CpiContext::new_with_signer(token_program, cpi_accounts, signer);

    token::mint_to(cpi_ctx, amount)
}
