use anchor_lang::prelude::*;
use crate::constants::*;
use crate::events::*;
use crate::states::*;

#[derive(Accounts)]
pub struct UpdateOwner<'info> {
    // Step 1: Token state must exist
    #[account(
        mut,
        seeds = [TOKEN_STATE_SEED],
        bump = token_state.bump
    )]
    pub token_state: Account<'info, TokenState>,

    // Step 2: Current owner must sign
    pub owner: Signer<'info>,
}

pub fn handle_update_owner(ctx: Context<UpdateOwner>, new_owner: Pubkey) -> Result<()> {
    // Step 1: Verify signer is the owner and swap in the new one
    let old_owner = ctx
        .accounts
        .token_state
        .transfer_ownership(&ctx.accounts.owner.key(), new_owner)?;

    // Step 2: Emit owner updated event
    emit!(OwnerUpdated {
        old_owner,
        new_owner,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Owner updated: {} -> {}", old_owner, new_owner);

    Ok(())
}
