use anchor_lang::prelude::*;
use crate::constants::*;
use crate::events::*;
use crate::states::*;

#[derive(Accounts)]
pub struct Delegate<'info> {
    #[account(mut)]
    pub delegator: Signer<'info>,

    #[account(
        init_if_needed,
        payer = delegator,
        space = DISCRIMINATOR_SIZE + VoteDelegation::INIT_SPACE,
        seeds = [DELEGATION_SEED, delegator.key().as_ref()],
        bump
    )]
    pub delegation: Account<'info, VoteDelegation>,

    pub system_program: Program<'info, System>,
}

pub fn handle_delegate(ctx: Context<Delegate>, delegatee: Pubkey) -> Result<()> {
    let delegator = ctx.accounts.delegator.key();
    let delegation = &mut ctx.accounts.delegation;
    delegation.bump = ctx.bumps.delegation;

    match delegation.redirect(delegator, delegatee) {
        Some(from_delegate) => {
            emit!(DelegateChanged {
                delegator,
                from_delegate,
                to_delegate: delegatee,
                timestamp: Clock::get()?.unix_timestamp,
            });
            msg!("Delegate changed: {} -> {}", from_delegate, delegatee);
        }
        None => msg!("Delegate unchanged: {}", delegatee),
    }

    Ok(())
}
