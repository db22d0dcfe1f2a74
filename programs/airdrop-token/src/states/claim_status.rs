use anchor_lang::prelude::*;

use crate::errors::*;

/// Claim registry entry for one address.
///
/// Created zeroed (unclaimed) the first time the address is touched and
/// flipped to claimed exactly once.
#[account]
#[derive(Debug, Default, InitSpace)]
pub struct ClaimStatus {
    pub claimant: Pubkey,
    pub amount: u64,
    pub claimed_at: i64,
    pub claimed: bool,
    pub bump: u8,
}

impl ClaimStatus {
    pub fn ensure_unclaimed(&self) -> Result<()> {
        require!(!self.claimed, TokenError::AlreadyClaimed);
        Ok(())
    }

    pub(crate) fn mark_claimed(&mut self, claimant: Pubkey, amount: u64, now: i64) {
        self.claimant = claimant;
        self.amount = amount;
        self.claimed_at = now;
        self.claimed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_entry_is_unclaimed() {
        let status = ClaimStatus::default();
        assert!(status.ensure_unclaimed().is_ok());
    }

    #[test]
    fn marked_entry_rejects_replay() {
        let mut status = ClaimStatus::default();
        let claimant = Pubkey::new_unique();
        status.mark_claimed(claimant, 1000, 1_700_000_000);

        assert_eq!(status.claimant, claimant);
        assert_eq!(status.claimed_at, 1_700_000_000);
        assert_token_error(status.ensure_unclaimed(), TokenError::AlreadyClaimed);
    }
}
