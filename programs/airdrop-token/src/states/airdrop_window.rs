use anchor_lang::prelude::*;

use crate::errors::*;

/// Claim window of the airdrop: `Active` until the owner sweeps it, then `Ended`
#[derive(
    AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace,
)]
pub struct AirdropWindow {
    /// Earliest unix timestamp at which the unclaimed remainder may be swept
    pub end_timestamp: i64,
    /// Set once by the sweep, never cleared
    pub ended: bool,
}

impl AirdropWindow {
    pub fn new(end_timestamp: i64) -> Self {
        Self {
            end_timestamp,
            ended: false,
        }
    }

    /// Claims are accepted until the sweep, even past `end_timestamp`.
    pub fn ensure_open(&self) -> Result<()> {
        require!(!self.ended, TokenError::AirdropAlreadyEnded);
        Ok(())
    }

    pub fn ensure_sweepable(&self, now: i64) -> Result<()> {
        require!(now >= self.end_timestamp, TokenError::AirdropStillActive);
        require!(!self.ended, TokenError::AirdropAlreadyEnded);
        Ok(())
    }

    pub fn close(&mut self) {
        self.ended = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const END: i64 = 1_800_000_000;

    #[test]
    fn sweep_waits_for_end_timestamp() {
        let window = AirdropWindow::new(END);
        assert_token_error(window.ensure_sweepable(END - 1), TokenError::AirdropStillActive);
        assert!(window.ensure_sweepable(END).is_ok());
    }

    #[test]
    fn claims_stay_open_after_end_timestamp_until_closed() {
        let mut window = AirdropWindow::new(END);
        assert!(window.ensure_open().is_ok());

        window.close();
        assert_token_error(window.ensure_open(), TokenError::AirdropAlreadyEnded);
        assert_token_error(window.ensure_sweepable(END + 1), TokenError::AirdropAlreadyEnded);
    }

    #[test]
    fn early_sweep_reports_still_active_even_when_ended() {
        let mut window = AirdropWindow::new(END);
        window.close();
        assert_token_error(window.ensure_sweepable(END - 1), TokenError::AirdropStillActive);
    }
}
