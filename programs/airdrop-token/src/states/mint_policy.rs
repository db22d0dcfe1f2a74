use anchor_lang::prelude::*;

use crate::constants::{BPS_DENOMINATOR, MINIMUM_MINT_INTERVAL, MINT_CAP_BPS};
use crate::errors::*;

/// Rate and amount limits on owner minting
#[derive(
    AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace,
)]
pub struct MintPolicy {
    /// Unix timestamp of the last successful mint (0 until the first one)
    pub last_mint_timestamp: i64,
}

impl MintPolicy {
    /// Earliest timestamp at which the next mint is allowed
    pub fn next_mint_at(&self) -> i64 {
        self.last_mint_timestamp.saturating_add(MINIMUM_MINT_INTERVAL)
    }

    /// floor(supply * MINT_CAP_BPS / BPS_DENOMINATOR)
    pub fn cap(supply: u64) -> u64 {
        let cap = u128::from(supply) * u128::from(MINT_CAP_BPS) / u128::from(BPS_DENOMINATOR);
        // MINT_CAP_BPS <= BPS_DENOMINATOR keeps the cap within the supply
        u64::try_from(cap).unwrap_or(u64::MAX)
    }

    /// Checks both limits without touching the policy.
    pub fn check(&self, now: i64, amount: u64, supply: u64) -> Result<()> {
        require!(now >= self.next_mint_at(), TokenError::MintTooSoon);
        require!(amount <= Self::cap(supply), TokenError::MintExceedsMaximum);
        Ok(())
    }

    pub fn record(&mut self, now: i64) {
        self.last_mint_timestamp = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUPPLY: u64 = 1_000_000_000;

    #[test]
    fn cap_is_two_percent_rounded_down() {
        assert_eq!(MintPolicy::cap(SUPPLY), 20_000_000);
        assert_eq!(MintPolicy::cap(49), 0);
        assert_eq!(MintPolicy::cap(50), 1);
        assert_eq!(MintPolicy::cap(u64::MAX), u64::MAX / 50);
    }

    #[test]
    fn first_mint_only_limited_by_cap() {
        let policy = MintPolicy::default();
        let now = 1_700_000_000;

        assert!(policy.check(now, MintPolicy::cap(SUPPLY), SUPPLY).is_ok());
        assert_token_error(
            policy.check(now, MintPolicy::cap(SUPPLY) + 1, SUPPLY),
            TokenError::MintExceedsMaximum,
        );
    }

    #[test]
    fn interval_gates_next_mint() {
        let mut policy = MintPolicy::default();
        let now = 1_700_000_000;
        policy.record(now);

        assert_eq!(policy.next_mint_at(), now + MINIMUM_MINT_INTERVAL);
        assert_token_error(policy.check(now + 1, 0, SUPPLY), TokenError::MintTooSoon);
        assert_token_error(
            policy.check(now + MINIMUM_MINT_INTERVAL - 1, 1, SUPPLY),
            TokenError::MintTooSoon,
        );
        assert!(policy.check(now + MINIMUM_MINT_INTERVAL, 1, SUPPLY).is_ok());
    }

    #[test]
    fn too_soon_is_reported_before_cap() {
        let mut policy = MintPolicy::default();
        policy.record(1_700_000_000);

        assert_token_error(
            policy.check(1_700_000_001, u64::MAX, SUPPLY),
            TokenError::MintTooSoon,
        );
    }

    #[test]
    fn failed_check_leaves_policy_untouched() {
        let policy = MintPolicy { last_mint_timestamp: 10 };
        let before = policy;
        let _ = policy.check(11, u64::MAX, SUPPLY);
        assert_eq!(policy, before);
    }
}
