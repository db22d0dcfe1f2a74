use anchor_lang::prelude::*;

/// Where a holder's voting weight currently points
#[account]
#[derive(Debug, Default, InitSpace)]
pub struct VoteDelegation {
    pub delegator: Pubkey,
    /// `Pubkey::default()` until the holder first delegates
    pub delegate: Pubkey,
    pub bump: u8,
}

impl VoteDelegation {
    /// Points the delegation at `to`.
    ///
    /// Returns the previous delegate when it changed, `None` when `to` was
    /// already the delegate.
    pub fn redirect(&mut self, delegator: Pubkey, to: Pubkey) -> Option<Pubkey> {
        self.delegator = delegator;
        if self.delegate == to {
            return None;
        }
        Some(std::mem::replace(&mut self.delegate, to))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_delegation_moves_from_default() {
        let mut delegation = VoteDelegation::default();
        let holder = Pubkey::new_unique();
        let delegate = Pubkey::new_unique();

        assert_eq!(delegation.redirect(holder, delegate), Some(Pubkey::default()));
        assert_eq!(delegation.delegate, delegate);
        assert_eq!(delegation.delegator, holder);
    }

    #[test]
    fn self_delegation_is_a_change() {
        let mut delegation = VoteDelegation::default();
        let holder = Pubkey::new_unique();

        assert_eq!(delegation.redirect(holder, holder), Some(Pubkey::default()));
        assert_eq!(delegation.redirect(holder, holder), None);
    }

    #[test]
    fn redelegation_reports_previous_delegate() {
        let mut delegation = VoteDelegation::default();
        let holder = Pubkey::new_unique();
        let first = Pubkey::new_unique();
        let second = Pubkey::new_unique();

        delegation.redirect(holder, first);
        assert_eq!(delegation.redirect(holder, second), Some(first));
        assert_eq!(delegation.delegate, second);
    }
}
