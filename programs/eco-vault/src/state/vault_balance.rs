use anchor_lang::prelude::*;
use crate::errors::ErrorCode;

/// Unallocated funds of one depositor. The lamports themselves sit in this account.
#[account]
#[derive(Default, Debug)]
pub struct VaultBalance {
    pub depositor: Pubkey,
    pub amount: u64, // Unallocated lamports, rent excluded
}

impl VaultBalance {
    pub const SIZE: usize = 32 + // depositor pubkey
        8; // amount (u64)

    pub fn credit(&mut self, amount: u64) -> Result<u64> {
        require!(amount > 0, ErrorCode::InvalidAmount);
        self.amount = self
            .amount
            .checked_add(amount)
            .ok_or(ErrorCode::AmountOverflow)?;
        Ok(self.amount)
    }

    /// Balance left after taking `amount`, without applying it.
    pub fn debited(&self, amount: u64) -> Result<u64> {
        self.amount
            .checked_sub(amount)
            .ok_or_else(|| error!(ErrorCode::InsufficientBalance))
    }

    pub fn debit(&mut self, amount: u64) -> Result<u64> {
        self.amount = self.debited(amount)?;
        Ok(self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::error_code;

    #[test]
    fn credit_accumulates_deposits() {
        let mut vault = VaultBalance::default();
        assert_eq!(vault.credit(500).unwrap(), 500);
        assert_eq!(vault.credit(250).unwrap(), 750);
        assert_eq!(vault.amount, 750);
    }

    #[test]
    fn zero_credit_is_rejected() {
        let mut vault = VaultBalance { amount: 40, ..Default::default() };
        let err = vault.credit(0).unwrap_err();
        assert_eq!(error_code(&err), Some(104));
        assert_eq!(vault.amount, 40);
    }

    #[test]
    fn credit_overflow_keeps_balance() {
        let mut vault = VaultBalance { amount: u64::MAX, ..Default::default() };
        let err = vault.credit(1).unwrap_err();
        assert_eq!(error_code(&err), Some(106));
        assert_eq!(vault.amount, u64::MAX);
    }

    #[test]
    fn debit_beyond_balance_fails() {
        let mut vault = VaultBalance { amount: 100, ..Default::default() };
        let err = vault.debit(101).unwrap_err();
        assert_eq!(error_code(&err), Some(102));
        assert_eq!(vault.amount, 100);

        assert_eq!(vault.debit(100).unwrap(), 0);
    }
}
