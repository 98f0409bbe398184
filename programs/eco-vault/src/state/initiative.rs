use anchor_lang::prelude::*;
use crate::{constants::*, errors::ErrorCode};

/// A named funding target, one PDA per id.
#[account]
#[derive(Debug, PartialEq, Eq)]
pub struct Initiative {
    pub id: u64,             // From the registry counter, never reused
    pub name: String,
    pub verified: bool,      // Only verified initiatives accept funding
    pub total_funding: u64,  // Sum of all allocations in lamports
}

impl Initiative {
    pub const SIZE: usize = 8 + // id (u64)
    4 + MAX_NAME_LENGTH +       // name (string)
    1 +                         // verified (bool)
    8; // total_funding (u64)

    pub fn new(id: u64, name: String) -> Self {
        Self {
            id,
            name,
            verified: false,
            total_funding: 0,
        }
    }

    /// Total funding after adding `amount`, without applying it.
    pub fn funded_total(&self, amount: u64) -> Result<u64> {
        require!(self.verified, ErrorCode::NotVerified);
        self.total_funding
            .checked_add(amount)
            .ok_or_else(|| error!(ErrorCode::AmountOverflow))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn longest_name_fits_account_space() {
        let initiative = Initiative::new(u64::MAX, "x".repeat(MAX_NAME_LENGTH));
        let mut data = Vec::new();
        initiative.try_serialize(&mut data).unwrap();
        assert_eq!(data.len(), ANCHOR_DISCRIMINATOR + Initiative::SIZE);
    }
}
