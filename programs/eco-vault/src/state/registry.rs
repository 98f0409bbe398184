use anchor_lang::prelude::*;
use crate::{constants::*, errors::ErrorCode, state::Initiative};

/// Owner and id counter. Initiatives live in their own accounts.
#[account]
#[derive(Debug)]
pub struct Registry {
    pub owner: Pubkey,         // Fixed at initialize
    pub initiative_count: u64, // Next id to hand out
    pub bump: u8,              // PDA bump seed
}

impl Registry {
    pub const SIZE: usize = 32 + // owner pubkey
        8 +                      // initiative_count (u64)
        1; // bump (u8)

    pub fn new(owner: Pubkey, bump: u8) -> Self {
        Self {
            owner,
            initiative_count: 0,
            bump,
        }
    }

    pub fn require_owner(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.owner, ErrorCode::OwnerOnly);
        Ok(())
    }

    /// Hands out the next id and builds the initiative stored under it.
    pub fn register(&mut self, caller: &Pubkey, name: String) -> Result<Initiative> {
        self.require_owner(caller)?;
        require!(name.len() <= MAX_NAME_LENGTH, ErrorCode::NameTooLong);

        let id = self.initiative_count;
        self.initiative_count = id.checked_add(1).ok_or(ErrorCode::RegistryFull)?;
        Ok(Initiative::new(id, name))
    }

    /// Marks an initiative as eligible for funding. Verifying twice is a no-op.
    ///
    /// `initiative` is `None` when no account exists under the requested id.
    pub fn verify(&self, caller: &Pubkey, initiative: Option<&mut Initiative>) -> Result<()> {
        self.require_owner(caller)?;
        let initiative = initiative.ok_or_else(|| error!(ErrorCode::NotFound))?;
        initiative.verified = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::error_code;

    fn registry() -> (Registry, Pubkey) {
        let owner = Pubkey::new_unique();
        (Registry::new(owner, 255), owner)
    }

    #[test]
    fn ids_follow_registration_order() {
        let (mut registry, owner) = registry();
        for (expected, name) in ["Solar", "", "Wind", "Solar"].iter().enumerate() {
            let initiative = registry.register(&owner, name.to_string()).unwrap();
            assert_eq!(initiative.id, expected as u64);
        }
        assert_eq!(registry.initiative_count, 4);
    }

    #[test]
    fn non_owner_cannot_register() {
        let (mut registry, _) = registry();
        let stranger = Pubkey::new_unique();

        let err = registry.register(&stranger, "Wind Farm Project".into()).unwrap_err();
        assert_eq!(error_code(&err), Some(100));
        assert_eq!(registry.initiative_count, 0);
    }

    #[test]
    fn long_name_is_rejected() {
        let (mut registry, owner) = registry();
        let err = registry
            .register(&owner, "x".repeat(MAX_NAME_LENGTH + 1))
            .unwrap_err();
        assert_eq!(error_code(&err), Some(105));
        assert_eq!(registry.initiative_count, 0);

        registry.register(&owner, "x".repeat(MAX_NAME_LENGTH)).unwrap();
    }

    #[test]
    fn exhausted_counter_is_full() {
        let (mut registry, owner) = registry();
        registry.initiative_count = u64::MAX;
        let err = registry.register(&owner, "One more".into()).unwrap_err();
        assert_eq!(error_code(&err), Some(107));
        assert_eq!(registry.initiative_count, u64::MAX);
    }

    #[test]
    fn account_size_does_not_grow_with_registrations() {
        let (mut registry, owner) = registry();
        for _ in 0..1_000 {
            registry.register(&owner, "x".repeat(MAX_NAME_LENGTH)).unwrap();
        }
        let mut data = Vec::new();
        registry.try_serialize(&mut data).unwrap();
        assert_eq!(data.len(), ANCHOR_DISCRIMINATOR + Registry::SIZE);
    }

    #[test]
    fn new_initiative_starts_unverified_and_unfunded() {
        let (mut registry, owner) = registry();
        let initiative = registry.register(&owner, "Solar Panel Project".into()).unwrap();

        assert_eq!(initiative.id, 0);
        assert_eq!(initiative.name, "Solar Panel Project");
        assert!(!initiative.verified);
        assert_eq!(initiative.total_funding, 0);
    }

    #[test]
    fn verify_is_owner_gated_and_idempotent() {
        let (mut registry, owner) = registry();
        let mut initiative = registry.register(&owner, "Solar Panel Project".into()).unwrap();

        let err = registry
            .verify(&Pubkey::new_unique(), Some(&mut initiative))
            .unwrap_err();
        assert_eq!(error_code(&err), Some(100));
        assert!(!initiative.verified);

        registry.verify(&owner, Some(&mut initiative)).unwrap();
        registry.verify(&owner, Some(&mut initiative)).unwrap();
        assert!(initiative.verified);
    }

    #[test]
    fn verify_checks_owner_before_existence() {
        let (registry, owner) = registry();
        let err = registry.verify(&Pubkey::new_unique(), None).unwrap_err();
        assert_eq!(error_code(&err), Some(100));

        let err = registry.verify(&owner, None).unwrap_err();
        assert_eq!(error_code(&err), Some(101));
    }
}
