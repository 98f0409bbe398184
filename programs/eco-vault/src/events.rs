use anchor_lang::prelude::*;

#[event]
pub struct VaultDeposited {
    pub depositor: Pubkey,
    pub amount: u64,
    pub balance: u64,
}

#[event]
pub struct InitiativeRegistered {
    pub id: u64,
    pub name: String,
}

#[event]
pub struct InitiativeVerified {
    pub id: u64,
}

#[event]
pub struct InitiativeFunded {
    pub id: u64,
    pub funder: Pubkey,
    pub amount: u64,
    pub total_funding: u64, // Initiative total after this allocation
}
