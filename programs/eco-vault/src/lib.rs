use anchor_lang::prelude::*;
pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
use instructions::*;
use state::Initiative;

declare_id!("EcoVLt8n4qkN1sVfKz3R6Wm2pJdXhAYuT9bGcQeL5rZ");

#[program]
pub mod eco_vault {
    use super::*;

    /// Creates the registry. The signer becomes the owner for good.
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize(ctx)
    }

    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<bool> {
        instructions::deposit(ctx, amount)
    }

    pub fn get_vault_balance(ctx: Context<GetVaultBalance>, principal: Pubkey) -> Result<u64> {
        instructions::get_vault_balance(ctx, principal)
    }

    pub fn register_initiative(ctx: Context<RegisterInitiative>, name: String) -> Result<u64> {
        instructions::register_initiative(ctx, name)
    }

    pub fn verify_initiative(ctx: Context<VerifyInitiative>, id: u64) -> Result<bool> {
        instructions::verify_initiative(ctx, id)
    }

    pub fn fund_initiative(ctx: Context<FundInitiative>, id: u64, amount: u64) -> Result<bool> {
        instructions::fund_initiative(ctx, id, amount)
    }

    /// Absent ids return `None` rather than an error.
    pub fn get_initiative_details(
        ctx: Context<GetInitiativeDetails>,
        id: u64,
    ) -> Result<Option<Initiative>> {
        instructions::get_initiative_details(ctx, id)
    }
}
