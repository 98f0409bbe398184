use anchor_lang::prelude::*;
use crate::{constants::*, state::*};

pub fn get_initiative_details(
    ctx: Context<GetInitiativeDetails>,
    _id: u64,
) -> Result<Option<Initiative>> {
    load::<Initiative>(&ctx.accounts.initiative.to_account_info())
}

#[derive(Accounts)]
#[instruction(id: u64)]
pub struct GetInitiativeDetails<'info> {
    /// CHECK: may not exist; only read when owned by this program
    #[account(
        seeds = [INITIATIVE_SEED, &id.to_le_bytes()],
        bump
    )]
    pub initiative: UncheckedAccount<'info>,
}
