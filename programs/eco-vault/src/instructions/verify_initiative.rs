use anchor_lang::prelude::*;
use crate::{constants::*, events::InitiativeVerified, state::*};

pub fn verify_initiative(ctx: Context<VerifyInitiative>, id: u64) -> Result<bool> {
    let caller = ctx.accounts.caller.key();
    let info = ctx.accounts.initiative.to_account_info();
    let mut initiative = load::<Initiative>(&info)?;

    ctx.accounts.registry.verify(&caller, initiative.as_mut())?;
    if let Some(initiative) = &initiative {
        store(initiative, &info)?;
    }

    msg!("Initiative {} verified", id);
    emit!(InitiativeVerified { id });

    Ok(true)
}

#[derive(Accounts)]
#[instruction(id: u64)]
pub struct VerifyInitiative<'info> {
    pub caller: Signer<'info>,

    #[account(
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,

    /// CHECK: may not exist; a missing account is reported as NotFound
    #[account(
        mut,
        seeds = [INITIATIVE_SEED, &id.to_le_bytes()],
        bump
    )]
    pub initiative: UncheckedAccount<'info>,
}
