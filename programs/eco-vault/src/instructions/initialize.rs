use anchor_lang::prelude::*;
use crate::{constants::*, state::*};

pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    ctx.accounts
        .registry
        .set_inner(Registry::new(owner, ctx.bumps.registry));

    msg!("Registry initialized, owner: {}", owner);
    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        init,
        payer = owner,
        space = ANCHOR_DISCRIMINATOR + Registry::SIZE,
        seeds = [REGISTRY_SEED],
        bump
    )]
    pub registry: Account<'info, Registry>,

    pub system_program: Program<'info, System>,
}
