use anchor_lang::prelude::*;
use crate::{constants::*, state::*};

/// Balance of `principal`, zero when it never deposited.
pub fn get_vault_balance(ctx: Context<GetVaultBalance>, _principal: Pubkey) -> Result<u64> {
    let vault_balance = load::<VaultBalance>(&ctx.accounts.vault_balance.to_account_info())?;
    Ok(vault_balance.map_or(0, |vault_balance| vault_balance.amount))
}

#[derive(Accounts)]
#[instruction(principal: Pubkey)]
pub struct GetVaultBalance<'info> {
    /// CHECK: may not exist yet; only read when owned by this program
    #[account(
        seeds = [VAULT_BALANCE_SEED, principal.as_ref()],
        bump
    )]
    pub vault_balance: UncheckedAccount<'info>,
}
