use anchor_lang::prelude::*;
use crate::{constants::*, errors::ErrorCode, events::InitiativeFunded, state::*};

/// Moves `amount` from a vault balance into an initiative's total.
///
/// Checks run in a fixed order (unknown id, unverified, zero amount,
/// insufficient balance) and both new values are computed before either is
/// written, so a failure leaves the initiative and the vault balance untouched.
pub fn allocate_funding(
    initiative: Option<&mut Initiative>,
    vault_balance: &mut VaultBalance,
    amount: u64,
) -> Result<u64> {
    let initiative = initiative.ok_or_else(|| error!(ErrorCode::NotFound))?;
    let total_funding = initiative.funded_total(amount)?;
    require!(amount > 0, ErrorCode::InvalidAmount);
    let balance = vault_balance.debited(amount)?;

    initiative.total_funding = total_funding;
    vault_balance.amount = balance;
    Ok(total_funding)
}

pub fn fund_initiative(ctx: Context<FundInitiative>, id: u64, amount: u64) -> Result<bool> {
    let funder = ctx.accounts.funder.key();
    let initiative_info = ctx.accounts.initiative.to_account_info();
    let vault_info = ctx.accounts.vault_balance.to_account_info();

    let mut initiative = load::<Initiative>(&initiative_info)?;
    // Never deposited: nothing to allocate, and no account is created here
    let mut vault_balance = load::<VaultBalance>(&vault_info)?.unwrap_or_default();
    let total_funding = allocate_funding(initiative.as_mut(), &mut vault_balance, amount)?;

    if let Some(initiative) = &initiative {
        store(initiative, &initiative_info)?;
    }
    store(&vault_balance, &vault_info)?;

    // use direct lamport subtraction/addition: both accounts are program owned
    **vault_info.try_borrow_mut_lamports()? -= amount;
    **initiative_info.try_borrow_mut_lamports()? += amount;

    msg!(
        "Initiative {} funded: {} lamports from {}, total {}",
        id,
        amount,
        funder,
        total_funding
    );
    emit!(InitiativeFunded {
        id,
        funder,
        amount,
        total_funding,
    });

    Ok(true)
}

#[derive(Accounts)]
#[instruction(id: u64)]
pub struct FundInitiative<'info> {
    pub funder: Signer<'info>,

    /// CHECK: may not exist; a missing account is reported as NotFound
    #[account(
        mut,
        seeds = [INITIATIVE_SEED, &id.to_le_bytes()],
        bump
    )]
    pub initiative: UncheckedAccount<'info>,

    /// CHECK: may not exist; a missing account holds a zero balance
    #[account(
        mut,
        seeds = [VAULT_BALANCE_SEED, funder.key().as_ref()],
        bump
    )]
    pub vault_balance: UncheckedAccount<'info>,
}
