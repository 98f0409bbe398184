use anchor_lang::prelude::*;
use anchor_lang::solana_program::{program::invoke, system_instruction};
use crate::{constants::*, errors::ErrorCode, events::VaultDeposited, state::*};

pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<bool> {
    require!(amount > 0, ErrorCode::InvalidAmount);

    // First deposit creates the account
    let depositor = ctx.accounts.depositor.key();
    let vault_balance = &mut ctx.accounts.vault_balance;
    if vault_balance.depositor == Pubkey::default() {
        vault_balance.depositor = depositor;
    }

    // SOL transfer to the depositor's vault
    invoke(
        &system_instruction::transfer(&depositor, &vault_balance.key(), amount),
        &[
            ctx.accounts.depositor.to_account_info(),
            vault_balance.to_account_info(),
            ctx.accounts.system_program.to_account_info(),
        ],
    )?;

    let balance = vault_balance.credit(amount)?;

    msg!("Deposit: {} lamports from {}, balance {}", amount, depositor, balance);
    emit!(VaultDeposited {
        depositor,
        amount,
        balance,
    });

    Ok(true)
}

#[derive(Accounts)]
pub struct Deposit<'info> {
    #[account(mut)]
    pub depositor: Signer<'info>,

    #[account(
        init_if_needed,
        payer = depositor,
        space = ANCHOR_DISCRIMINATOR + VaultBalance::SIZE,
        seeds = [VAULT_BALANCE_SEED, depositor.key().as_ref()],
        bump
    )]
    pub vault_balance: Account<'info, VaultBalance>,

    pub system_program: Program<'info, System>,
}
