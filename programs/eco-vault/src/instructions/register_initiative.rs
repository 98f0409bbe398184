use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Allocate, Assign, CreateAccount, Transfer};
use crate::{constants::*, events::InitiativeRegistered, state::*};

pub fn register_initiative(ctx: Context<RegisterInitiative>, name: String) -> Result<u64> {
    let caller = ctx.accounts.caller.key();
    let initiative = ctx.accounts.registry.register(&caller, name)?;

    // Owner confirmed: only now is anything paid for
    let id_bytes = initiative.id.to_le_bytes();
    let bump = [ctx.bumps.initiative];
    let seeds: &[&[u8]] = &[INITIATIVE_SEED, &id_bytes, &bump];
    create_initiative_account(
        &ctx.accounts.caller,
        &ctx.accounts.initiative,
        &ctx.accounts.system_program,
        &[seeds],
    )?;
    store(&initiative, &ctx.accounts.initiative)?;

    msg!("Initiative {} registered: {}", initiative.id, initiative.name);
    emit!(InitiativeRegistered {
        id: initiative.id,
        name: initiative.name,
    });

    Ok(initiative.id)
}

// Same steps as Anchor's `init`, which can't run here because it would
// charge the caller before the owner check.
fn create_initiative_account<'info>(
    payer: &Signer<'info>,
    initiative: &UncheckedAccount<'info>,
    system: &Program<'info, System>,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    let space = ANCHOR_DISCRIMINATOR + Initiative::SIZE;
    let rent = Rent::get()?.minimum_balance(space);
    let current = initiative.lamports();

    if current == 0 {
        return system_program::create_account(
            CpiContext::new_with_signer(
                system.to_account_info(),
                CreateAccount {
                    from: payer.to_account_info(),
                    to: initiative.to_account_info(),
                },
                signer_seeds,
            ),
            rent,
            space as u64,
            &crate::ID,
        );
    }

    // Address was pre-funded: top up, then allocate and assign
    let top_up = rent.saturating_sub(current);
    if top_up > 0 {
        system_program::transfer(
            CpiContext::new(
                system.to_account_info(),
                Transfer {
                    from: payer.to_account_info(),
                    to: initiative.to_account_info(),
                },
            ),
            top_up,
        )?;
    }
    system_program::allocate(
        CpiContext::new_with_signer(
            system.to_account_info(),
            Allocate {
                account_to_allocate: initiative.to_account_info(),
            },
            signer_seeds,
        ),
        space as u64,
    )?;
    system_program::assign(
        CpiContext::new_with_signer(
            system.to_account_info(),
            Assign {
                account_to_assign: initiative.to_account_info(),
            },
            signer_seeds,
        ),
        &crate::ID,
    )
}

#[derive(Accounts)]
pub struct RegisterInitiative<'info> {
    #[account(mut)]
    pub caller: Signer<'info>,

    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,

    /// CHECK: created by the handler after the owner check
    #[account(
        mut,
        seeds = [INITIATIVE_SEED, &registry.initiative_count.to_le_bytes()],
        bump
    )]
    pub initiative: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}
