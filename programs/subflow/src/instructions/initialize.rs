use crate::{state::*, SUBFLOW_SEED};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct InitializeSubflow<'info> {
    #[account(
        init,
        payer = authority,
        space = Subflow::SIZE,
        seeds = [SUBFLOW_SEED, authority.key().as_ref()],
        bump
    )]
    pub subflow: Box<Account<'info, Subflow>>,

    #[account(mut)]
    pub authority: Signer<'info>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<InitializeSubflow>) -> Result<()> {
    let subflow = &mut ctx.accounts.subflow;

    subflow.admin = ctx.accounts.authority.key();
    subflow.active_services = 0;
    subflow.bump = ctx.bumps.subflow;
    subflow.max_pause_duration_days = Subflow::DEFAULT_MAX_PAUSE_DAYS;

    msg!("Subflow platform initialized for {}", subflow.admin);
    Ok(())
}
