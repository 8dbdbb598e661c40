use crate::{error::SubflowError, events::ServicePauseChanged, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct UnpauseService<'info> {
    pub subflow: Box<Account<'info, Subflow>>,

    #[account(mut, has_one = authority, has_one = subflow)]
    pub service: Box<Account<'info, Service>>,

    pub authority: Signer<'info>,
}

pub fn handler(ctx: Context<UnpauseService>) -> Result<()> {
    let service = &mut ctx.accounts.service;
    let now = Clock::get()?.unix_timestamp;

    require!(service.can_unpause(now)?, SubflowError::CantUnpauseYet);

    service.paused = false;
    service.active_pause_start_time = 0;
    service.active_pause_duration = 0;

    emit!(ServicePauseChanged {
        service: service.key(),
        paused: false,
        duration_days: 0,
    });

    Ok(())
}
