use crate::{error::SubflowError, events::ServicePauseChanged, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
#[instruction(pause_time: u8)]
pub struct PauseService<'info> {
    pub subflow: Box<Account<'info, Subflow>>,

    #[account(
        mut, has_one = authority, has_one = subflow,
        constraint = pause_time <= subflow.max_pause_duration_days @
        SubflowError::ExceededMaxPauseTime,
    )]
    pub service: Box<Account<'info, Service>>,

    pub authority: Signer<'info>,
}

/// While a service is paused the following actions are rejected:
/// - new subscriptions (active ones keep their end dates)
/// - renewals
/// - addition of new plans
pub fn handler(ctx: Context<PauseService>, duration: u8) -> Result<()> {
    let service = &mut ctx.accounts.service;
    let clock = Clock::get()?;

    service.paused = true;
    service.active_pause_start_time = clock.unix_timestamp;
    service.active_pause_duration = duration;

    emit!(ServicePauseChanged {
        service: service.key(),
        paused: true,
        duration_days: duration,
    });

    Ok(())
}
