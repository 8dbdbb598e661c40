use crate::{state::*, SUBSCRIBER_SEED};
use anchor_lang::prelude::*;

/// Read only. Reports whether a user's subscription is still active.
#[derive(Accounts)]
#[instruction(subscriber: Pubkey)]
pub struct CheckSubscription<'info> {
    #[account(
        seeds = [SUBSCRIBER_SEED, plan.key().as_ref(), subscriber.as_ref()],
        bump = subscriber_state.bump,
        has_one = plan
    )]
    pub subscriber_state: Box<Account<'info, Subscriber>>,

    pub plan: Box<Account<'info, Plan>>,
}

pub fn handler(ctx: Context<CheckSubscription>, _subscriber: Pubkey) -> Result<bool> {
    let now = Clock::get()?.unix_timestamp;
    Ok(ctx.accounts.subscriber_state.is_active(now))
}
