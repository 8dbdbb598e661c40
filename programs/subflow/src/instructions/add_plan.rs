use crate::{error::SubflowError, events::PlanAdded, state::*, PLAN_SEED};
use anchor_lang::prelude::*;

#[derive(Accounts)]
#[instruction(interval: u64)]
pub struct AddPlan<'info> {
    #[account(
        mut, has_one = authority,
        constraint = !service.paused @ SubflowError::ServicePaused
    )]
    pub service: Box<Account<'info, Service>>,

    /// The interval is part of the plan PDA seeds: a service cannot
    /// carry two plans for the same interval.
    #[account(
        init,
        payer = authority,
        space = Plan::SIZE,
        seeds = [PLAN_SEED, interval.to_le_bytes().as_ref(), service.key().as_ref()],
        bump
    )]
    pub plan: Box<Account<'info, Plan>>,

    #[account(mut)]
    pub authority: Signer<'info>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<AddPlan>, interval: u64, cost: u64) -> Result<()> {
    let service = &mut ctx.accounts.service;
    service.active_plans = service
        .active_plans
        .checked_add(1)
        .ok_or(SubflowError::MathOverflow)?;

    let plan = &mut ctx.accounts.plan;
    plan.cost_per_interval = cost;
    plan.interval_in_days = interval;
    plan.bump = ctx.bumps.plan;
    plan.service = ctx.accounts.service.key();

    emit!(PlanAdded {
        service: plan.service,
        plan: plan.key(),
        interval_in_days: interval,
        cost_per_interval: cost,
    });

    Ok(())
}
