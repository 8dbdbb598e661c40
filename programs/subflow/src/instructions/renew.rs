use crate::{error::SubflowError, events::SubscriptionPaid, state::*, SUBSCRIBER_SEED};
use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

#[derive(Accounts)]
pub struct Renew<'info> {
    #[account(
        has_one = vault,
        constraint = !service.paused @ SubflowError::ServicePaused
    )]
    pub service: Box<Account<'info, Service>>,

    #[account(has_one = service)]
    pub plan: Box<Account<'info, Plan>>,

    #[account(mut)]
    pub vault: Box<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub subscriber: Signer<'info>,

    #[account(
        mut,
        constraint = subscriber_token_account.mint == service.mint @ SubflowError::WrongMint,
        constraint = subscriber_token_account.owner == subscriber.key()
    )]
    pub subscriber_token_account: Box<Account<'info, TokenAccount>>,

    /// Must already exist: renewing without a prior subscription is
    /// rejected at account resolution.
    #[account(
        mut,
        seeds = [SUBSCRIBER_SEED, plan.key().as_ref(), subscriber.key().as_ref()],
        bump = subscriber_state.bump,
        has_one = plan @ SubflowError::UserNeverSubscribed
    )]
    pub subscriber_state: Box<Account<'info, Subscriber>>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<Renew>) -> Result<()> {
    let plan = &ctx.accounts.plan;
    let amount = plan.cost_per_interval;

    let transfer_ix = Transfer {
        from: ctx.accounts.subscriber_token_account.to_account_info(),
        to: ctx.accounts.vault.to_account_info(),
        authority: ctx.accounts.subscriber.to_account_info(),
    };
    let cpi_ctx = CpiContext::new(ctx.accounts.token_program.to_account_info(), transfer_ix);
    token::transfer(cpi_ctx, amount)?;

    let now = Clock::get()?.unix_timestamp;
    let subscriber_state = &mut ctx.accounts.subscriber_state;
    subscriber_state.subscription_end_date = Subscriber::next_end_date(
        subscriber_state.subscription_end_date,
        now,
        plan.interval_in_days,
    )?;

    emit!(SubscriptionPaid {
        service: ctx.accounts.service.key(),
        plan: subscriber_state.plan,
        subscriber: subscriber_state.subscriber,
        amount,
        subscription_end_date: subscriber_state.subscription_end_date,
    });

    Ok(())
}
