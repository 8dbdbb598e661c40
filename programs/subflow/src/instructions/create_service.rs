use crate::{error::SubflowError, events::ServiceCreated, state::*, VAULT_SEED};
use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

#[derive(Accounts)]
#[instruction(service_name: String)]
pub struct CreateService<'info> {
    #[account(mut)]
    pub subflow: Box<Account<'info, Subflow>>,

    #[account(
        init,
        payer = authority,
        space = Service::SIZE,
        seeds = [
            service_name.as_bytes(),
            subflow.key().as_ref(),
            authority.key().as_ref()
        ],
        bump
    )]
    pub service: Box<Account<'info, Service>>,

    /// Collects subscription payments for this service
    #[account(
        init,
        payer = authority,
        seeds = [VAULT_SEED, service.key().as_ref()],
        bump,
        token::mint = mint,
        token::authority = authority
    )]
    pub vault: Box<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub mint: Box<Account<'info, Mint>>,
    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<CreateService>, name: String, uri: String) -> Result<()> {
    Service::validate_name(&name)?;
    Service::validate_uri(&uri)?;

    let subflow = &mut ctx.accounts.subflow;
    subflow.active_services = subflow
        .active_services
        .checked_add(1)
        .ok_or(SubflowError::MathOverflow)?;

    let service = &mut ctx.accounts.service;
    service.subflow = subflow.key();
    service.id = subflow.active_services;
    service.name = name;
    service.image_uri = uri;
    service.authority = ctx.accounts.authority.key();
    service.active_plans = 0;
    service.bump = ctx.bumps.service;
    service.vault = ctx.accounts.vault.key();
    service.mint = ctx.accounts.mint.key();

    service.paused = false;
    service.active_pause_start_time = 0;
    service.active_pause_duration = 0;

    emit!(ServiceCreated {
        subflow: service.subflow,
        service: service.key(),
        authority: service.authority,
        vault: service.vault,
        mint: service.mint,
    });

    Ok(())
}
