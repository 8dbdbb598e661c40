#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;

pub mod error;
pub mod events;
pub mod instructions;
pub mod state;

pub use error::SubflowError;
pub use events::*;
pub use state::*;

use instructions::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

// PDA seed prefixes
pub const SUBFLOW_SEED: &[u8] = b"subflow";
pub const PLAN_SEED: &[u8] = b"plan";
pub const VAULT_SEED: &[u8] = b"vault";
pub const SUBSCRIBER_SEED: &[u8] = b"subscriber";

#[program]
pub mod subflow {
    use super::*;

    /// Create the platform account for the signing authority.
    /// One platform per authority: calling this twice with the same
    /// authority fails because the PDA is already initialized.
    pub fn initialize(ctx: Context<InitializeSubflow>) -> Result<()> {
        initialize::handler(ctx)
    }

    /// Register a new service under the platform, together with the
    /// token vault that collects its subscription payments.
    pub fn create_service(ctx: Context<CreateService>, name: String, uri: String) -> Result<()> {
        create_service::handler(ctx, name, uri)
    }

    /// Add a billing plan to a service. One plan per interval.
    pub fn add_plan(ctx: Context<AddPlan>, interval: u64, cost: u64) -> Result<()> {
        add_plan::handler(ctx, interval, cost)
    }

    /// Pause a service for up to the platform's maximum pause duration.
    pub fn pause(ctx: Context<PauseService>, duration: u8) -> Result<()> {
        pause::handler(ctx, duration)
    }

    /// Lift a pause once its declared duration has elapsed.
    pub fn unpause(ctx: Context<UnpauseService>) -> Result<()> {
        unpause::handler(ctx)
    }

    /// Pay for one interval of a plan and open a subscription.
    pub fn subscribe(ctx: Context<Subscribe>) -> Result<()> {
        subscribe::handler(ctx)
    }

    /// Pay for another interval, extending an existing subscription.
    pub fn renew(ctx: Context<Renew>) -> Result<()> {
        renew::handler(ctx)
    }

    /// Read-only: is the given user's subscription to this plan active?
    pub fn check_status(ctx: Context<CheckSubscription>, subscriber_key: Pubkey) -> Result<bool> {
        check_status::handler(ctx, subscriber_key)
    }
}
