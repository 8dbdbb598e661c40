use anchor_lang::prelude::*;

/// A billing plan: pay `cost_per_interval` tokens for
/// `interval_in_days` days of access. A service holds at most one
/// plan per interval, enforced by the plan PDA seeds.
#[account]
pub struct Plan {
    pub cost_per_interval: u64,
    pub interval_in_days: u64,
    pub bump: u8,
    pub service: Pubkey,
}

impl Plan {
    pub const SIZE: usize = 8 + // discriminator
        8 + // cost_per_interval
        8 + // interval_in_days
        1 + // bump
        32; // service
}
