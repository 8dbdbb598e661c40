use anchor_lang::prelude::*;

/// Platform root account, one per admin authority.
#[account]
pub struct Subflow {
    pub admin: Pubkey,
    /// Number of services registered under this platform
    pub active_services: u64,
    pub bump: u8,
    /// Upper bound, in days, for a single service pause
    pub max_pause_duration_days: u8,
}

impl Subflow {
    pub const SIZE: usize = 8 + // discriminator
        32 + // admin
        8 + // active_services
        1 + // bump
        1; // max_pause_duration_days

    /// Services may not be paused for more than 30 days at a time.
    pub const DEFAULT_MAX_PAUSE_DAYS: u8 = 30;
}
