use anchor_lang::prelude::*;

// ================================
// Program Events
// ================================

/// Emitted when a new service is registered under a platform
#[event]
pub struct ServiceCreated {
    pub subflow: Pubkey,
    pub service: Pubkey,
    pub authority: Pubkey,
    pub vault: Pubkey,
    pub mint: Pubkey,
}

/// Emitted when a billing plan is added to a service
#[event]
pub struct PlanAdded {
    pub service: Pubkey,
    pub plan: Pubkey,
    pub interval_in_days: u64,
    pub cost_per_interval: u64,
}

/// Emitted on pause and unpause transitions
#[event]
pub struct ServicePauseChanged {
    pub service: Pubkey,
    pub paused: bool,
    /// Declared pause length in days; zero on unpause
    pub duration_days: u8,
}

/// Emitted when a subscription is opened or renewed
#[event]
pub struct SubscriptionPaid {
    pub service: Pubkey,
    pub plan: Pubkey,
    pub subscriber: Pubkey,
    pub amount: u64,
    pub subscription_end_date: i64,
}
