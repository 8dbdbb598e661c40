use crate::{error::SubflowError, state::DAY_IN_SECONDS};
use anchor_lang::prelude::*;

/// A user's subscription to one plan.
#[account]
pub struct Subscriber {
    pub subscriber: Pubkey,
    pub plan: Pubkey,
    /// Unix timestamp after which the subscription lapses
    pub subscription_end_date: i64,
    pub bump: u8,
}

impl Subscriber {
    pub const SIZE: usize = 8 + // discriminator
        32 + // subscriber
        32 + // plan
        8 + // subscription_end_date
        1; // bump

    pub fn is_active(&self, now: i64) -> bool {
        self.subscription_end_date > now
    }

    /// End date after paying for one more interval. A still-active
    /// subscription extends from its current end date; a lapsed one
    /// restarts from `now`.
    pub fn next_end_date(current_end: i64, now: i64, interval_in_days: u64) -> Result<i64> {
        let interval_in_seconds = interval_in_days
            .checked_mul(DAY_IN_SECONDS)
            .ok_or(SubflowError::MathOverflow)?;
        let interval_in_seconds =
            i64::try_from(interval_in_seconds).map_err(|_| SubflowError::MathOverflow)?;
        let start = if current_end > now { current_end } else { now };
        start
            .checked_add(interval_in_seconds)
            .ok_or_else(|| SubflowError::MathOverflow.into())
    }
}
