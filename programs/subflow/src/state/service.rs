use crate::{error::SubflowError, state::DAY_IN_SECONDS};
use anchor_lang::prelude::*;

/// A merchant service registered under a platform. Payments for its
/// plans accumulate in the `vault` token account, denominated in `mint`.
#[account]
pub struct Service {
    pub subflow: Pubkey,
    pub id: u64,
    pub name: String,
    pub image_uri: String,
    pub authority: Pubkey,
    pub active_plans: u8,
    pub bump: u8,
    pub vault: Pubkey,
    pub mint: Pubkey,

    // Pause state. While paused, new plans, subscriptions and renewals
    // are rejected; existing subscriptions keep their end dates.
    pub paused: bool,
    pub active_pause_start_time: i64,
    pub active_pause_duration: u8,
}

impl Service {
    pub const MAX_NAME_LENGTH: usize = 16;
    pub const MAX_URI_LENGTH: usize = 50;

    pub const SIZE: usize = 8 + // discriminator
        32 + // subflow
        8 + // id
        (4 + Self::MAX_NAME_LENGTH) + // name
        (4 + Self::MAX_URI_LENGTH) + // image_uri
        32 + // authority
        1 + // active_plans
        1 + // bump
        32 + // vault
        32 + // mint
        1 + // paused
        8 + // active_pause_start_time
        1; // active_pause_duration

    /// Limits are in bytes: the name doubles as a PDA seed and both
    /// fields size the account allocation.
    pub fn validate_name(name: &str) -> Result<()> {
        require!(
            name.len() <= Self::MAX_NAME_LENGTH,
            SubflowError::MaxServiceNameExceeded
        );
        Ok(())
    }

    pub fn validate_uri(uri: &str) -> Result<()> {
        require!(
            uri.len() <= Self::MAX_URI_LENGTH,
            SubflowError::MaxURILengthExceeded
        );
        Ok(())
    }

    /// A pause may only be lifted once its declared duration has elapsed.
    pub fn can_unpause(&self, now: i64) -> Result<bool> {
        let duration_in_seconds = u64::from(self.active_pause_duration)
            .checked_mul(DAY_IN_SECONDS)
            .ok_or(SubflowError::MathOverflow)?;
        let duration_in_seconds =
            i64::try_from(duration_in_seconds).map_err(|_| SubflowError::MathOverflow)?;
        let pause_end = self
            .active_pause_start_time
            .checked_add(duration_in_seconds)
            .ok_or(SubflowError::MathOverflow)?;
        Ok(now > pause_end)
    }
}
