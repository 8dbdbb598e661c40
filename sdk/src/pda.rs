//! PDA derivation helpers for every subflow account family

use anchor_lang::prelude::Pubkey;

/// Platform account for an admin authority
pub fn find_subflow(authority: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[subflow::SUBFLOW_SEED, authority.as_ref()], &subflow::ID)
}

/// Service account, keyed by name under a platform and authority
pub fn find_service(name: &str, subflow_pda: &Pubkey, authority: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[name.as_bytes(), subflow_pda.as_ref(), authority.as_ref()],
        &subflow::ID,
    )
}

/// Token vault collecting a service's subscription payments
pub fn find_vault(service: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[subflow::VAULT_SEED, service.as_ref()], &subflow::ID)
}

/// Billing plan, keyed by interval under a service
pub fn find_plan(interval: u64, service: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            subflow::PLAN_SEED,
            interval.to_le_bytes().as_ref(),
            service.as_ref(),
        ],
        &subflow::ID,
    )
}

/// Subscription state for a user on a plan
pub fn find_subscriber(plan: &Pubkey, subscriber: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[subflow::SUBSCRIBER_SEED, plan.as_ref(), subscriber.as_ref()],
        &subflow::ID,
    )
}
