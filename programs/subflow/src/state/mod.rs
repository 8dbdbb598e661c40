// State accounts for the subflow program

pub mod plan;
pub mod service;
pub mod subflow;
pub mod subscriber;

pub use {plan::*, service::*, subflow::*, subscriber::*};

/// Seconds in a billing day. All plan intervals are expressed in days.
pub const DAY_IN_SECONDS: u64 = 60 * 60 * 24;
