//! Subflow SDK - client-side interface for the subflow program
//!
//! This SDK provides thin wrappers for:
//! - Provider configuration (explicit or from the ambient environment)
//! - Platform initialization
//! - Service and plan management
//! - Subscription payment flows
//! - PDA derivation for every account family

pub mod client;
pub mod config;
pub mod error;
pub mod pda;

pub use client::SubflowClient;
pub use config::ProviderConfig;
pub use error::SdkError;

// Re-export commonly used types
pub use anchor_client::{Client, Cluster};
pub use solana_sdk::{
    signature::{Keypair, Signature},
    signer::Signer,
};

// Re-export program types the client surfaces
pub use subflow::{Plan, Service, Subflow, Subscriber};

pub type Result<T> = std::result::Result<T, error::SdkError>;
