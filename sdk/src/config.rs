//! Provider configuration
//!
//! Mirrors the generated-client convention of reading the endpoint and
//! signing identity from the ambient environment, but materializes them
//! into an explicit value: nothing here is stored as process-global
//! state. Callers pass the resulting config (or the client built from
//! it) as an ordinary dependency.

use crate::{Result, SdkError};
use anchor_client::Cluster;
use solana_sdk::signature::{read_keypair_file, Keypair};
use std::rc::Rc;

/// Environment variable naming the RPC endpoint. Defaults to localnet.
pub const RPC_URL_ENV: &str = "SUBFLOW_RPC_URL";
/// Environment variable naming the WebSocket endpoint.
pub const WS_URL_ENV: &str = "SUBFLOW_WS_URL";
/// Environment variable naming the wallet keypair file.
pub const WALLET_ENV: &str = "SUBFLOW_WALLET";

pub struct ProviderConfig {
    pub cluster: Cluster,
    pub payer: Rc<Keypair>,
}

impl ProviderConfig {
    /// Read endpoint and signing identity from the environment.
    ///
    /// Defaults match a local development setup: `http://localhost:8899`
    /// with the standard CLI wallet at `~/.config/solana/id.json`.
    pub fn from_env() -> Result<Self> {
        let rpc_url = std::env::var(RPC_URL_ENV)
            .unwrap_or_else(|_| "http://localhost:8899".to_string());
        let ws_url = std::env::var(WS_URL_ENV)
            .unwrap_or_else(|_| "ws://localhost:8900".to_string());

        let wallet_path = std::env::var(WALLET_ENV)
            .unwrap_or_else(|_| "~/.config/solana/id.json".to_string());
        let wallet_path = shellexpand::tilde(&wallet_path).to_string();

        let payer = read_keypair_file(&wallet_path).map_err(|e| SdkError::WalletLoad {
            path: wallet_path.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            cluster: Cluster::Custom(rpc_url, ws_url),
            payer: Rc::new(payer),
        })
    }
}
