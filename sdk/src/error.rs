use thiserror::Error;

/// Errors surfaced by the SDK. Failures during provider setup,
/// program resolution or a remote call all propagate to the caller;
/// there is no retry or recovery layer.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("account not found: {0}")]
    AccountNotFound(String),

    #[error("failed to load wallet keypair from {path}: {reason}")]
    WalletLoad { path: String, reason: String },

    #[error("client error: {0}")]
    Client(#[from] anchor_client::ClientError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
