//! Service error taxonomy.
//!
//! One variant per failure class the screens distinguish: a missing
//! provider blocks a feature with an instructional notice, everything
//! else is caught at its call site and either logged or surfaced.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("No injected Ethereum wallet found. Please install MetaMask to continue.")]
    MissingProvider,

    #[error("Wallet request failed: {0}")]
    Wallet(String),

    #[error("Network request failed: {0}")]
    Transport(String),

    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("Could not decode contract response: {0}")]
    Abi(String),

    #[error("Indexer request failed: {0}")]
    Indexer(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Transaction reverted on-chain ({0})")]
    Reverted(String),

    #[error("Timed out waiting for transaction {0} to confirm")]
    ReceiptTimeout(String),
}

impl From<gloo_net::Error> for ServiceError {
    fn from(err: gloo_net::Error) -> Self {
        ServiceError::Transport(err.to_string())
    }
}

impl From<alloy_sol_types::Error> for ServiceError {
    fn from(err: alloy_sol_types::Error) -> Self {
        ServiceError::Abi(err.to_string())
    }
}
