use pdabank_common::errors::BankError;
use pdabank_wallet::WalletError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BankClientError {
    #[error("RPC error: {0}")]
    Rpc(#[from] solana_client::client_error::ClientError),

    #[error("Program interface error: {0}")]
    Program(#[from] BankError),

    #[error("Wallet error: {0}")]
    Wallet(#[from] WalletError),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Input typed into the interactive view that maps to no control.
    #[error("Invalid command: {0}")]
    InvalidCommand(String),
}
