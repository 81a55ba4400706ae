use solana_sdk::signer::SignerError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WalletError {
    /// The keypair file is missing or is not a Solana CLI keypair.
    #[error("Failed to read keypair from {path}: {reason}")]
    Keypair { path: String, reason: String },

    #[error("Signing failed: {0}")]
    Signing(#[from] SignerError),
}
