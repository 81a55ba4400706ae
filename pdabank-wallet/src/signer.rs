use solana_sdk::hash::Hash;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::transaction::Transaction;

use crate::errors::WalletError;

/// Identity and signing provider behind every bank call.
pub trait WalletSigner: Send + Sync {
    fn public_key(&self) -> Pubkey;

    /// Signs `tx` in place for `recent_blockhash`.
    fn sign_transaction(&self, tx: &mut Transaction, recent_blockhash: Hash) -> Result<(), WalletError>;
}
