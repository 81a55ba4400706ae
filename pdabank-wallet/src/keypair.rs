use std::path::Path;

use solana_sdk::hash::Hash;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{read_keypair_file, Keypair, Signer};
use solana_sdk::transaction::Transaction;
use tracing::debug;

use crate::errors::WalletError;
use crate::signer::WalletSigner;

/// Where the Solana CLI keeps its default wallet.
pub const DEFAULT_KEYPAIR_PATH: &str = "~/.config/solana/id.json";

/// Wallet backed by a local keypair.
pub struct KeypairWallet {
    keypair: Keypair,
}

impl KeypairWallet {
    pub fn new(keypair: Keypair) -> Self {
        Self { keypair }
    }

    /// Loads a Solana CLI JSON keypair file. A leading `~` is expanded.
    pub fn from_file(path: &str) -> Result<Self, WalletError> {
        let expanded = shellexpand::tilde(path).into_owned();
        let keypair = read_keypair_file(Path::new(&expanded)).map_err(|e| WalletError::Keypair {
            path: expanded.clone(),
            reason: e.to_string(),
        })?;
        debug!("Loaded wallet {} from {}", keypair.pubkey(), expanded);
        Ok(Self { keypair })
    }
}

impl WalletSigner for KeypairWallet {
    fn public_key(&self) -> Pubkey {
        self.keypair.pubkey()
    }

    fn sign_transaction(&self, tx: &mut Transaction, recent_blockhash: Hash) -> Result<(), WalletError> {
        tx.try_sign(&[&self.keypair], recent_blockhash)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::signature::write_keypair_file;
    use solana_sdk::system_instruction;

    #[test]
    fn test_loads_keypair_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("id.json");
        let keypair = Keypair::new();
        write_keypair_file(&keypair, &path).unwrap();

        let wallet = KeypairWallet::from_file(path.to_str().unwrap()).unwrap();
        assert_eq!(wallet.public_key(), keypair.pubkey());
    }

    #[test]
    fn test_missing_file_is_reported_with_path() {
        let err = KeypairWallet::from_file("/nonexistent/pdabank/id.json").err().unwrap();
        assert!(matches!(err, WalletError::Keypair { ref path, .. } if path.ends_with("id.json")));
    }

    #[test]
    fn test_signs_transaction_as_fee_payer() {
        let wallet = KeypairWallet::new(Keypair::new());
        let payer = wallet.public_key();
        let ix = system_instruction::transfer(&payer, &Pubkey::new_unique(), 1);
        let mut tx = Transaction::new_with_payer(&[ix], Some(&payer));

        wallet.sign_transaction(&mut tx, Hash::new_unique()).unwrap();

        assert!(tx.is_signed());
        assert!(tx.verify().is_ok());
    }

    #[test]
    fn test_foreign_signer_is_rejected() {
        let wallet = KeypairWallet::new(Keypair::new());
        let other = Pubkey::new_unique();
        let ix = system_instruction::transfer(&other, &Pubkey::new_unique(), 1);
        let mut tx = Transaction::new_with_payer(&[ix], Some(&other));

        assert!(matches!(
            wallet.sign_transaction(&mut tx, Hash::new_unique()),
            Err(WalletError::Signing(_))
        ));
    }
}
