use std::sync::Arc;

use async_trait::async_trait;
use futures::future::try_join_all;
use pdabank_common::account::BankRecord;
use pdabank_common::idl::Idl;
use pdabank_common::instruction::{build_instruction, BankAccounts, BankInstruction};
use pdabank_wallet::WalletSigner;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::Transaction;
use tracing::debug;

use super::BankProgram;
use crate::config::Config;
use crate::errors::BankClientError;

/// Bank program client talking JSON-RPC to a Solana node.
pub struct RpcBankProgram {
    rpc: RpcClient,
    wallet: Arc<dyn WalletSigner>,
    idl: Idl,
    program_id: Pubkey,
}

impl RpcBankProgram {
    pub fn new(rpc: RpcClient, wallet: Arc<dyn WalletSigner>, idl: Idl, program_id: Pubkey) -> Self {
        Self { rpc, wallet, idl, program_id }
    }

    pub fn from_config(config: &Config, wallet: Arc<dyn WalletSigner>) -> Result<Self, BankClientError> {
        let idl = config.load_idl()?;
        let program_id = config.program_id(&idl)?;
        let rpc = RpcClient::new_with_commitment(config.rpc_url.clone(), config.commitment()?);
        Ok(Self::new(rpc, wallet, idl, program_id))
    }

    pub fn idl(&self) -> &Idl {
        &self.idl
    }

    async fn submit(&self, instruction: BankInstruction, bank: Pubkey) -> Result<Signature, BankClientError> {
        let payer = self.wallet.public_key();
        let accounts = BankAccounts { bank, user: payer };
        let ix = build_instruction(&self.idl, self.program_id, &instruction, &accounts)?;

        let mut tx = Transaction::new_with_payer(&[ix], Some(&payer));
        let blockhash = self.rpc.get_latest_blockhash().await?;
        self.wallet.sign_transaction(&mut tx, blockhash)?;

        debug!("Sending `{}` for bank {}", instruction.name(), bank);
        Ok(self.rpc.send_and_confirm_transaction(&tx).await?)
    }

    async fn fetch(&self, address: Pubkey) -> Result<BankRecord, BankClientError> {
        let account = self.rpc.get_account(&address).await?;
        Ok(BankRecord::decode(&self.idl, address, &account.data)?)
    }
}

#[async_trait]
impl BankProgram for RpcBankProgram {
    fn program_id(&self) -> Pubkey {
        self.program_id
    }

    fn authority(&self) -> Pubkey {
        self.wallet.public_key()
    }

    async fn create(&self, bank: Pubkey, name: &str) -> Result<Signature, BankClientError> {
        self.submit(BankInstruction::Create { name: name.to_string() }, bank).await
    }

    async fn deposit(&self, bank: Pubkey, amount: u64) -> Result<Signature, BankClientError> {
        self.submit(BankInstruction::Deposit { amount }, bank).await
    }

    async fn withdraw(&self, bank: Pubkey, amount: u64) -> Result<Signature, BankClientError> {
        self.submit(BankInstruction::Withdraw { amount }, bank).await
    }

    async fn fetch_all(&self) -> Result<Vec<BankRecord>, BankClientError> {
        let owned = self.rpc.get_program_accounts(&self.program_id).await?;
        debug!("Program {} owns {} accounts", self.program_id, owned.len());

        // Re-read each account so every record reflects its latest state.
        try_join_all(owned.into_iter().map(|(address, _)| self.fetch(address))).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdabank_wallet::KeypairWallet;
    use solana_sdk::signature::Keypair;

    #[tokio::test]
    async fn test_from_config_uses_idl_program_id_and_wallet() {
        let wallet = Arc::new(KeypairWallet::new(Keypair::new()));
        let authority = wallet.public_key();
        let config = Config { rpc_url: "http://127.0.0.1:8899".into(), ..Config::default() };

        let program = RpcBankProgram::from_config(&config, wallet).unwrap();

        assert_eq!(program.program_id(), program.idl().program_id().unwrap());
        assert_eq!(program.authority(), authority);
    }

    #[tokio::test]
    async fn test_default_config_builds_program() {
        let wallet = Arc::new(KeypairWallet::new(Keypair::new()));
        let config = Config::default();

        let program = RpcBankProgram::from_config(&config, wallet).unwrap();

        let idl = config.load_idl().unwrap();
        assert_eq!(program.program_id(), idl.program_id().unwrap());
    }

    #[tokio::test]
    async fn test_from_config_rejects_bad_commitment() {
        let wallet = Arc::new(KeypairWallet::new(Keypair::new()));
        let config = Config { commitment: "soon".into(), ..Config::default() };

        assert!(matches!(
            RpcBankProgram::from_config(&config, wallet),
            Err(BankClientError::Config(_))
        ));
    }
}
