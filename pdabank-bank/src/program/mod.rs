pub mod rpc;

use async_trait::async_trait;
use pdabank_common::account::BankRecord;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;

use crate::errors::BankClientError;

pub use rpc::RpcBankProgram;

/// Remote procedures of the bank program, as seen by the wallet holder.
#[async_trait]
pub trait BankProgram: Send + Sync {
    fn program_id(&self) -> Pubkey;

    /// Public key of the wallet that pays for and signs every call.
    fn authority(&self) -> Pubkey;

    async fn create(&self, bank: Pubkey, name: &str) -> Result<Signature, BankClientError>;

    async fn deposit(&self, bank: Pubkey, amount: u64) -> Result<Signature, BankClientError>;

    async fn withdraw(&self, bank: Pubkey, amount: u64) -> Result<Signature, BankClientError>;

    /// Every bank account owned by the program, in the order the node returns them.
    async fn fetch_all(&self) -> Result<Vec<BankRecord>, BankClientError>;
}
