pub mod render;
pub mod session;

use std::sync::Arc;

use pdabank_common::account::BankRecord;
use pdabank_common::address::{bank_address, BankAddress};
use pdabank_common::constants::{DEFAULT_BANK_NAME, TRANSFER_AMOUNT_LAMPORTS};
use solana_sdk::pubkey::Pubkey;
use tokio::sync::watch;
use tokio::task::{AbortHandle, JoinHandle, JoinSet};
use tracing::{debug, error, info};

use crate::program::BankProgram;

pub use render::{render, Control};

/// A user-triggered request against the bank program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Create,
    Refresh,
    Deposit(Pubkey),
    Withdraw(Pubkey),
}

/// Bank view state and its four actions.
///
/// The only local state is the list of banks from the last successful
/// refresh. Actions never return errors: failures are logged and the list is
/// left as it was.
pub struct BankView<P: BankProgram + ?Sized> {
    program: Arc<P>,
    banks: Arc<watch::Sender<Vec<BankRecord>>>,
}

impl<P: BankProgram + ?Sized> Clone for BankView<P> {
    fn clone(&self) -> Self {
        Self {
            program: Arc::clone(&self.program),
            banks: Arc::clone(&self.banks),
        }
    }
}

impl<P: BankProgram + ?Sized + 'static> BankView<P> {
    pub fn new(program: Arc<P>) -> Self {
        let (banks, _) = watch::channel(Vec::new());
        Self { program, banks: Arc::new(banks) }
    }

    /// Banks as of the last successful refresh.
    pub fn banks(&self) -> Vec<BankRecord> {
        self.banks.borrow().clone()
    }

    /// Notified each time the list is replaced.
    pub fn subscribe(&self) -> watch::Receiver<Vec<BankRecord>> {
        self.banks.subscribe()
    }

    /// The wallet's own bank PDA.
    pub fn bank_address(&self) -> BankAddress {
        bank_address(&self.program.authority(), &self.program.program_id())
    }

    pub fn render(&self) -> String {
        render(&self.banks.borrow())
    }

    pub async fn create_bank(&self) {
        let bank = self.bank_address().address;
        match self.program.create(bank, DEFAULT_BANK_NAME).await {
            Ok(signature) => info!("New bank was created: {} ({})", bank, signature),
            Err(e) => error!("Error while creating the bank: {}", e),
        }
    }

    pub async fn get_banks(&self) {
        match self.program.fetch_all().await {
            Ok(banks) => {
                debug!("Fetched banks: {:?}", banks);
                self.banks.send_replace(banks);
            }
            Err(e) => error!("Error while getting the banks: {}", e),
        }
    }

    pub async fn deposit_bank(&self, bank: Pubkey) {
        match self.program.deposit(bank, TRANSFER_AMOUNT_LAMPORTS).await {
            Ok(signature) => info!("Deposit done: {} ({})", bank, signature),
            Err(e) => error!("Error while depositing: {}", e),
        }
    }

    pub async fn withdraw_bank(&self, bank: Pubkey) {
        match self.program.withdraw(bank, TRANSFER_AMOUNT_LAMPORTS).await {
            Ok(signature) => info!("Withdraw done: {} ({})", bank, signature),
            Err(e) => error!("Error while withdrawing: {}", e),
        }
    }

    /// Runs `action` to completion on the current task.
    pub async fn perform(&self, action: Action) {
        match action {
            Action::Create => self.create_bank().await,
            Action::Refresh => self.get_banks().await,
            Action::Deposit(bank) => self.deposit_bank(bank).await,
            Action::Withdraw(bank) => self.withdraw_bank(bank).await,
        }
    }

    /// Runs `action` in the background; callers may drop the handle.
    ///
    /// Nothing tracks in-flight actions, so triggering twice sends two calls.
    pub fn trigger(&self, action: Action) -> JoinHandle<()> {
        let view = self.clone();
        tokio::spawn(async move { view.perform(action).await })
    }

    /// Like [`trigger`](Self::trigger), but the task is owned by `tasks` so the
    /// caller can wait for everything still in flight before shutting down.
    pub fn trigger_in(&self, action: Action, tasks: &mut JoinSet<()>) -> AbortHandle {
        let view = self.clone();
        tasks.spawn(async move { view.perform(action).await })
    }
}
