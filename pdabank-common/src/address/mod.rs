pub mod pda;

use std::str::FromStr;

use solana_sdk::pubkey::Pubkey;

use crate::errors::BankError;

pub use pda::{bank_address, BankAddress};

/// Parses a base58 account address.
pub fn parse_address(raw: &str) -> Result<Pubkey, BankError> {
    Pubkey::from_str(raw.trim()).map_err(|e| BankError::InvalidAddress(format!("{}: {}", raw, e)))
}
