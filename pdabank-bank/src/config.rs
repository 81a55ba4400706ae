use std::path::Path;
use std::str::FromStr;

use pdabank_common::address::parse_address;
use pdabank_common::idl::Idl;
use pdabank_wallet::DEFAULT_KEYPAIR_PATH;
use serde::{Deserialize, Serialize};
use solana_sdk::commitment_config::{CommitmentConfig, CommitmentLevel};
use solana_sdk::pubkey::Pubkey;

use crate::errors::BankClientError;

pub const DEFAULT_RPC_URL: &str = "https://api.devnet.solana.com";

/// Client settings, stored as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub rpc_url: String,
    /// `processed`, `confirmed` or `finalized`.
    pub commitment: String,
    pub keypair_path: String,
    /// IDL file to use instead of the bundled one.
    pub idl_path: Option<String>,
    /// Overrides `metadata.address` of the IDL.
    pub program_id: Option<String>,
    pub log_file: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rpc_url: DEFAULT_RPC_URL.to_string(),
            commitment: "processed".to_string(),
            keypair_path: DEFAULT_KEYPAIR_PATH.to_string(),
            idl_path: None,
            program_id: None,
            log_file: None,
        }
    }
}

impl Config {
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), BankClientError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, BankClientError> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    pub fn commitment(&self) -> Result<CommitmentConfig, BankClientError> {
        let commitment = CommitmentLevel::from_str(&self.commitment)
            .map_err(|_| BankClientError::Config(format!("unknown commitment `{}`", self.commitment)))?;
        Ok(CommitmentConfig { commitment })
    }

    pub fn load_idl(&self) -> Result<Idl, BankClientError> {
        let idl = match &self.idl_path {
            Some(path) => Idl::load_from_file(path)?,
            None => Idl::bundled()?,
        };
        Ok(idl)
    }

    /// Program address: the configured override, else the IDL's own.
    pub fn program_id(&self, idl: &Idl) -> Result<Pubkey, BankClientError> {
        let id = match &self.program_id {
            Some(raw) => parse_address(raw)?,
            None => idl.program_id()?,
        };
        Ok(id)
    }
}

/// Loads the config at `path`, writing the defaults there first if missing.
///
/// The flag is `true` when the file was created. This runs before logging is
/// set up, so reporting the creation is left to the caller.
pub fn ensure_config<P: AsRef<Path>>(path: P) -> Result<(Config, bool), BankClientError> {
    let path = path.as_ref();
    if !path.exists() {
        let config = Config::default();
        config.save_to_file(path)?;
        return Ok((config, true));
    }
    Ok((Config::load_from_file(path)?, false))
}
