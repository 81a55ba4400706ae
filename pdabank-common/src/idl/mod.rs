pub mod discriminator;
pub mod types;
pub mod value;

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;

use crate::constants::BUNDLED_IDL;
use crate::errors::BankError;

pub use discriminator::{account_discriminator, instruction_discriminator, DISCRIMINATOR_LEN};
pub use types::{IdlField, IdlType, IdlTypeDef, IdlTypeDefTy, PrimitiveType};
pub use value::IdlValue;

/// Interface description of an Anchor program (legacy JSON layout).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Idl {
    pub version: String,
    pub name: String,
    pub instructions: Vec<IdlInstruction>,
    #[serde(default)]
    pub accounts: Vec<IdlTypeDef>,
    #[serde(default)]
    pub types: Vec<IdlTypeDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<IdlMetadata>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdlInstruction {
    pub name: String,
    pub accounts: Vec<IdlAccount>,
    pub args: Vec<IdlField>,
}

/// An account slot of an instruction, in the order the program expects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdlAccount {
    pub name: String,
    pub is_mut: bool,
    pub is_signer: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdlMetadata {
    pub address: String,
}

impl Idl {
    pub fn from_json(json: &str) -> Result<Self, BankError> {
        Ok(serde_json::from_str(json)?)
    }

    /// IDL of the bank program compiled into this crate.
    pub fn bundled() -> Result<Self, BankError> {
        Self::from_json(BUNDLED_IDL)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, BankError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Program address recorded in `metadata.address`.
    pub fn program_id(&self) -> Result<Pubkey, BankError> {
        let metadata = self
            .metadata
            .as_ref()
            .ok_or_else(|| BankError::InvalidAddress("IDL has no metadata.address".to_string()))?;
        Pubkey::from_str(&metadata.address)
            .map_err(|e| BankError::InvalidAddress(format!("{}: {}", metadata.address, e)))
    }

    pub fn instruction(&self, name: &str) -> Result<&IdlInstruction, BankError> {
        self.instructions
            .iter()
            .find(|ix| ix.name == name)
            .ok_or_else(|| BankError::UnknownInstruction(name.to_string()))
    }

    pub fn account(&self, name: &str) -> Result<&IdlTypeDef, BankError> {
        self.accounts
            .iter()
            .find(|acc| acc.name == name)
            .ok_or_else(|| BankError::UnknownAccountType(name.to_string()))
    }

    /// Looks up a named type among account and user-defined types.
    pub fn type_def(&self, name: &str) -> Option<&IdlTypeDef> {
        self.accounts
            .iter()
            .chain(self.types.iter())
            .find(|def| def.name == name)
    }
}
