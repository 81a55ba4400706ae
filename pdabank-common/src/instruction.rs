use solana_sdk::instruction::{AccountMeta, Instruction};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::system_program;

use crate::errors::BankError;
use crate::idl::value::{encode_args, IdlValue};
use crate::idl::{instruction_discriminator, Idl};

/// The three state-changing calls of the bank program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BankInstruction {
    Create { name: String },
    Deposit { amount: u64 },
    Withdraw { amount: u64 },
}

impl BankInstruction {
    /// Instruction name as written in the IDL.
    pub fn name(&self) -> &'static str {
        match self {
            BankInstruction::Create { .. } => "create",
            BankInstruction::Deposit { .. } => "deposit",
            BankInstruction::Withdraw { .. } => "withdraw",
        }
    }

    fn args(&self) -> Vec<(&'static str, IdlValue)> {
        match self {
            BankInstruction::Create { name } => vec![("name", IdlValue::String(name.clone()))],
            BankInstruction::Deposit { amount } | BankInstruction::Withdraw { amount } => {
                vec![("amount", IdlValue::U64(*amount))]
            }
        }
    }

    /// Discriminator followed by the Borsh-encoded arguments.
    pub fn data(&self, idl: &Idl) -> Result<Vec<u8>, BankError> {
        let ix = idl.instruction(self.name())?;
        let mut data = instruction_discriminator(&ix.name).to_vec();
        encode_args(&ix.args, &self.args(), idl, &mut data)?;
        Ok(data)
    }
}

/// Accounts every bank instruction may reference, keyed by their IDL names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BankAccounts {
    pub bank: Pubkey,
    pub user: Pubkey,
}

impl BankAccounts {
    pub fn resolve(&self, name: &str) -> Option<Pubkey> {
        match name {
            "bank" => Some(self.bank),
            "user" => Some(self.user),
            "systemProgram" => Some(system_program::id()),
            _ => None,
        }
    }
}

/// Builds an instruction whose account list follows the IDL order and flags.
pub fn build_instruction(
    idl: &Idl,
    program_id: Pubkey,
    instruction: &BankInstruction,
    accounts: &BankAccounts,
) -> Result<Instruction, BankError> {
    let ix = idl.instruction(instruction.name())?;

    let metas = ix
        .accounts
        .iter()
        .map(|acc| {
            let pubkey = accounts.resolve(&acc.name).ok_or_else(|| BankError::UnresolvedAccount {
                instruction: ix.name.clone(),
                account: acc.name.clone(),
            })?;
            Ok(if acc.is_mut {
                AccountMeta::new(pubkey, acc.is_signer)
            } else {
                AccountMeta::new_readonly(pubkey, acc.is_signer)
            })
        })
        .collect::<Result<Vec<_>, BankError>>()?;

    Ok(Instruction {
        program_id,
        accounts: metas,
        data: instruction.data(idl)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DEFAULT_BANK_NAME, TRANSFER_AMOUNT_LAMPORTS};
    use crate::idl::{IdlAccount, IdlField, IdlType, PrimitiveType};

    fn accounts() -> BankAccounts {
        BankAccounts { bank: Pubkey::new_unique(), user: Pubkey::new_unique() }
    }

    #[test]
    fn test_create_instruction_layout() {
        let idl = Idl::bundled().unwrap();
        let program_id = idl.program_id().unwrap();
        let accounts = accounts();

        let ix = build_instruction(
            &idl,
            program_id,
            &BankInstruction::Create { name: DEFAULT_BANK_NAME.to_string() },
            &accounts,
        )
        .unwrap();

        assert_eq!(ix.program_id, program_id);
        assert_eq!(
            ix.accounts,
            vec![
                AccountMeta::new(accounts.bank, false),
                AccountMeta::new(accounts.user, true),
                AccountMeta::new_readonly(system_program::id(), false),
            ]
        );

        assert_eq!(&ix.data[..8], &instruction_discriminator("create"));
        assert_eq!(&ix.data[8..12], &(DEFAULT_BANK_NAME.len() as u32).to_le_bytes());
        assert_eq!(&ix.data[12..], DEFAULT_BANK_NAME.as_bytes());
    }

    #[test]
    fn test_withdraw_follows_idl_account_list() {
        let idl = Idl::bundled().unwrap();
        let accounts = accounts();

        let ix = build_instruction(
            &idl,
            Pubkey::new_unique(),
            &BankInstruction::Withdraw { amount: TRANSFER_AMOUNT_LAMPORTS },
            &accounts,
        )
        .unwrap();

        assert_eq!(ix.accounts.len(), 2);
        assert_eq!(ix.accounts[0].pubkey, accounts.bank);
        assert_eq!(ix.accounts[1].pubkey, accounts.user);
        assert_eq!(&ix.data[8..], &TRANSFER_AMOUNT_LAMPORTS.to_le_bytes());
    }

    #[test]
    fn test_deposit_and_withdraw_differ_only_by_selector() {
        let idl = Idl::bundled().unwrap();
        let deposit = BankInstruction::Deposit { amount: 42 }.data(&idl).unwrap();
        let withdraw = BankInstruction::Withdraw { amount: 42 }.data(&idl).unwrap();

        assert_ne!(deposit[..8], withdraw[..8]);
        assert_eq!(deposit[8..], withdraw[8..]);
    }

    #[test]
    fn test_unknown_account_in_idl_is_an_error() {
        let mut idl = Idl::bundled().unwrap();
        let deposit = idl.instructions.iter_mut().find(|ix| ix.name == "deposit").unwrap();
        deposit.accounts.push(IdlAccount { name: "vault".into(), is_mut: true, is_signer: false });

        let err = build_instruction(
            &idl,
            Pubkey::new_unique(),
            &BankInstruction::Deposit { amount: 1 },
            &accounts(),
        )
        .unwrap_err();

        assert!(matches!(err, BankError::UnresolvedAccount { ref account, .. } if account == "vault"));
    }

    #[test]
    fn test_idl_argument_drift_is_detected() {
        let mut idl = Idl::bundled().unwrap();
        let create = idl.instructions.iter_mut().find(|ix| ix.name == "create").unwrap();
        create.args.push(IdlField { name: "limit".into(), ty: IdlType::Primitive(PrimitiveType::U64) });

        let err = BankInstruction::Create { name: "x".into() }.data(&idl).unwrap_err();
        assert!(matches!(err, BankError::ArgumentMismatch(_)));
    }
}
