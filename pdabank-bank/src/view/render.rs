use std::fmt::Write;
use std::str::FromStr;

use pdabank_common::account::BankRecord;
use pdabank_common::constants::{lamports_to_sol, TRANSFER_AMOUNT_LAMPORTS};

use super::Action;
use crate::errors::BankClientError;

/// A control shown by [`render`], addressed by the short command printed next to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    CreateBank,
    GetBanks,
    Deposit(usize),
    Withdraw(usize),
    Quit,
}

impl FromStr for Control {
    type Err = BankClientError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut parts = input.split_whitespace();
        let command = parts.next().unwrap_or_default();
        let index = parts.next().map(|raw| {
            raw.parse::<usize>()
                .map_err(|_| BankClientError::InvalidCommand(format!("`{}` is not a bank number", raw)))
        });
        if parts.next().is_some() {
            return Err(BankClientError::InvalidCommand(input.to_string()));
        }

        match (command, index) {
            ("c", None) => Ok(Control::CreateBank),
            ("g", None) => Ok(Control::GetBanks),
            ("q", None) => Ok(Control::Quit),
            ("d", Some(index)) => Ok(Control::Deposit(index?)),
            ("w", Some(index)) => Ok(Control::Withdraw(index?)),
            _ => Err(BankClientError::InvalidCommand(input.to_string())),
        }
    }
}

impl Control {
    /// Maps the control onto an action against the listed banks.
    ///
    /// Returns `None` for [`Control::Quit`].
    pub fn resolve(self, banks: &[BankRecord]) -> Result<Option<Action>, BankClientError> {
        let target = |index: usize| {
            banks
                .get(index)
                .map(|bank| bank.address)
                .ok_or_else(|| BankClientError::InvalidCommand(format!("no bank #{}", index)))
        };
        Ok(match self {
            Control::CreateBank => Some(Action::Create),
            Control::GetBanks => Some(Action::Refresh),
            Control::Deposit(index) => Some(Action::Deposit(target(index)?)),
            Control::Withdraw(index) => Some(Action::Withdraw(target(index)?)),
            Control::Quit => None,
        })
    }
}

/// Text rendering of the bank list and its controls.
pub fn render(banks: &[BankRecord]) -> String {
    let amount = lamports_to_sol(TRANSFER_AMOUNT_LAMPORTS);
    let mut out = String::new();

    for (i, bank) in banks.iter().enumerate() {
        let _ = writeln!(out, "[{}] {}", i, bank.name);
        let _ = writeln!(out, "    address: {}", bank.address);
        let _ = writeln!(out, "    balance: {} ({} SOL)", bank.balance, lamports_to_sol(bank.balance));
        let _ = writeln!(out, "    d {i}: Deposit {amount}   w {i}: Withdraw {amount}", i = i, amount = amount);
    }

    let _ = writeln!(out, "c: Create Bank   g: Get Banks   q: Quit");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::pubkey::Pubkey;

    fn record(name: &str, balance: u64) -> BankRecord {
        BankRecord { address: Pubkey::new_unique(), name: name.into(), balance, owner: None }
    }

    #[test]
    fn test_render_lists_banks_in_order_with_controls() {
        let banks = vec![record("first", 100_000_000), record("second", 0)];
        let out = render(&banks);

        let first = out.find("[0] first").expect("first bank rendered");
        let second = out.find("[1] second").expect("second bank rendered");
        assert!(first < second);

        assert!(out.contains(&format!("address: {}", banks[0].address)));
        assert!(out.contains("balance: 100000000 (0.1 SOL)"));
        assert!(out.contains("d 1: Deposit 0.1   w 1: Withdraw 0.1"));
        assert!(out.ends_with("c: Create Bank   g: Get Banks   q: Quit\n"));
    }

    #[test]
    fn test_render_empty_list_shows_only_global_controls() {
        assert_eq!(render(&[]), "c: Create Bank   g: Get Banks   q: Quit\n");
    }

    #[test]
    fn test_parse_controls() {
        assert_eq!("c".parse::<Control>().unwrap(), Control::CreateBank);
        assert_eq!(" g ".parse::<Control>().unwrap(), Control::GetBanks);
        assert_eq!("d 2".parse::<Control>().unwrap(), Control::Deposit(2));
        assert_eq!("w 0".parse::<Control>().unwrap(), Control::Withdraw(0));
        assert_eq!("q".parse::<Control>().unwrap(), Control::Quit);

        for bad in ["", "d", "w x", "c 1", "d 1 2", "deposit"] {
            assert!(bad.parse::<Control>().is_err(), "`{}` should not parse", bad);
        }
    }

    #[test]
    fn test_resolve_targets_listed_address() {
        let banks = vec![record("a", 1), record("b", 2)];

        assert_eq!(Control::Deposit(1).resolve(&banks).unwrap(), Some(Action::Deposit(banks[1].address)));
        assert_eq!(Control::Withdraw(0).resolve(&banks).unwrap(), Some(Action::Withdraw(banks[0].address)));
        assert_eq!(Control::GetBanks.resolve(&[]).unwrap(), Some(Action::Refresh));
        assert_eq!(Control::Quit.resolve(&banks).unwrap(), None);
        assert!(matches!(Control::Deposit(2).resolve(&banks), Err(BankClientError::InvalidCommand(_))));
    }
}
