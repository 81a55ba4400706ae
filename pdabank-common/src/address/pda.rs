use solana_sdk::pubkey::Pubkey;

use crate::constants::BANK_SEED;

/// A program-derived bank address with its bump seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BankAddress {
    pub address: Pubkey,
    pub bump: u8,
}

/// Derives the bank PDA owned by `authority` under `program_id`.
///
/// Seeds are `["bankaccount", authority]`, the same pair the program checks
/// when it creates the account. The result depends only on its inputs.
pub fn bank_address(authority: &Pubkey, program_id: &Pubkey) -> BankAddress {
    let (address, bump) =
        Pubkey::find_program_address(&[BANK_SEED, authority.as_ref()], program_id);
    BankAddress { address, bump }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_identity_yields_same_address() {
        let program_id = Pubkey::new_unique();
        let authority = Pubkey::new_unique();

        let first = bank_address(&authority, &program_id);
        let second = bank_address(&authority, &program_id);

        assert_eq!(first, second);
    }

    #[test]
    fn test_distinct_identities_yield_distinct_addresses() {
        let program_id = Pubkey::new_unique();
        let alice = bank_address(&Pubkey::new_unique(), &program_id);
        let bob = bank_address(&Pubkey::new_unique(), &program_id);

        assert_ne!(alice.address, bob.address);
    }

    #[test]
    fn test_address_is_off_curve_and_recreatable_from_bump() {
        let program_id = Pubkey::new_unique();
        let authority = Pubkey::new_unique();
        let derived = bank_address(&authority, &program_id);

        assert!(!derived.address.is_on_curve());

        let recreated = Pubkey::create_program_address(
            &[BANK_SEED, authority.as_ref(), &[derived.bump]],
            &program_id,
        )
        .expect("bump must recreate the PDA");
        assert_eq!(recreated, derived.address);
    }
}
