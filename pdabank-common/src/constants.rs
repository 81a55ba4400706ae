use solana_sdk::native_token::LAMPORTS_PER_SOL;

/// Seed prefix of every bank PDA. The second seed is the owner's public key.
pub const BANK_SEED: &[u8] = b"bankaccount";

/// Display name given to banks created from this client.
pub const DEFAULT_BANK_NAME: &str = "WsoS Bank";

/// Amount moved by a single deposit or withdraw: 0.1 SOL.
pub const TRANSFER_AMOUNT_LAMPORTS: u64 = LAMPORTS_PER_SOL / 10;

/// Name of the bank account type in the program IDL.
pub const BANK_ACCOUNT_TYPE: &str = "Bank";

/// IDL of the bank program, bundled at build time.
pub const BUNDLED_IDL: &str = include_str!("../idl/solanapdas.json");

/// Converts lamports to SOL for display only.
pub fn lamports_to_sol(lamports: u64) -> f64 {
    lamports as f64 / LAMPORTS_PER_SOL as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transfer_amount_is_a_tenth_of_a_sol() {
        assert_eq!(TRANSFER_AMOUNT_LAMPORTS, 100_000_000);
        assert_eq!(lamports_to_sol(TRANSFER_AMOUNT_LAMPORTS), 0.1);
    }
}
