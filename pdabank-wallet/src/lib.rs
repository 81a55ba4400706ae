pub mod errors;
pub mod keypair;
pub mod signer;

pub use errors::WalletError;
pub use keypair::{KeypairWallet, DEFAULT_KEYPAIR_PATH};
pub use signer::WalletSigner;
