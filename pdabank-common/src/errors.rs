use thiserror::Error;

/// Errors raised while reading the program interface or encoding/decoding
/// data exchanged with the bank program.
#[derive(Debug, Error)]
pub enum BankError {
    /// The IDL document could not be parsed.
    #[error("Invalid IDL: {0}")]
    InvalidIdl(#[from] serde_json::Error),

    /// The IDL does not declare the requested instruction.
    #[error("Unknown instruction: {0}")]
    UnknownInstruction(String),

    /// The IDL does not declare the requested account type.
    #[error("Unknown account type: {0}")]
    UnknownAccountType(String),

    /// An instruction lists an account the caller cannot resolve.
    #[error("Cannot resolve account `{account}` for instruction `{instruction}`")]
    UnresolvedAccount { instruction: String, account: String },

    /// Supplied arguments do not line up with the IDL argument list.
    ///
    /// Raised when the count differs, a name differs, or a value does not
    /// have the declared type.
    #[error("Argument mismatch: {0}")]
    ArgumentMismatch(String),

    /// The IDL uses a type this client cannot encode or decode.
    #[error("Unsupported IDL type: {0}")]
    UnsupportedType(String),

    /// Account data does not start with the expected discriminator.
    #[error("Discriminator mismatch: expected {expected}, found {found}")]
    DiscriminatorMismatch { expected: String, found: String },

    /// Account data is truncated or malformed.
    #[error("Failed to decode account data: {0}")]
    Decode(String),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
