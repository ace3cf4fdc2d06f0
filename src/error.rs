//! Error types for sealing and unsealing.
//!
//! Two families are kept deliberately separate:
//!
//! - [`UnsealError`] covers validation failures caused by the input token.
//!   Its messages are fixed strings that callers (and other implementations'
//!   test suites) match on, so they must never change.
//! - [`Error`] covers operational faults (RNG, cipher setup) and
//!   configuration defects, plus an [`Error::Unseal`] wrapper so the vault
//!   can return a single error type while keeping the families
//!   distinguishable.

/// A validation failure caused by the sealed token itself.
///
/// Callers should treat every variant as "authentication failed"; the
/// message identifies which check rejected the token but leaks nothing
/// about the secret or payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnsealError {
    /// The token did not split into exactly eight `*`-separated fields.
    IncorrectComponentCount,

    /// The first field was not the expected `Fe26.2` prefix.
    WrongMacPrefix,

    /// The expiration field was non-empty but not a decimal integer.
    InvalidExpiration,

    /// A base64url field (IV, body or HMAC) failed to decode.
    InvalidEncoding,

    /// The token expired more than the permitted skew ago.
    Expired,

    /// The recomputed HMAC did not match the one carried by the token.
    BadHmac,
}

impl std::fmt::Display for UnsealError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Interop test suites match on these exact strings.
        match self {
            UnsealError::IncorrectComponentCount => write!(f, "Incorrect number of sealed components"),
            UnsealError::WrongMacPrefix => write!(f, "Wrong mac prefix"),
            UnsealError::InvalidExpiration => write!(f, "Invalid expiration time"),
            UnsealError::InvalidEncoding => write!(f, "Invalid component encoding"),
            UnsealError::Expired => write!(f, "Expired or invalid seal"),
            UnsealError::BadHmac => write!(f, "Bad hmac value"),
        }
    }
}

impl std::error::Error for UnsealError {}

/// Errors surfaced by the vault and its components.
#[derive(Debug)]
pub enum Error {
    /// The token failed validation. See [`UnsealError`].
    Unseal(UnsealError),

    /// The OS random number generator could not produce bytes.
    RandomSourceUnavailable(rand::Error),

    /// The cipher or MAC could not be initialized (bad key or IV size).
    CipherInitFailed,

    /// The block encryption operation failed.
    ///
    /// Contains a detailed error message describing the failure reason.
    EncryptionFailed(String),

    /// The block decryption operation failed (ciphertext not a whole
    /// number of blocks).
    DecryptionFailed,

    /// The configured cipher or hash name is not supported.
    UnsupportedAlgorithm(String),

    /// The configured secret is shorter than the 32-byte minimum.
    ///
    /// This is a programming defect, not a runtime condition: the vault
    /// refuses to construct rather than seal forgeable tokens.
    SecretTooShort,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Unseal(e) => write!(f, "{}", e),
            Error::RandomSourceUnavailable(e) => write!(f, "random source unavailable: {}", e),
            Error::CipherInitFailed => write!(f, "cipher initialization failed"),
            Error::EncryptionFailed(msg) => write!(f, "encryption failed: {}", msg),
            Error::DecryptionFailed => write!(f, "decryption failed"),
            Error::UnsupportedAlgorithm(name) => write!(f, "unsupported algorithm: {}", name),
            Error::SecretTooShort => write!(f, "secret must be at least 32 bytes"),
        }
    }
}

impl std::error::Error for Error {}

impl From<UnsealError> for Error {
    fn from(e: UnsealError) -> Self {
        Error::Unseal(e)
    }
}
