//! Vault configuration.
//!
//! Options are assembled once, handed to [`crate::Vault::new`] and
//! immutable from then on. The secret is held in a zeroizing buffer so it
//! is wiped when the vault is dropped.

use std::time::Duration;

use zeroize::Zeroizing;

/// Minimum length of the shared secret in bytes.
pub const MIN_SECRET_LEN: usize = 32;

/// Parameters for the encryption half of a token.
#[derive(Debug, Clone)]
pub struct EncryptionOptions {
    /// Derived key size in bits.
    pub key_bits: usize,
    /// PBKDF2 iteration count.
    pub iterations: u32,
    /// Random salt size in bits.
    pub salt_bits: usize,
    /// Initialization vector size in bits.
    pub iv_bits: usize,
    /// Cipher suite name, resolved through [`crate::cipher::get_cipher`].
    pub cipher: String,
}

impl Default for EncryptionOptions {
    fn default() -> Self {
        Self {
            key_bits: 256,
            iterations: 1,
            salt_bits: 256,
            iv_bits: 128,
            cipher: "AES-256-CBC".to_string(),
        }
    }
}

/// Parameters for the integrity half of a token.
#[derive(Debug, Clone)]
pub struct IntegrityOptions {
    /// Derived MAC key size in bits.
    pub key_bits: usize,
    /// PBKDF2 iteration count.
    pub iterations: u32,
    /// Random salt size in bits.
    pub salt_bits: usize,
    /// MAC hash name.
    pub hash: String,
}

impl Default for IntegrityOptions {
    fn default() -> Self {
        Self {
            key_bits: 256,
            iterations: 1,
            salt_bits: 256,
            hash: "SHA-256".to_string(),
        }
    }
}

/// Vault configuration: the shared secret plus sealing and validation
/// parameters.
#[derive(Clone, Debug)]
pub struct Options {
    /// Raw shared secret bytes. Must be at least [`MIN_SECRET_LEN`] bytes.
    pub secret: Zeroizing<Vec<u8>>,
    /// Lifetime added to "now" when sealing. Zero seals without an
    /// expiration.
    pub ttl: Duration,
    /// Permitted clock skew when validating expiration.
    pub timestamp_skew: Duration,
    /// Additive adjustment, in milliseconds, applied to the local clock
    /// during expiration checks.
    pub local_time_offset_ms: i64,
    /// Encryption parameters.
    pub encryption: EncryptionOptions,
    /// Integrity parameters.
    pub integrity: IntegrityOptions,
}

impl Options {
    /// Creates options with the given secret and default parameters:
    /// no TTL, 60 second skew, AES-256-CBC with single-iteration PBKDF2
    /// and 256-bit salts.
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            secret: Zeroizing::new(secret.into()),
            ttl: Duration::ZERO,
            timestamp_skew: Duration::from_secs(60),
            local_time_offset_ms: 0,
            encryption: EncryptionOptions::default(),
            integrity: IntegrityOptions::default(),
        }
    }
}
