//! The vault: seal and unseal orchestration.
//!
//! Sealing derives fresh keys from per-token salts, encrypts the tab-padded
//! payload and signs the canonical base string with HMAC-SHA256. Unsealing
//! runs the checks strictly in order — parse, expiration, MAC, decrypt —
//! and stops at the first failure, so only MAC-authenticated ciphertext is
//! ever handed to the cipher.
//!
//! # Security Considerations
//!
//! - MAC comparison is performed in constant time to prevent timing attacks
//! - Derived keys and the configured secret are zeroized on drop
//! - Decryption only occurs after successful MAC verification
//!
//! A vault is immutable after construction and safe to share across
//! threads; every call works on its own message and buffers.

use std::time::{SystemTime, UNIX_EPOCH};

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::cipher::{get_cipher, CipherSuite};
use crate::config::{Options, MIN_SECRET_LEN};
use crate::error::{Error, UnsealError};
use crate::key::derive_key;
use crate::message::Message;
use crate::padding;
use crate::random::random_bits;

type HmacSha256 = Hmac<Sha256>;

/// Seals payloads into `Fe26.2` tokens and unseals them back.
pub struct Vault {
    options: Options,
    cipher: Box<dyn CipherSuite + Send + Sync>,
}

impl std::fmt::Debug for Vault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Vault")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl Vault {
    /// Builds a vault from the given options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SecretTooShort`] if the secret is under 32 bytes
    /// and [`Error::UnsupportedAlgorithm`] if the configured cipher or
    /// hash name is unknown. Both are treated as configuration defects:
    /// no vault is constructed.
    pub fn new(options: Options) -> Result<Self, Error> {
        if options.secret.len() < MIN_SECRET_LEN {
            return Err(Error::SecretTooShort);
        }
        if !options.integrity.hash.eq_ignore_ascii_case("SHA-256") {
            return Err(Error::UnsupportedAlgorithm(options.integrity.hash.clone()));
        }
        let cipher = get_cipher(&options.encryption.cipher)?;
        Ok(Self { options, cipher })
    }

    /// Seals a payload into an encrypted, integrity-protected token.
    ///
    /// A fresh salt and IV are drawn for every call, so sealing the same
    /// payload twice yields different tokens. With a non-zero TTL the
    /// token carries an absolute expiration of "now + TTL".
    ///
    /// Payloads that end in a `0x09` (tab) byte do not round-trip exactly:
    /// unsealing strips the padding tail and any payload tabs adjacent to
    /// it. See [`crate::padding`].
    ///
    /// # Errors
    ///
    /// Random-source and cipher failures propagate; no token is produced
    /// on failure.
    pub fn seal(&self, payload: &[u8]) -> Result<String, Error> {
        let encryption = &self.options.encryption;

        let salt = hex::encode(random_bits(encryption.salt_bits)?);
        let encryption_key = derive_key(
            &self.options.secret,
            salt.as_bytes(),
            encryption.iterations,
            encryption.key_bits,
        );
        let iv = random_bits(encryption.iv_bits)?;

        let padded = padding::pad(payload, self.cipher.block_size());
        let encrypted_body = self.cipher.encrypt(&encryption_key, &iv, &padded)?;

        let mut message = Message::default();
        message.salt = salt;
        message.iv = iv;
        message.encrypted_body = encrypted_body;
        message.expiration = self.expiration();

        let integrity = &self.options.integrity;

        let hmac_salt = hex::encode(random_bits(integrity.salt_bits)?);
        let mac_key = derive_key(
            &self.options.secret,
            hmac_salt.as_bytes(),
            integrity.iterations,
            integrity.key_bits,
        );
        let digest = hmac_sha256(&mac_key, &message.base())?;

        message.hmac_salt = hmac_salt;
        message.hmac = digest;

        Ok(message.pack())
    }

    /// Verifies a token and returns the decrypted payload.
    ///
    /// # Errors
    ///
    /// Validation failures come back as [`Error::Unseal`] with one of the
    /// fixed [`UnsealError`] messages. Cipher, hash and key-derivation
    /// faults propagate verbatim so callers can tell configuration
    /// problems from bad tokens.
    pub fn unseal(&self, sealed: &str) -> Result<Vec<u8>, Error> {
        let mut message = Message::unpack(sealed)?;

        if let Some(expiration) = message.expiration {
            // One-sided check: a token may not be expired by more than the
            // skew, but future-dated tokens pass.
            let now = now_millis() + self.options.local_time_offset_ms;
            let skew = self.options.timestamp_skew.as_millis() as i64;
            if expiration - now < -skew {
                return Err(UnsealError::Expired.into());
            }
        }

        let integrity = &self.options.integrity;
        let mac_key = derive_key(
            &self.options.secret,
            message.hmac_salt.as_bytes(),
            integrity.iterations,
            integrity.key_bits,
        );
        let digest = hmac_sha256(&mac_key, &message.base())?;

        // Constant-time MAC comparison to prevent timing attacks.
        if digest.as_slice().ct_eq(&message.hmac).unwrap_u8() == 0 {
            return Err(UnsealError::BadHmac.into());
        }

        let encryption = &self.options.encryption;
        let encryption_key = derive_key(
            &self.options.secret,
            message.salt.as_bytes(),
            encryption.iterations,
            encryption.key_bits,
        );
        let plaintext = self.cipher.decrypt(&encryption_key, &message.iv, &message.encrypted_body)?;

        Ok(padding::trim(plaintext))
    }

    fn expiration(&self) -> Option<i64> {
        if self.options.ttl.is_zero() {
            return None;
        }
        Some(now_millis() + self.options.ttl.as_millis() as i64)
    }
}

fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or_default()
}

fn hmac_sha256(key: &[u8], base: &str) -> Result<Vec<u8>, Error> {
    let mut mac = HmacSha256::new_from_slice(key).map_err(|_| Error::CipherInitFailed)?;
    mac.update(base.as_bytes());
    Ok(mac.finalize().into_bytes().to_vec())
}
