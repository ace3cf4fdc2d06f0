//! Block cipher suites.
//!
//! A [`CipherSuite`] turns a key and IV into paired block-mode encrypt and
//! decrypt operations. The suite works on whole blocks only; the tab
//! padding from [`crate::padding`] is applied by the vault before
//! encryption and trimmed after decryption, so the cipher itself runs
//! without a padding layer.
//!
//! The default (and currently only) suite is AES-256 in CBC mode.
//! Alternative suites plug in through [`get_cipher`] without touching the
//! vault.

use aes::Aes256;
use cbc::{Decryptor, Encryptor};
use cipher::block_padding::NoPadding;
use cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};

use crate::error::Error;

type Aes256CbcEnc = Encryptor<Aes256>;
type Aes256CbcDec = Decryptor<Aes256>;

/// A pluggable pair of block-mode encrypt/decrypt operations.
///
/// Implementations receive plaintext that is already padded to a whole
/// number of blocks and must emit ciphertext of the same length. Key or IV
/// size mismatches surface as [`Error::CipherInitFailed`].
pub trait CipherSuite {
    /// The cipher block size in bytes.
    fn block_size(&self) -> usize;

    /// Encrypts block-aligned plaintext under the given key and IV.
    fn encrypt(&self, key: &[u8], iv: &[u8], plaintext: &[u8]) -> Result<Vec<u8>, Error>;

    /// Decrypts ciphertext under the given key and IV.
    fn decrypt(&self, key: &[u8], iv: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>, Error>;
}

/// AES-256 in CBC mode, the default suite.
pub struct Aes256Cbc;

impl CipherSuite for Aes256Cbc {
    fn block_size(&self) -> usize {
        16
    }

    fn encrypt(&self, key: &[u8], iv: &[u8], plaintext: &[u8]) -> Result<Vec<u8>, Error> {
        let key_array: [u8; 32] = key.try_into().map_err(|_| Error::CipherInitFailed)?;
        let iv_array: [u8; 16] = iv.try_into().map_err(|_| Error::CipherInitFailed)?;

        let cipher = Aes256CbcEnc::new(&key_array.into(), &iv_array.into());

        let mut buffer = plaintext.to_vec();
        let pt_len = buffer.len();
        let encrypted = cipher
            .encrypt_padded_mut::<NoPadding>(&mut buffer, pt_len)
            .map_err(|e| Error::EncryptionFailed(format!("{:?}", e)))?;

        Ok(encrypted.to_vec())
    }

    fn decrypt(&self, key: &[u8], iv: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>, Error> {
        let key_array: [u8; 32] = key.try_into().map_err(|_| Error::CipherInitFailed)?;
        let iv_array: [u8; 16] = iv.try_into().map_err(|_| Error::CipherInitFailed)?;

        let cipher = Aes256CbcDec::new(&key_array.into(), &iv_array.into());

        let mut buffer = ciphertext.to_vec();
        let decrypted = cipher
            .decrypt_padded_mut::<NoPadding>(&mut buffer)
            .map_err(|_| Error::DecryptionFailed)?;

        Ok(decrypted.to_vec())
    }
}

/// Creates a cipher suite from its configured name.
///
/// The name is case-insensitive. Only `AES-256-CBC` is currently
/// supported; unknown names fail with [`Error::UnsupportedAlgorithm`].
pub fn get_cipher(name: &str) -> Result<Box<dyn CipherSuite + Send + Sync>, Error> {
    match name.to_uppercase().as_str() {
        "AES-256-CBC" => Ok(Box::new(Aes256Cbc)),
        _ => Err(Error::UnsupportedAlgorithm(name.to_string())),
    }
}
