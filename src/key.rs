//! Key derivation from the shared secret.
//!
//! Keys are stretched with PBKDF2 using HMAC-SHA-1 as the pseudorandom
//! function. SHA-1 here is a wire-compatibility requirement: every token
//! carries its salts, and an unsealer must derive byte-identical keys from
//! them regardless of which implementation sealed the token. The outer
//! integrity MAC uses SHA-256 independently of this choice.

use pbkdf2::pbkdf2_hmac;
use sha1::Sha1;
use zeroize::Zeroizing;

/// Derives `key_bits / 8` bytes of key material from the secret and salt.
///
/// Deterministic for equal inputs. The returned buffer is zeroized when
/// dropped.
pub fn derive_key(secret: &[u8], salt: &[u8], iterations: u32, key_bits: usize) -> Zeroizing<Vec<u8>> {
    let mut key = Zeroizing::new(vec![0u8; key_bits / 8]);
    pbkdf2_hmac::<Sha1>(secret, salt, iterations, key.as_mut_slice());
    key
}
