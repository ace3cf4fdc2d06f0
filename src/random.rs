//! Cryptographically secure random byte generation.

use rand::rngs::OsRng;
use rand::RngCore;

use crate::error::Error;

/// Draws `bits / 8` bytes from the operating system RNG.
///
/// # Errors
///
/// Returns [`Error::RandomSourceUnavailable`] if the OS random source
/// cannot be read. On success the buffer is always fully filled.
pub fn random_bits(bits: usize) -> Result<Vec<u8>, Error> {
    let mut bytes = vec![0u8; bits / 8];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(Error::RandomSourceUnavailable)?;
    Ok(bytes)
}
