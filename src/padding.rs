//! Fixed-byte block padding.
//!
//! Plaintext is extended with `0x09` (horizontal tab) bytes up to the next
//! block boundary before encryption; an already aligned plaintext still
//! receives one full block of padding so the trimmer always has something
//! to strip. After decryption all trailing tabs are removed.
//!
//! The scheme is not reversible for payloads that legitimately end in a
//! tab: those come back with their trailing tabs stripped. This matches
//! the reference wire behavior and keeps the codec ASCII-safe.

/// The padding byte, a horizontal tab.
pub const PAD_BYTE: u8 = 0x09;

/// Pads the payload with tab bytes to a whole number of blocks.
///
/// An aligned payload (including an empty one) gains a full extra block.
pub fn pad(payload: &[u8], block_size: usize) -> Vec<u8> {
    let fill = block_size - payload.len() % block_size;
    let mut padded = Vec::with_capacity(payload.len() + fill);
    padded.extend_from_slice(payload);
    padded.resize(payload.len() + fill, PAD_BYTE);
    padded
}

/// Strips all trailing tab bytes from a decrypted plaintext.
pub fn trim(mut plaintext: Vec<u8>) -> Vec<u8> {
    while plaintext.last() == Some(&PAD_BYTE) {
        plaintext.pop();
    }
    plaintext
}
