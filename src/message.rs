//! The sealed token representation and its wire codec.
//!
//! A packed token is eight `*`-separated fields:
//!
//! ```text
//! Fe26.2*<key-id>*<enc-salt>*<iv-b64url>*<body-b64url>*<exp-ms?>*<hmac-salt>*<hmac-b64url>
//! ```
//!
//! The key-id field is reserved and emitted empty, but any ingested value
//! is tolerated. Salts travel verbatim as ASCII; IV, body and HMAC are
//! base64url without padding. The "base" string — the first six fields
//! joined, with no trailing delimiter — is what the integrity MAC covers.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

use crate::error::UnsealError;

/// Token prefix identifying the format and MAC scheme version.
pub const MAC_PREFIX: &str = "Fe26.2";

/// Field delimiter of the packed token.
pub const DELIMITER: char = '*';

/// In-memory form of a sealed token.
///
/// Lives on the stack of a single seal or unseal call.
#[derive(Debug, Clone, Default)]
pub struct Message {
    /// Encryption salt in its on-wire ASCII form (not decoded).
    pub salt: String,
    /// Raw initialization vector bytes.
    pub iv: Vec<u8>,
    /// Raw ciphertext bytes.
    pub encrypted_body: Vec<u8>,
    /// Expiration as milliseconds since the Unix epoch; `None` means the
    /// token never expires.
    pub expiration: Option<i64>,
    /// Integrity salt in its on-wire ASCII form (not decoded).
    pub hmac_salt: String,
    /// Raw MAC digest bytes.
    pub hmac: Vec<u8>,
    base: Option<String>,
}

impl Message {
    /// Parses a packed token.
    ///
    /// The base string is memoized as a byte slice of the original input
    /// rather than rebuilt from the parsed fields. Re-encoding could
    /// produce different bytes than a foreign sealer emitted, which would
    /// break MAC verification; slicing cannot.
    pub fn unpack(sealed: &str) -> Result<Message, UnsealError> {
        let parts: Vec<&str> = sealed.split(DELIMITER).collect();
        if parts.len() != 8 {
            return Err(UnsealError::IncorrectComponentCount);
        }
        if parts[0] != MAC_PREFIX {
            return Err(UnsealError::WrongMacPrefix);
        }

        let expiration = if parts[5].is_empty() {
            None
        } else {
            Some(parts[5].parse::<i64>().map_err(|_| UnsealError::InvalidExpiration)?)
        };

        let iv = decode_field(parts[3])?;
        let encrypted_body = decode_field(parts[4])?;
        let hmac = decode_field(parts[7])?;

        // Everything before the hmac salt, its digest and their two
        // delimiters is the MAC base.
        let base_len = sealed.len() - parts[7].len() - 1 - parts[6].len() - 1;

        Ok(Message {
            salt: parts[2].to_string(),
            iv,
            encrypted_body,
            expiration,
            hmac_salt: parts[6].to_string(),
            hmac,
            base: Some(sealed[..base_len].to_string()),
        })
    }

    /// Returns the canonical string the MAC covers, memoizing it on first
    /// use.
    pub fn base(&mut self) -> String {
        if self.base.is_none() {
            let expiration = match self.expiration {
                Some(ms) => ms.to_string(),
                None => String::new(),
            };
            self.base = Some(format!(
                "{}**{}*{}*{}*{}",
                MAC_PREFIX,
                self.salt,
                URL_SAFE_NO_PAD.encode(&self.iv),
                URL_SAFE_NO_PAD.encode(&self.encrypted_body),
                expiration,
            ));
        }
        self.base.clone().unwrap_or_default()
    }

    /// Produces the packed token: the base followed by the integrity salt
    /// and MAC.
    pub fn pack(&mut self) -> String {
        let base = self.base();
        format!(
            "{}{}{}{}{}",
            base,
            DELIMITER,
            self.hmac_salt,
            DELIMITER,
            URL_SAFE_NO_PAD.encode(&self.hmac),
        )
    }
}

fn decode_field(field: &str) -> Result<Vec<u8>, UnsealError> {
    URL_SAFE_NO_PAD.decode(field).map_err(|_| UnsealError::InvalidEncoding)
}
