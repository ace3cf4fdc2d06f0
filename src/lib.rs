pub mod cipher;
pub mod config;
pub mod error;
pub mod key;
pub mod message;
pub mod padding;
pub mod random;
pub mod vault;
#[cfg(feature = "cli")]
pub mod cli;

pub use config::{EncryptionOptions, IntegrityOptions, Options};
pub use error::{Error, UnsealError};
pub use vault::Vault;
