//! Command-line interface for sealing and unsealing tokens.
//!
//! The binary exposes the two core operations: `seal` turns a payload into
//! a token on stdout, `unseal` verifies a token and writes the payload
//! back out. Both take the shared secret as a flag and fall back to stdin
//! when no `--value` is given.

use std::io::Write;
use std::time::Duration;

use clap::{Parser, Subcommand};

mod input;

pub use input::resolve_value;

use crate::config::Options;
use crate::vault::Vault;

// Version string with release date
// Release date is read from Cargo.toml [package.metadata.release-date] via build script
const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("RELEASE_DATE"), ")");

#[derive(Parser)]
#[command(name = "ironseal")]
#[command(about = "Seal and unseal Fe26.2 tokens")]
#[command(version = VERSION)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Seal a payload into an encrypted, authenticated token
    Seal {
        /// Shared secret the keys are derived from (at least 32 bytes)
        #[arg(long)]
        secret: String,
        /// Payload to seal (read from stdin when omitted)
        #[arg(long)]
        value: Option<String>,
        /// Token lifetime in seconds (no expiration when omitted)
        #[arg(long)]
        ttl: Option<u64>,
    },
    /// Verify a token and print the decrypted payload
    Unseal {
        /// Shared secret the keys are derived from (at least 32 bytes)
        #[arg(long)]
        secret: String,
        /// Token to unseal (read from stdin when omitted)
        #[arg(long)]
        value: Option<String>,
    },
}

/// Parses the command line and runs the selected command.
///
/// # Errors
///
/// Configuration faults (short secret), token validation failures and I/O
/// errors all surface here; the binary prints them to stderr and exits
/// non-zero.
pub fn run<I>(args: I) -> anyhow::Result<()>
where
    I: IntoIterator<Item = String>,
{
    let cli = Cli::parse_from(args);

    match cli.command {
        Commands::Seal { secret, value, ttl } => {
            let payload = resolve_value(value)?;

            let mut options = Options::new(secret.into_bytes());
            if let Some(seconds) = ttl {
                options.ttl = Duration::from_secs(seconds);
            }

            let vault = Vault::new(options)?;
            let token = vault.seal(payload.as_bytes())?;
            println!("{}", token);
        }
        Commands::Unseal { secret, value } => {
            let token = resolve_value(value)?;

            let vault = Vault::new(Options::new(secret.into_bytes()))?;
            let payload = vault.unseal(&token)?;

            // The payload may be arbitrary bytes; write it raw.
            std::io::stdout().write_all(&payload)?;
        }
    }

    Ok(())
}
