//! Payload and token input resolution.

use std::io::Read;

use anyhow::Context;

/// Returns the `--value` argument, or reads stdin to exhaustion and trims
/// surrounding whitespace when no value was given.
pub fn resolve_value(value: Option<String>) -> anyhow::Result<String> {
    match value {
        Some(value) => Ok(value),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read from stdin")?;
            Ok(buffer.trim().to_string())
        }
    }
}
