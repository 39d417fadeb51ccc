//! Encode command: normalization with percent-encoded path segments.

use anyhow::Result;
use furl_core::normalize::normalize_with_encoding;

use super::gather_inputs;

/// Normalize and percent-encode each input, one result per line.
pub fn run_encode(text: Vec<String>) -> Result<()> {
    let inputs = gather_inputs(text)?;
    tracing::debug!("encoding {} inputs", inputs.len());

    for input in inputs {
        println!("{}", normalize_with_encoding(&input));
    }
    Ok(())
}
