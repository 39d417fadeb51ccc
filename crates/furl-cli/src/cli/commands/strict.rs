//! Strict command: normalization that also replaces periods and slashes.

use anyhow::Result;
use furl_core::config;
use furl_core::normalize::normalize_with_periods_and_slashes;

use super::{gather_inputs, truncate_to};

/// Normalize each input with periods and slashes replaced, one result per line.
pub fn run_strict(text: Vec<String>, max_length: Option<usize>) -> Result<()> {
    let cfg = config::load_or_init()?;
    let max_length = max_length.or(cfg.max_length);

    let inputs = gather_inputs(text)?;
    tracing::debug!("strict-normalizing {} inputs", inputs.len());

    for input in inputs {
        println!(
            "{}",
            truncate_to(normalize_with_periods_and_slashes(&input), max_length)
        );
    }
    Ok(())
}
