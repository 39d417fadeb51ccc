//! Pattern command: normalization with a custom disallowed-character pattern.

use anyhow::{Context, Result};
use furl_core::config;
use furl_core::normalize::{compile_disallowed_pattern, normalize_with_pattern};

use super::{gather_inputs, truncate_to};

/// Normalize each input against the given (or configured) pattern.
pub fn run_pattern(
    pattern: Option<String>,
    text: Vec<String>,
    max_length: Option<usize>,
) -> Result<()> {
    let cfg = config::load_or_init()?;
    let pattern = pattern
        .or(cfg.disallowed_pattern)
        .context("no pattern given and no disallowed_pattern configured")?;
    let disallowed = compile_disallowed_pattern(&pattern)?;
    let max_length = max_length.or(cfg.max_length);

    let inputs = gather_inputs(text)?;
    tracing::debug!("normalizing {} inputs against {pattern:?}", inputs.len());

    for input in inputs {
        println!(
            "{}",
            truncate_to(normalize_with_pattern(&input, &disallowed), max_length)
        );
    }
    Ok(())
}
