//! Normalize command: friendly-URL normalization with periods and slashes kept.

use anyhow::Result;
use furl_core::config;
use furl_core::normalize::normalize;

use super::{gather_inputs, truncate_to};

/// Normalize each input and print one result per line.
pub fn run_normalize(text: Vec<String>, max_length: Option<usize>) -> Result<()> {
    let cfg = config::load_or_init()?;
    let max_length = max_length.or(cfg.max_length);

    let inputs = gather_inputs(text)?;
    tracing::debug!("normalizing {} inputs", inputs.len());

    for input in inputs {
        println!("{}", truncate_to(normalize(&input), max_length));
    }
    Ok(())
}
