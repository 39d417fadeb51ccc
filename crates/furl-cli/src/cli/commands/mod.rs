//! CLI command handlers. Each command is in its own file.

mod encode;
mod normalize;
mod pattern;
mod strict;

pub use encode::run_encode;
pub use normalize::run_normalize;
pub use pattern::run_pattern;
pub use strict::run_strict;

use anyhow::Result;
use std::io::BufRead;

/// Positional TEXT args, or every stdin line when none were given.
fn gather_inputs(text: Vec<String>) -> Result<Vec<String>> {
    if !text.is_empty() {
        return Ok(text);
    }

    let stdin = std::io::stdin();
    let mut inputs = Vec::new();
    for line in stdin.lock().lines() {
        inputs.push(line?);
    }
    Ok(inputs)
}

/// Truncates to at most `limit` bytes, backing up to a character boundary.
fn truncate_to(mut s: String, limit: Option<usize>) -> String {
    let Some(limit) = limit else {
        return s;
    };
    if s.len() <= limit {
        return s;
    }
    let mut take = limit;
    while take > 0 && !s.is_char_boundary(take) {
        take -= 1;
    }
    s.truncate(take);
    s
}
