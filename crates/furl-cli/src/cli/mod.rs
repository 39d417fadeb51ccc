//! CLI for the furl friendly-URL normalizer.

mod commands;


use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{run_encode, run_normalize, run_pattern, run_strict};

/// Top-level CLI for the furl friendly-URL normalizer.
#[derive(Debug, Parser)]
#[command(name = "furl")]
#[command(about = "furl: friendly-URL normalizer", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Normalize text into a friendly URL (periods and slashes kept).
    Normalize {
        /// Text to normalize; reads lines from stdin when omitted.
        text: Vec<String>,

        /// Truncate output to at most N bytes (at a character boundary).
        #[arg(long, value_name = "N")]
        max_length: Option<usize>,
    },

    /// Normalize text, replacing periods and slashes as well.
    Strict {
        /// Text to normalize; reads lines from stdin when omitted.
        text: Vec<String>,

        /// Truncate output to at most N bytes (at a character boundary).
        #[arg(long, value_name = "N")]
        max_length: Option<usize>,
    },

    /// Normalize text and percent-encode each path segment.
    Encode {
        /// Text to normalize; reads lines from stdin when omitted.
        text: Vec<String>,
    },

    /// Normalize text against a custom disallowed-character pattern.
    Pattern {
        /// Regex matching the characters to replace; falls back to
        /// `disallowed_pattern` from the config file.
        #[arg(long, value_name = "REGEX")]
        pattern: Option<String>,

        /// Text to normalize; reads lines from stdin when omitted.
        text: Vec<String>,

        /// Truncate output to at most N bytes (at a character boundary).
        #[arg(long, value_name = "N")]
        max_length: Option<usize>,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        cli.command.run()
    }

    pub fn run(self) -> Result<()> {
        match self {
            CliCommand::Normalize { text, max_length } => run_normalize(text, max_length),
            CliCommand::Strict { text, max_length } => run_strict(text, max_length),
            CliCommand::Encode { text } => run_encode(text),
            CliCommand::Pattern {
                pattern,
                text,
                max_length,
            } => run_pattern(pattern, text, max_length),
        }
    }
}
