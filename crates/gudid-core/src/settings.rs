use std::path::PathBuf;

use clap::Parser;

use crate::error::Result;
use crate::options::{ParseOptions, Quoting};

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Packing-list analytics for medical-device shipments
#[derive(Parser, Debug, Clone)]
#[command(
    name = "gudid-chronicles",
    about = "Packing-list analytics for medical-device shipments",
    version
)]
pub struct Settings {
    /// Packing-list CSV file to analyze (the built-in sample when omitted)
    #[arg(long, conflicts_with = "stdin")]
    pub file: Option<PathBuf>,

    /// Read the packing list from standard input
    #[arg(long)]
    pub stdin: bool,

    /// Output format
    #[arg(long, default_value = "text", value_parser = ["text", "json"])]
    pub format: String,

    /// Rows shown in each ranked table
    #[arg(long, default_value = "5")]
    pub top: usize,

    /// Column delimiter (a single character, or \t for tab)
    #[arg(long, default_value = ",")]
    pub delimiter: String,

    /// Quoted-field handling
    #[arg(long, default_value = "standard", value_parser = ["standard", "naive"])]
    pub quoting: String,

    /// Trim whitespace around header names and values
    #[arg(long)]
    pub trim: bool,

    /// Logging level
    #[arg(
        long,
        env = "GUDID_LOG_LEVEL",
        default_value = "WARNING",
        value_parser = ["DEBUG", "INFO", "WARNING", "ERROR"]
    )]
    pub log_level: String,

    /// Log file path
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Settings {
    /// Parser options derived from the delimiter, quoting and trim flags.
    pub fn parse_options(&self) -> Result<ParseOptions> {
        Ok(ParseOptions {
            delimiter: ParseOptions::delimiter_from_str(&self.delimiter)?,
            quoting: self.quoting.parse::<Quoting>()?,
            trim_fields: self.trim,
        })
    }

    /// Log level after applying `--debug`.
    pub fn effective_log_level(&self) -> &str {
        if self.debug {
            "DEBUG"
        } else {
            &self.log_level
        }
    }

    /// `true` when JSON output was requested.
    pub fn wants_json(&self) -> bool {
        self.format == "json"
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
