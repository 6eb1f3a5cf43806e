use std::path::PathBuf;
use thiserror::Error;

/// Raw text could not be interpreted as a header-plus-rows table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input contains no header line (empty or whitespace-only text).
    #[error("No header row found in input")]
    MissingHeader,

    /// A quoted field was opened but never closed on the same line.
    #[error("Unterminated quoted field on line {line}")]
    UnterminatedQuote { line: usize },

    /// Text followed the closing quote of a field before the next delimiter.
    #[error("Unexpected text after closing quote on line {line}")]
    TrailingAfterQuote { line: usize },
}

/// All errors produced by GUDID Chronicles.
#[derive(Error, Debug)]
pub enum ChronicleError {
    /// The packing-list text could not be parsed.
    #[error("Failed to parse packing list: {0}")]
    Parse(#[from] ParseError),

    /// A packing-list file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A JSON document could not be produced.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the chronicles crates.
pub type Result<T> = std::result::Result<T, ChronicleError>;
