use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ChronicleError;

/// How the parser treats `"` characters at the start of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Quoting {
    /// A field opening with `"` runs to the matching closing quote; `""`
    /// inside it is a literal quote and delimiters are literal text.
    #[default]
    Standard,
    /// Split on every delimiter; quotes are ordinary characters.
    Naive,
}

impl FromStr for Quoting {
    type Err = ChronicleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "standard" => Ok(Quoting::Standard),
            "naive" | "none" => Ok(Quoting::Naive),
            other => Err(ChronicleError::Config(format!(
                "unknown quoting mode: {other}"
            ))),
        }
    }
}

impl fmt::Display for Quoting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quoting::Standard => f.write_str("standard"),
            Quoting::Naive => f.write_str("naive"),
        }
    }
}

/// Tunables for turning delimited text into records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseOptions {
    /// Single field separator character.
    pub delimiter: char,
    pub quoting: Quoting,
    /// Strip surrounding whitespace from header names and values.
    pub trim_fields: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            delimiter: ',',
            quoting: Quoting::Standard,
            trim_fields: false,
        }
    }
}

impl ParseOptions {
    /// Parse a delimiter argument, which must be exactly one character that
    /// is neither a quote nor a line break.
    pub fn delimiter_from_str(s: &str) -> Result<char, ChronicleError> {
        if s == "\\t" {
            return Ok('\t');
        }
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if !matches!(c, '"' | '\n' | '\r') => Ok(c),
            _ => Err(ChronicleError::Config(format!(
                "delimiter must be a single non-quote character, got {s:?}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = ParseOptions::default();
        assert_eq!(opts.delimiter, ',');
        assert_eq!(opts.quoting, Quoting::Standard);
        assert!(!opts.trim_fields);
    }

    #[test]
    fn test_quoting_from_str() {
        assert_eq!("standard".parse::<Quoting>().unwrap(), Quoting::Standard);
        assert_eq!("NAIVE".parse::<Quoting>().unwrap(), Quoting::Naive);
        assert_eq!("none".parse::<Quoting>().unwrap(), Quoting::Naive);
        assert!("rfc".parse::<Quoting>().is_err());
    }

    #[test]
    fn test_delimiter_from_str() {
        assert_eq!(ParseOptions::delimiter_from_str(",").unwrap(), ',');
        assert_eq!(ParseOptions::delimiter_from_str(";").unwrap(), ';');
        assert_eq!(ParseOptions::delimiter_from_str("\\t").unwrap(), '\t');
    }

    #[test]
    fn test_delimiter_rejects_bad_input() {
        assert!(ParseOptions::delimiter_from_str("").is_err());
        assert!(ParseOptions::delimiter_from_str(",,").is_err());
        assert!(ParseOptions::delimiter_from_str("\"").is_err());
        assert!(ParseOptions::delimiter_from_str("\n").is_err());
    }
}
