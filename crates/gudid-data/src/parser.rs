//! Delimited-text parsing for packing-list tables.
//!
//! The first non-blank line names the columns; every following non-empty
//! line becomes one [`PackingListItem`], mapped onto the header by position.

use std::sync::Arc;

use gudid_core::error::ParseError;
use gudid_core::models::PackingListItem;
use gudid_core::options::{ParseOptions, Quoting};
use tracing::debug;

// ── Public API ────────────────────────────────────────────────────────────────

/// A parsed table: the header row plus one record per data row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTable {
    /// Column names exactly as written in the header row.
    pub headers: Arc<[String]>,
    /// Records in source row order.
    pub records: Vec<PackingListItem>,
}

/// Parse comma-delimited text with the default options.
pub fn parse(raw: &str) -> Result<Vec<PackingListItem>, ParseError> {
    parse_with(raw, &ParseOptions::default())
}

/// Parse delimited text into records using `options`.
///
/// Returns [`ParseError::MissingHeader`] when the text has no header line.
/// A header with no data rows is a valid, empty result.
pub fn parse_with(raw: &str, options: &ParseOptions) -> Result<Vec<PackingListItem>, ParseError> {
    parse_table(raw, options).map(|table| table.records)
}

/// Like [`parse_with`] but also returns the header row.
///
/// A leading UTF-8 byte order mark is not part of the first header name.
pub fn parse_table(raw: &str, options: &ParseOptions) -> Result<ParsedTable, ParseError> {
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);
    let mut lines = raw
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.strip_suffix('\r').unwrap_or(line)));

    let (header_line_no, header_line) = lines
        .by_ref()
        .find(|(_, line)| !line.trim().is_empty())
        .ok_or(ParseError::MissingHeader)?;

    let headers: Arc<[String]> = split_line(header_line, header_line_no, options)?.into();
    let width = headers.len();

    let mut records = Vec::new();
    for (line_no, line) in lines {
        if line.is_empty() {
            continue;
        }

        let mut values = split_line(line, line_no, options)?;
        if values.len() > width {
            debug!(
                line = line_no,
                dropped = values.len() - width,
                "dropping fields beyond header width"
            );
            values.truncate(width);
        }

        records.push(PackingListItem::new(Arc::clone(&headers), values));
    }

    debug!(
        columns = width,
        rows = records.len(),
        "parsed packing list"
    );

    Ok(ParsedTable { headers, records })
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Split one line into fields according to `options`.
fn split_line(line: &str, line_no: usize, options: &ParseOptions) -> Result<Vec<String>, ParseError> {
    let fields: Vec<String> = match options.quoting {
        Quoting::Naive => line.split(options.delimiter).map(str::to_string).collect(),
        Quoting::Standard => split_quoted(line, line_no, options.delimiter)?,
    };

    if options.trim_fields {
        Ok(fields.into_iter().map(|f| f.trim().to_string()).collect())
    } else {
        Ok(fields)
    }
}

/// Split a line, honouring fields that open with `"`.
///
/// Inside a quoted field the delimiter is literal and `""` stands for one
/// quote. Unquoted fields are taken verbatim up to the next delimiter.
fn split_quoted(line: &str, line_no: usize, delimiter: char) -> Result<Vec<String>, ParseError> {
    let mut fields = Vec::new();
    let mut rest = line;

    loop {
        let Some(quoted) = rest.strip_prefix('"') else {
            match rest.split_once(delimiter) {
                Some((field, tail)) => {
                    fields.push(field.to_string());
                    rest = tail;
                    continue;
                }
                None => {
                    fields.push(rest.to_string());
                    break;
                }
            }
        };

        let mut value = String::new();
        let mut chars = quoted.char_indices().peekable();
        let end = loop {
            match chars.next() {
                None => return Err(ParseError::UnterminatedQuote { line: line_no }),
                Some((idx, '"')) => {
                    if matches!(chars.peek(), Some((_, '"'))) {
                        value.push('"');
                        chars.next();
                    } else {
                        break idx + 1;
                    }
                }
                Some((_, c)) => value.push(c),
            }
        };
        fields.push(value);

        let tail = &quoted[end..];
        if tail.is_empty() {
            break;
        }
        match tail.strip_prefix(delimiter) {
            Some(next) => rest = next,
            None => return Err(ParseError::TrailingAfterQuote { line: line_no }),
        }
    }

    Ok(fields)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
