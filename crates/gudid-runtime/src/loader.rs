//! Text acquisition for the dataset hub.
//!
//! The parser only ever sees a string; this module is the collaborator that
//! fetches that string from the built-in sample, standard input, or a
//! user-selected file, and then hands it to [`DatasetHub::ingest`].

use std::sync::Arc;

use gudid_core::error::{ChronicleError, Result};
use gudid_data::sample::SAMPLE_CSV;
use tokio::io::AsyncReadExt;

use crate::hub::{DataSource, Dataset, DatasetHub};

/// Read the raw text for `source`.
///
/// `Pasted` reads standard input to the end. File bytes that are not valid
/// UTF-8 are replaced with U+FFFD rather than rejected.
pub async fn load_text(source: &DataSource) -> Result<String> {
    match source {
        DataSource::Sample => Ok(SAMPLE_CSV.to_string()),
        DataSource::Pasted => {
            let mut text = String::new();
            tokio::io::stdin().read_to_string(&mut text).await?;
            Ok(text)
        }
        DataSource::File(path) => {
            let bytes = tokio::fs::read(path)
                .await
                .map_err(|source| ChronicleError::FileRead {
                    path: path.clone(),
                    source,
                })?;
            match String::from_utf8(bytes) {
                Ok(text) => Ok(text),
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        valid_up_to = e.utf8_error().valid_up_to(),
                        "file is not valid UTF-8; decoding lossily"
                    );
                    Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
                }
            }
        }
    }
}

/// Load the text for `source` and ingest it into `hub`.
///
/// A read failure or a parse failure leaves the hub's current dataset as it
/// was.
pub async fn load_and_ingest(hub: &DatasetHub, source: DataSource) -> Result<Arc<Dataset>> {
    let text = load_text(&source).await?;
    tracing::debug!(bytes = text.len(), %source, "loaded packing-list text");
    Ok(hub.ingest(&text, source)?)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
