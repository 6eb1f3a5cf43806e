//! The current packing-list dataset, replaced wholesale on each ingest.
//!
//! [`DatasetHub`] owns the latest successfully parsed snapshot and publishes
//! it through a `watch` channel so every consumer (tables, graph, agents)
//! observes one complete, immutable record sequence. A failed parse leaves
//! the published snapshot untouched.

use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use gudid_core::error::ParseError;
use gudid_core::models::PackingListItem;
use gudid_core::options::ParseOptions;
use gudid_data::parser::parse_table;
use serde::Serialize;
use tokio::sync::watch;

// ── Public types ──────────────────────────────────────────────────────────────

/// Where the raw text of a dataset came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "path", rename_all = "lowercase")]
pub enum DataSource {
    /// The built-in sample table.
    Sample,
    /// Text pasted or piped in by the user.
    Pasted,
    /// A user-selected local file.
    File(PathBuf),
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataSource::Sample => f.write_str("built-in sample"),
            DataSource::Pasted => f.write_str("pasted text"),
            DataSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// One immutable snapshot of parsed records.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Column names of the source table (empty before the first ingest).
    pub headers: Arc<[String]>,
    /// Records in source row order.
    pub records: Arc<[PackingListItem]>,
    pub source: Option<DataSource>,
    /// Number of successful ingests that led to this snapshot.
    pub generation: u64,
    pub loaded_at: DateTime<Utc>,
}

impl Dataset {
    fn empty() -> Self {
        Self {
            headers: Arc::from(Vec::<String>::new()),
            records: Arc::from(Vec::<PackingListItem>::new()),
            source: None,
            generation: 0,
            loaded_at: Utc::now(),
        }
    }

    pub fn records(&self) -> &[PackingListItem] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ── DatasetHub ────────────────────────────────────────────────────────────────

/// Owner of the current dataset snapshot.
///
/// # Example
/// ```
/// use gudid_runtime::hub::{DataSource, DatasetHub};
///
/// let hub = DatasetHub::new();
/// let snapshot = hub.ingest("customer,Numbers\nAcme,3", DataSource::Pasted).unwrap();
/// assert_eq!(snapshot.records.len(), 1);
/// assert_eq!(hub.current().generation, 1);
/// ```
pub struct DatasetHub {
    options: ParseOptions,
    /// Last generation number handed out.
    generations: AtomicU64,
    tx: watch::Sender<Arc<Dataset>>,
}

impl Default for DatasetHub {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetHub {
    /// Create a hub holding an empty generation-0 dataset.
    pub fn new() -> Self {
        Self::with_options(ParseOptions::default())
    }

    /// Create a hub that parses with `options`.
    pub fn with_options(options: ParseOptions) -> Self {
        let (tx, _rx) = watch::channel(Arc::new(Dataset::empty()));
        Self {
            options,
            generations: AtomicU64::new(0),
            tx,
        }
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parse `text` and, on success, publish it as the new current dataset.
    ///
    /// Parsing runs to completion before anything is published, so readers
    /// never see a partial sequence. On failure the previous snapshot stays
    /// current and the error is returned to the caller. When ingests race,
    /// the snapshot with the highest generation stays published.
    pub fn ingest(&self, text: &str, source: DataSource) -> Result<Arc<Dataset>, ParseError> {
        let table = match parse_table(text, &self.options) {
            Ok(table) => table,
            Err(e) => {
                tracing::warn!(error = %e, %source, "ingest failed; keeping previous dataset");
                return Err(e);
            }
        };

        let generation = self.generations.fetch_add(1, Ordering::SeqCst) + 1;
        let dataset = Arc::new(Dataset {
            headers: table.headers,
            records: table.records.into(),
            source: Some(source),
            generation,
            loaded_at: Utc::now(),
        });

        tracing::debug!(
            generation,
            records = dataset.records.len(),
            source = ?dataset.source,
            "dataset replaced"
        );

        self.tx.send_if_modified(|current| {
            if current.generation < generation {
                *current = Arc::clone(&dataset);
                true
            } else {
                false
            }
        });
        Ok(dataset)
    }

    /// The current snapshot.
    pub fn current(&self) -> Arc<Dataset> {
        Arc::clone(&self.tx.borrow())
    }

    /// Receiver that yields every newly published snapshot.
    pub fn subscribe(&self) -> watch::Receiver<Arc<Dataset>> {
        self.tx.subscribe()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
