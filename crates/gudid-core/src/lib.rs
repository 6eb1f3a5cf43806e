//! Shared types for GUDID Chronicles.
//!
//! Holds the packing-list record type, the error taxonomy, lenient numeric
//! coercion, parser options, CLI settings and display formatting helpers used
//! by the data, runtime and binary crates.

pub mod coercion;
pub mod error;
pub mod formatting;
pub mod models;
pub mod options;
pub mod settings;

pub use error::{ChronicleError, ParseError, Result};
pub use models::{Field, PackingListItem};
pub use options::{ParseOptions, Quoting};
