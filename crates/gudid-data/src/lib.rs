//! Ingestion and aggregation pipeline for GUDID Chronicles.
//!
//! Parses delimited packing-list text into records, computes the derived
//! views (distinct counts, grouped breakdowns, frequency rankings, numeric
//! totals) and assembles them into the dashboard summary.

pub mod aggregator;
pub mod dashboard;
pub mod parser;
pub mod sample;

pub use gudid_core as core;
