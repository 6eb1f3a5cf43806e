//! Runtime layer for GUDID Chronicles.
//!
//! Holds the current dataset snapshot, replaces it atomically on each
//! successful ingest, and loads raw text from the sample, stdin or files.

pub mod hub;
pub mod loader;

pub use gudid_core as core;
pub use gudid_data as data;
