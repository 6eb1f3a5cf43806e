//! Built-in packing-list table used when no user text is supplied.

/// A small shipment table covering every well-known column.
pub const SAMPLE_CSV: &str = include_str!("../data/sample_packing_list.csv");
