//! Read-only aggregations over a packing-list record sequence.
//!
//! Every operation takes a field name and looks it up on each record; a
//! name that no record carries behaves as if every record held `""`.

use std::collections::{HashMap, HashSet};

use gudid_core::coercion::parse_leading_integer;
use gudid_core::models::PackingListItem;

// ── Aggregator ────────────────────────────────────────────────────────────────

/// Stateless helper computing derived views of a record sequence.
pub struct Aggregator;

impl Aggregator {
    /// Number of records.
    pub fn total_count(records: &[PackingListItem]) -> usize {
        records.len()
    }

    /// Number of distinct literal values of `field`, empty string included.
    pub fn distinct_count(records: &[PackingListItem], field: &str) -> usize {
        records
            .iter()
            .map(|r| r.get(field))
            .collect::<HashSet<&str>>()
            .len()
    }

    /// Sum of `field` across all records, each value coerced with
    /// [`parse_leading_integer`] (unparsable text counts as zero).
    pub fn sum_numeric_field(records: &[PackingListItem], field: &str) -> i64 {
        records
            .iter()
            .map(|r| parse_leading_integer(r.get(field)))
            .fold(0, i64::saturating_add)
    }

    /// Distinct values of `field` in order of first appearance.
    pub fn distinct_values_in_order<'a>(records: &'a [PackingListItem], field: &str) -> Vec<&'a str> {
        let mut seen: HashSet<&str> = HashSet::new();
        records
            .iter()
            .map(|r| r.get(field))
            .filter(|value| seen.insert(*value))
            .collect()
    }

    /// Record count per distinct value of `field`, in first-seen order.
    pub fn group_counts<'a>(records: &'a [PackingListItem], field: &str) -> Vec<(&'a str, usize)> {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut groups: Vec<(&str, usize)> = Vec::new();

        for value in records.iter().map(|r| r.get(field)) {
            match index.get(value) {
                Some(&slot) => groups[slot].1 += 1,
                None => {
                    index.insert(value, groups.len());
                    groups.push((value, 1));
                }
            }
        }

        groups
    }

    /// Distinct values of `field` with their counts, most frequent first.
    ///
    /// Values with equal counts keep their first-seen order.
    pub fn frequency_ranking<'a>(records: &'a [PackingListItem], field: &str) -> Vec<(&'a str, usize)> {
        let mut ranked = Self::group_counts(records, field);
        // `sort_by` is stable, which gives the first-seen tie break.
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    /// Keep the first `n` elements of `seq`.
    pub fn top_n<T>(mut seq: Vec<T>, n: usize) -> Vec<T> {
        seq.truncate(n);
        seq
    }

    /// First record whose `field` equals `value`, if any.
    pub fn find_first_by_field<'a>(
        records: &'a [PackingListItem],
        field: &str,
        value: &str,
    ) -> Option<&'a PackingListItem> {
        records.iter().find(|r| r.get(field) == value)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use gudid_core::models::Field;

    fn column(field: &str, values: &[&str]) -> Vec<PackingListItem> {
        values
            .iter()
            .map(|v| PackingListItem::from_pairs([(field, *v)]))
            .collect()
    }

    fn shipments() -> Vec<PackingListItem> {
        let rows = [
            ("Acme", "Stent", "Cardio", "LIC1", "10"),
            ("Acme", "Stent", "Cardio", "LIC1", "5"),
            ("Beta", "Pump", "Infusion", "LIC2", "7"),
            ("Gamma", "Catheter", "Cardio", "LIC3", "x"),
            ("Beta", "Pump", "Infusion", "LIC2", ""),
        ];
        rows.iter()
            .map(|(customer, device, category, license, numbers)| {
                PackingListItem::from_pairs([
                    ("customer", *customer),
                    ("DeviceName", *device),
                    ("DeviceCategory", *category),
                    ("licenseID", *license),
                    ("Numbers", *numbers),
                ])
            })
            .collect()
    }

    // ── total_count / distinct_count ──────────────────────────────────────────

    #[test]
    fn test_total_count() {
        assert_eq!(Aggregator::total_count(&shipments()), 5);
        assert_eq!(Aggregator::total_count(&[]), 0);
    }

    #[test]
    fn test_distinct_count() {
        let records = shipments();
        assert_eq!(Aggregator::distinct_count(&records, "customer"), 3);
        assert_eq!(Aggregator::distinct_count(&records, "DeviceName"), 3);
    }

    #[test]
    fn test_distinct_count_counts_empty_and_case() {
        let records = column("customer", &["acme", "Acme", "", "", "acme"]);
        assert_eq!(Aggregator::distinct_count(&records, "customer"), 3);
    }

    #[test]
    fn test_distinct_count_unknown_field() {
        assert_eq!(Aggregator::distinct_count(&shipments(), "Warehouse"), 1);
        assert_eq!(Aggregator::distinct_count(&[], "Warehouse"), 0);
    }

    // ── sum_numeric_field ─────────────────────────────────────────────────────

    #[test]
    fn test_sum_numeric_field_coerces() {
        let records = column("Numbers", &["5", "", "abc", "3"]);
        assert_eq!(Aggregator::sum_numeric_field(&records, "Numbers"), 8);
    }

    #[test]
    fn test_sum_numeric_field_missing_field_is_zero() {
        assert_eq!(Aggregator::sum_numeric_field(&shipments(), "Weight"), 0);
    }

    #[test]
    fn test_sum_numeric_field_negative_and_prefix() {
        let records = column("Numbers", &["12 boxes", "-2", " 4"]);
        assert_eq!(Aggregator::sum_numeric_field(&records, "Numbers"), 14);
    }

    // ── distinct_values_in_order / group_counts ───────────────────────────────

    #[test]
    fn test_distinct_values_in_order() {
        let records = shipments();
        assert_eq!(
            Aggregator::distinct_values_in_order(&records, "DeviceCategory"),
            vec!["Cardio", "Infusion"]
        );
    }

    #[test]
    fn test_group_counts_first_seen_order() {
        let records = column("DeviceCategory", &["B", "A", "A", "C", "A"]);
        assert_eq!(
            Aggregator::group_counts(&records, "DeviceCategory"),
            vec![("B", 1), ("A", 3), ("C", 1)]
        );
    }

    #[test]
    fn test_group_counts_sum_equals_total() {
        let cases = [
            shipments(),
            column("DeviceCategory", &["x", "", "x", "y", ""]),
            Vec::new(),
        ];
        for records in &cases {
            for field in ["customer", "DeviceCategory", "Numbers", "absent"] {
                let sum: usize = Aggregator::group_counts(records, field)
                    .iter()
                    .map(|(_, count)| count)
                    .sum();
                assert_eq!(sum, Aggregator::total_count(records), "field {field}");
            }
        }
    }

    #[test]
    fn test_group_counts_unknown_field_single_empty_group() {
        assert_eq!(
            Aggregator::group_counts(&shipments(), "Warehouse"),
            vec![("", 5)]
        );
    }

    // ── frequency_ranking ─────────────────────────────────────────────────────

    #[test]
    fn test_frequency_ranking_stable_ties() {
        let records = column("licenseID", &["L1", "L2", "L1", "L3", "L2"]);
        assert_eq!(
            Aggregator::frequency_ranking(&records, "licenseID"),
            vec![("L1", 2), ("L2", 2), ("L3", 1)]
        );
    }

    #[test]
    fn test_frequency_ranking_descending() {
        let records = column("licenseID", &["L3", "L1", "L1", "L2", "L1", "L2"]);
        assert_eq!(
            Aggregator::frequency_ranking(&records, "licenseID"),
            vec![("L1", 3), ("L2", 2), ("L3", 1)]
        );
    }

    // ── top_n ─────────────────────────────────────────────────────────────────

    #[test]
    fn test_top_n_boundaries() {
        let seq = vec![1, 2, 3];
        assert_eq!(Aggregator::top_n(seq.clone(), 3), seq);
        assert_eq!(Aggregator::top_n(seq.clone(), 10), seq);
        assert_eq!(Aggregator::top_n(seq.clone(), 2), vec![1, 2]);
        assert!(Aggregator::top_n(seq, 0).is_empty());
    }

    // ── find_first_by_field ───────────────────────────────────────────────────

    #[test]
    fn test_find_first_by_field() {
        let records = shipments();
        let found = Aggregator::find_first_by_field(&records, Field::LicenseId.as_str(), "LIC2")
            .expect("LIC2 present");
        assert_eq!(found.device_name(), "Pump");
        assert!(std::ptr::eq(found, &records[2]));
    }

    #[test]
    fn test_find_first_by_field_absent() {
        assert!(Aggregator::find_first_by_field(&shipments(), "licenseID", "LIC9").is_none());
    }

    #[test]
    fn test_aggregation_does_not_mutate_input() {
        let records = shipments();
        let before = records.clone();
        let _ = Aggregator::frequency_ranking(&records, "customer");
        let _ = Aggregator::group_counts(&records, "DeviceCategory");
        assert_eq!(records, before);
    }
}
