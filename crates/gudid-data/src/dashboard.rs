//! Dashboard summary built from the current record sequence.
//!
//! Combines the headline figures with the three ranked tables shown beside
//! the charts: recent transactions, category stats and the most active
//! regulatory licenses.

use gudid_core::models::{Field, PackingListItem};
use serde::Serialize;
use tracing::debug;

use crate::aggregator::Aggregator;

/// Default number of rows in each dashboard table.
pub const DEFAULT_TABLE_ROWS: usize = 5;

// ── Limits ────────────────────────────────────────────────────────────────────

/// Row caps for the dashboard tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DashboardLimits {
    pub recent_transactions: usize,
    pub categories: usize,
    pub licenses: usize,
}

impl Default for DashboardLimits {
    fn default() -> Self {
        Self::uniform(DEFAULT_TABLE_ROWS)
    }
}

impl DashboardLimits {
    /// The same cap for every table.
    pub fn uniform(rows: usize) -> Self {
        Self {
            recent_transactions: rows,
            categories: rows,
            licenses: rows,
        }
    }
}

// ── Views ─────────────────────────────────────────────────────────────────────

/// Headline figures for the KPI cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KpiSummary {
    pub total_records: usize,
    /// Distinct `customer` values.
    pub active_customers: usize,
    /// Distinct `DeviceName` values.
    pub unique_devices: usize,
    /// Sum of `Numbers` with the zero fallback.
    pub total_units: i64,
}

impl KpiSummary {
    pub fn from_records(records: &[PackingListItem]) -> Self {
        Self {
            total_records: Aggregator::total_count(records),
            active_customers: Aggregator::distinct_count(records, Field::Customer.as_str()),
            unique_devices: Aggregator::distinct_count(records, Field::DeviceName.as_str()),
            total_units: Aggregator::sum_numeric_field(records, Field::Numbers.as_str()),
        }
    }
}

/// One line of the recent-transactions table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionRow {
    pub deliver_date: String,
    pub customer: String,
    pub device_name: String,
    pub lot_number: String,
}

impl From<&PackingListItem> for TransactionRow {
    fn from(item: &PackingListItem) -> Self {
        Self {
            deliver_date: item.deliver_date().to_string(),
            customer: item.customer().to_string(),
            device_name: item.device_name().to_string(),
            lot_number: item.lot_number().to_string(),
        }
    }
}

/// Record count for one device category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryStat {
    pub category: String,
    pub items: usize,
}

/// Usage of one regulatory license, with the first device shipped under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LicenseUsage {
    pub license_id: String,
    pub usage_count: usize,
    pub example_device: Option<String>,
}

// ── Dashboard ─────────────────────────────────────────────────────────────────

/// Every derived view the dashboard renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dashboard {
    pub kpis: KpiSummary,
    /// Leading rows of the table, in source order.
    pub recent_transactions: Vec<TransactionRow>,
    /// Categories in first-seen order.
    pub category_stats: Vec<CategoryStat>,
    /// Licenses by descending usage, ties in first-seen order.
    pub license_ranking: Vec<LicenseUsage>,
}

impl Dashboard {
    pub fn build(records: &[PackingListItem], limits: &DashboardLimits) -> Self {
        let recent_transactions = records
            .iter()
            .take(limits.recent_transactions)
            .map(TransactionRow::from)
            .collect();

        let category_stats = Aggregator::top_n(
            Aggregator::group_counts(records, Field::DeviceCategory.as_str()),
            limits.categories,
        )
        .into_iter()
        .map(|(category, items)| CategoryStat {
            category: category.to_string(),
            items,
        })
        .collect();

        let license_field = Field::LicenseId.as_str();
        let license_ranking = Aggregator::top_n(
            Aggregator::frequency_ranking(records, license_field),
            limits.licenses,
        )
        .into_iter()
        .map(|(license_id, usage_count)| LicenseUsage {
            license_id: license_id.to_string(),
            usage_count,
            example_device: Aggregator::find_first_by_field(records, license_field, license_id)
                .map(|item| item.device_name().to_string()),
        })
        .collect();

        let dashboard = Self {
            kpis: KpiSummary::from_records(records),
            recent_transactions,
            category_stats,
            license_ranking,
        };

        debug!(
            records = dashboard.kpis.total_records,
            categories = dashboard.category_stats.len(),
            licenses = dashboard.license_ranking.len(),
            "dashboard built"
        );

        dashboard
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use crate::sample::SAMPLE_CSV;

    const SCENARIO: &str = "customer,DeviceName,DeviceCategory,LotNumber,deliverdate,licenseID,Numbers\n\
        Acme,Stent,Cardio,L100,2024-01-01,LIC1,10\n\
        Acme,Stent,Cardio,L101,2024-01-02,LIC1,5\n\
        Beta,Pump,Infusion,L200,2024-01-03,LIC2,7";

    #[test]
    fn test_end_to_end_scenario() {
        let records = parse(SCENARIO).unwrap();

        assert_eq!(Aggregator::total_count(&records), 3);
        assert_eq!(Aggregator::distinct_count(&records, "customer"), 2);
        assert_eq!(Aggregator::sum_numeric_field(&records, "Numbers"), 22);
        assert_eq!(
            Aggregator::group_counts(&records, "DeviceCategory"),
            vec![("Cardio", 2), ("Infusion", 1)]
        );
        assert_eq!(
            Aggregator::frequency_ranking(&records, "licenseID"),
            vec![("LIC1", 2), ("LIC2", 1)]
        );
    }

    #[test]
    fn test_dashboard_for_scenario() {
        let records = parse(SCENARIO).unwrap();
        let dashboard = Dashboard::build(&records, &DashboardLimits::default());

        assert_eq!(
            dashboard.kpis,
            KpiSummary {
                total_records: 3,
                active_customers: 2,
                unique_devices: 2,
                total_units: 22,
            }
        );
        assert_eq!(dashboard.recent_transactions.len(), 3);
        assert_eq!(dashboard.recent_transactions[2].lot_number, "L200");
        assert_eq!(
            dashboard.category_stats,
            vec![
                CategoryStat { category: "Cardio".into(), items: 2 },
                CategoryStat { category: "Infusion".into(), items: 1 },
            ]
        );
        assert_eq!(
            dashboard.license_ranking[1],
            LicenseUsage {
                license_id: "LIC2".into(),
                usage_count: 1,
                example_device: Some("Pump".into()),
            }
        );
    }

    #[test]
    fn test_dashboard_respects_limits() {
        let records = parse(SAMPLE_CSV).unwrap();
        let dashboard = Dashboard::build(&records, &DashboardLimits::uniform(2));

        assert_eq!(dashboard.recent_transactions.len(), 2);
        assert_eq!(dashboard.category_stats.len(), 2);
        assert_eq!(dashboard.license_ranking.len(), 2);
        assert_eq!(dashboard.kpis.total_records, 15);
    }

    #[test]
    fn test_dashboard_sample_license_ranking() {
        let records = parse(SAMPLE_CSV).unwrap();
        let dashboard = Dashboard::build(&records, &DashboardLimits::default());

        let top = &dashboard.license_ranking[0];
        assert_eq!(top.license_id, "MOHW-MD-00123");
        assert_eq!(top.usage_count, 4);
        assert_eq!(top.example_device.as_deref(), Some("Coronary Stent System"));
    }

    #[test]
    fn test_dashboard_empty_records() {
        let dashboard = Dashboard::build(&[], &DashboardLimits::default());
        assert_eq!(dashboard.kpis.total_records, 0);
        assert_eq!(dashboard.kpis.total_units, 0);
        assert!(dashboard.recent_transactions.is_empty());
        assert!(dashboard.category_stats.is_empty());
        assert!(dashboard.license_ranking.is_empty());
    }

    #[test]
    fn test_dashboard_serializes_to_json() {
        let records = parse(SCENARIO).unwrap();
        let dashboard = Dashboard::build(&records, &DashboardLimits::default());
        let value = serde_json::to_value(&dashboard).unwrap();

        assert_eq!(value["kpis"]["total_units"], 22);
        assert_eq!(value["category_stats"][0]["category"], "Cardio");
        assert_eq!(value["license_ranking"][0]["example_device"], "Stent");
    }
}
