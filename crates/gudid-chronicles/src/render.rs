//! Plain-text and JSON rendering of the dashboard.

use gudid_core::error::Result;
use gudid_core::formatting::{format_count, share_percent, truncate_label};
use gudid_core::options::ParseOptions;
use gudid_data::dashboard::Dashboard;
use gudid_runtime::hub::{DataSource, Dataset};
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

/// Widest a device or customer label may be in the text tables.
const MAX_LABEL_CHARS: usize = 32;

/// JSON envelope: snapshot metadata, parse options and the dashboard.
#[derive(Serialize)]
struct Report<'a> {
    source: Option<&'a DataSource>,
    generation: u64,
    loaded_at: String,
    columns: &'a [String],
    options: &'a ParseOptions,
    dashboard: &'a Dashboard,
}

impl<'a> Report<'a> {
    fn new(dataset: &'a Dataset, options: &'a ParseOptions, dashboard: &'a Dashboard) -> Self {
        Self {
            source: dataset.source.as_ref(),
            generation: dataset.generation,
            loaded_at: dataset.loaded_at.to_rfc3339(),
            columns: &dataset.headers[..],
            options,
            dashboard,
        }
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Render the dashboard as pretty-printed JSON.
pub fn render_json(
    dataset: &Dataset,
    options: &ParseOptions,
    dashboard: &Dashboard,
) -> Result<String> {
    Ok(serde_json::to_string_pretty(&Report::new(dataset, options, dashboard))?)
}

/// Render the dashboard as aligned plain-text tables.
pub fn render_text(dataset: &Dataset, dashboard: &Dashboard) -> String {
    let mut out = String::new();
    let kpis = &dashboard.kpis;

    out.push_str("GUDID Chronicles: Medical Supply Chain\n");
    if let Some(source) = &dataset.source {
        out.push_str(&format!(
            "Source: {} (generation {})\n",
            source, dataset.generation
        ));
    }
    out.push('\n');

    out.push_str(&render_table(
        &["Metric", "Value"],
        &[
            vec!["Total Records".into(), format_count(kpis.total_records as i64)],
            vec!["Active Customers".into(), format_count(kpis.active_customers as i64)],
            vec!["Unique Devices".into(), format_count(kpis.unique_devices as i64)],
            vec!["Total Units Shipped".into(), format_count(kpis.total_units)],
        ],
    ));

    out.push_str("\nRecent Transactions\n");
    let rows: Vec<Vec<String>> = dashboard
        .recent_transactions
        .iter()
        .map(|t| {
            vec![
                t.deliver_date.clone(),
                truncate_label(&t.customer, MAX_LABEL_CHARS),
                truncate_label(&t.device_name, MAX_LABEL_CHARS),
                t.lot_number.clone(),
            ]
        })
        .collect();
    out.push_str(&render_table(&["Date", "Customer", "Device Name", "Lot #"], &rows));

    out.push_str("\nCategory Stats\n");
    let rows: Vec<Vec<String>> = dashboard
        .category_stats
        .iter()
        .map(|c| {
            vec![
                truncate_label(&c.category, MAX_LABEL_CHARS),
                format!("{} items", format_count(c.items as i64)),
                format!("{:.1}%", share_percent(c.items, kpis.total_records, 1)),
            ]
        })
        .collect();
    out.push_str(&render_table(&["Category", "Count", "Share"], &rows));

    out.push_str("\nRegulatory Licenses (Top Active)\n");
    let rows: Vec<Vec<String>> = dashboard
        .license_ranking
        .iter()
        .map(|l| {
            vec![
                l.license_id.clone(),
                format_count(l.usage_count as i64),
                l.example_device
                    .as_deref()
                    .map(|d| truncate_label(d, MAX_LABEL_CHARS))
                    .unwrap_or_default(),
            ]
        })
        .collect();
    out.push_str(&render_table(&["License ID", "Usage Count", "Example Device"], &rows));

    out
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Lay out `rows` under `headers` with two spaces between columns.
///
/// Column widths are measured in terminal cells, so wide CJK device names
/// line up.
fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
    for row in rows {
        for (idx, cell) in row.iter().enumerate().take(widths.len()) {
            widths[idx] = widths[idx].max(cell.width());
        }
    }

    let mut out = String::new();
    let header_cells: Vec<&str> = headers.to_vec();
    push_row(&mut out, &header_cells, &widths);

    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_row(&mut out, &rule.iter().map(String::as_str).collect::<Vec<_>>(), &widths);

    if rows.is_empty() {
        out.push_str("(no data)\n");
    }
    for row in rows {
        push_row(&mut out, &row.iter().map(String::as_str).collect::<Vec<_>>(), &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[&str], widths: &[usize]) {
    let last = cells.len().saturating_sub(1);
    for (idx, cell) in cells.iter().enumerate() {
        out.push_str(cell);
        if idx < last {
            let pad = widths[idx].saturating_sub(cell.width()) + 2;
            out.push_str(&" ".repeat(pad));
        }
    }
    out.push('\n');
}

// ── Tests ─────────────────────────────────────────────────────────────────────
