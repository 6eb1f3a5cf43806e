mod bootstrap;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use gudid_core::error::ChronicleError;
use gudid_core::settings::Settings;
use gudid_data::dashboard::{Dashboard, DashboardLimits};
use gudid_runtime::hub::{DataSource, DatasetHub};
use gudid_runtime::loader::load_and_ingest;

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::parse();

    bootstrap::setup_logging(settings.effective_log_level(), settings.log_file.as_ref())?;

    tracing::info!("GUDID Chronicles v{} starting", env!("CARGO_PKG_VERSION"));

    let options = settings.parse_options()?;
    tracing::info!(
        "Delimiter: {:?}, Quoting: {}, Trim: {}",
        options.delimiter,
        options.quoting,
        options.trim_fields
    );

    let source = match (&settings.file, settings.stdin) {
        (Some(path), _) => DataSource::File(path.clone()),
        (None, true) => DataSource::Pasted,
        (None, false) => DataSource::Sample,
    };

    let hub = DatasetHub::with_options(options);
    let dataset = match load_and_ingest(&hub, source).await {
        Ok(dataset) => dataset,
        Err(e @ ChronicleError::Parse(_)) => {
            return Err(e).context("Failed to parse CSV. Please check the format.");
        }
        Err(e) => return Err(e.into()),
    };

    let dashboard = Dashboard::build(dataset.records(), &DashboardLimits::uniform(settings.top));

    if settings.wants_json() {
        println!("{}", render::render_json(&dataset, hub.options(), &dashboard)?);
    } else {
        print!("{}", render::render_text(&dataset, &dashboard));
    }

    Ok(())
}
