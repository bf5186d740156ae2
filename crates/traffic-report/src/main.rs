mod bootstrap;

use anyhow::{Context, Result};
use traffic_core::formatting::format_count;
use traffic_core::settings::Settings;
use traffic_render::ReportBuilder;

fn main() -> Result<()> {
    let settings = Settings::load()?;

    let _log_guard = bootstrap::setup_logging(&settings.log_level, settings.log_file.as_ref())?;

    tracing::info!("Traffic report v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Input: {}, Output: {}, Strict: {}",
        settings.input.display(),
        settings.output.display(),
        settings.strict
    );

    let summary = ReportBuilder::new(&settings.input, &settings.output)
        .strict(settings.strict)
        .build()
        .with_context(|| {
            format!(
                "failed to build report from {}",
                settings.input.display()
            )
        })?;

    let stats = &summary.stats;
    let totals = &summary.totals;
    tracing::info!(
        "Lines: {} read, {} skipped, {} rejected",
        stats.lines_read,
        stats.lines_skipped,
        stats.lines_rejected
    );
    tracing::info!(
        "Records: {}, clients: {}, traffic: {} bytes ({:.2} GB)",
        totals.record_count,
        totals.client_count,
        format_count(totals.total_bytes),
        totals.total_gb
    );

    println!("Report created: {}", summary.output.display());

    Ok(())
}
