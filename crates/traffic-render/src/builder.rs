//! End-to-end report generation: load → aggregate → lay out → write.

use std::path::{Path, PathBuf};

use traffic_core::error::Result;
use traffic_core::models::TrafficReport;
use traffic_data::aggregator::{TrafficAggregator, TrafficTotals};
use traffic_data::parser::RecordParser;
use traffic_data::reader::{load_records, LoadStats};
use tracing::{debug, info};

use crate::table::ReportTable;
use crate::xlsx::write_report;

// ── Public types ──────────────────────────────────────────────────────────────

/// A fully laid out report that has not been written yet.
#[derive(Debug, Clone)]
pub struct PreparedReport {
    pub table: ReportTable,
    pub stats: LoadStats,
    pub totals: TrafficTotals,
}

/// What a successful [`ReportBuilder::build`] produced.
#[derive(Debug, Clone)]
pub struct ReportSummary {
    pub output: PathBuf,
    pub stats: LoadStats,
    pub totals: TrafficTotals,
}

// ── ReportBuilder ─────────────────────────────────────────────────────────────

/// Turns one traffic log into one spreadsheet.
///
/// A builder owns nothing but its paths and parser settings; all records
/// live only for the duration of a single [`ReportBuilder::build`] call.
#[derive(Debug, Clone)]
pub struct ReportBuilder {
    input: PathBuf,
    output: PathBuf,
    parser: RecordParser,
}

impl ReportBuilder {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            parser: RecordParser::default(),
        }
    }

    /// Enable or disable the strict parser checks.
    pub fn strict(mut self, strict: bool) -> Self {
        self.parser = RecordParser::new(strict);
        self
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Load the input and lay out the table without touching the output.
    pub fn prepare(&self) -> Result<PreparedReport> {
        debug!(
            "Loading {} (strict: {})",
            self.input.display(),
            self.parser.is_strict()
        );
        let outcome = load_records(&self.input, self.parser)?;

        let totals = TrafficAggregator::calculate_totals(&outcome.records);
        let report = TrafficReport::new(outcome.records);
        let table = ReportTable::from_report(&report, &totals);
        debug!("Laid out {} rows", table.rows().len());

        Ok(PreparedReport {
            table,
            stats: outcome.stats,
            totals,
        })
    }

    /// Generate the report and write it to the output path.
    pub fn build(&self) -> Result<ReportSummary> {
        let prepared = self.prepare()?;
        write_report(&prepared.table, &self.output)?;

        info!(
            "Wrote {} records to {}",
            prepared.totals.record_count,
            self.output.display()
        );

        Ok(ReportSummary {
            output: self.output.clone(),
            stats: prepared.stats,
            totals: prepared.totals,
        })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
