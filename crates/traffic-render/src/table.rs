//! Declarative layout of the traffic report.
//!
//! The table is plain data: one [`TableRow`] per sheet row, each carrying its
//! cell values and whether it is emphasised. Writers turn it into a file.

use traffic_core::formatting::format_date;
use traffic_core::models::{TrafficRecord, TrafficReport};
use traffic_data::aggregator::TrafficTotals;

/// Name of the single worksheet in the report.
pub const SHEET_NAME: &str = "Client Traffic";

/// Column titles, in order.
pub const HEADER: [&str; 5] = ["Client", "Traffic used (GB)", "From", "To", "In days"];

/// Label in the first cell of the summary row.
pub const TOTAL_LABEL: &str = "Total";

/// One cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    /// An empty cell that still takes the row's styling.
    Blank,
}

impl CellValue {
    fn text(s: impl Into<String>) -> Self {
        CellValue::Text(s.into())
    }
}

/// A sheet row with a row-wide style flag.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub cells: Vec<CellValue>,
    pub bold: bool,
}

impl TableRow {
    fn plain(cells: Vec<CellValue>) -> Self {
        Self { cells, bold: false }
    }

    fn bold(cells: Vec<CellValue>) -> Self {
        Self { cells, bold: true }
    }

    fn empty() -> Self {
        Self::plain(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// The full report: header, one row per record, a spacer, then the totals.
///
/// Only [`ReportTable::from_report`] builds one, so the header, spacer and
/// summary rows are always present.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportTable {
    sheet_name: String,
    rows: Vec<TableRow>,
}

impl ReportTable {
    /// Lay out `report`, using `totals.total_gb` for the summary row.
    pub fn from_report(report: &TrafficReport, totals: &TrafficTotals) -> Self {
        let mut rows = Vec::with_capacity(report.len() + 3);

        rows.push(TableRow::bold(
            HEADER.iter().map(|h| CellValue::text(*h)).collect(),
        ));
        rows.extend(report.records().iter().map(record_row));
        rows.push(TableRow::empty());
        rows.push(TableRow::bold(vec![
            CellValue::text(TOTAL_LABEL),
            CellValue::Number(totals.total_gb),
            CellValue::Blank,
            CellValue::Blank,
            CellValue::Blank,
        ]));

        Self {
            sheet_name: SHEET_NAME.to_string(),
            rows,
        }
    }

    pub fn sheet_name(&self) -> &str {
        &self.sheet_name
    }

    /// Every sheet row, top to bottom.
    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn header(&self) -> &TableRow {
        &self.rows[0]
    }

    /// Rows between the header and the spacer.
    pub fn data_rows(&self) -> &[TableRow] {
        &self.rows[1..self.rows.len() - 2]
    }

    pub fn summary(&self) -> &TableRow {
        &self.rows[self.rows.len() - 1]
    }

    #[cfg(test)]
    pub(crate) fn with_sheet_name(mut self, name: &str) -> Self {
        self.sheet_name = name.to_string();
        self
    }
}

fn record_row(record: &TrafficRecord) -> TableRow {
    TableRow::plain(vec![
        CellValue::text(record.client_id()),
        CellValue::Number(record.traffic_gb()),
        CellValue::Text(format_date(record.period_start())),
        CellValue::Text(format_date(record.period_end())),
        CellValue::Number(record.duration_days() as f64),
    ])
}
