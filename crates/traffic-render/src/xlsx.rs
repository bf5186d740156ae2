//! xlsx output for a [`ReportTable`].

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use rust_xlsxwriter::{ColNum, Format, RowNum, Workbook, XlsxError};
use traffic_core::error::{Result, TrafficError};
use tracing::debug;

use crate::table::{CellValue, ReportTable};

/// Serialise `table` into an in-memory xlsx workbook.
pub fn render_workbook(table: &ReportTable) -> std::result::Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();

    {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(table.sheet_name())?;

        for (row_idx, row) in table.rows().iter().enumerate() {
            let r = RowNum::try_from(row_idx).map_err(|_| XlsxError::RowColumnLimitError)?;
            for (col_idx, cell) in row.cells.iter().enumerate() {
                let c = ColNum::try_from(col_idx).map_err(|_| XlsxError::RowColumnLimitError)?;
                match (cell, row.bold) {
                    (CellValue::Text(s), false) => {
                        worksheet.write_string(r, c, s.as_str())?;
                    }
                    (CellValue::Text(s), true) => {
                        worksheet.write_string_with_format(r, c, s.as_str(), &bold)?;
                    }
                    (CellValue::Number(n), false) => {
                        worksheet.write_number(r, c, *n)?;
                    }
                    (CellValue::Number(n), true) => {
                        worksheet.write_number_with_format(r, c, *n, &bold)?;
                    }
                    (CellValue::Blank, true) => {
                        worksheet.write_blank(r, c, &bold)?;
                    }
                    (CellValue::Blank, false) => {}
                }
            }
        }
    }

    workbook.save_to_buffer()
}

/// Write `table` to `path`, replacing any existing file.
///
/// The workbook goes to `<path>.tmp` first and is renamed into place, so a
/// failed run never leaves a truncated report at `path`.
pub fn write_report(table: &ReportTable, path: &Path) -> Result<()> {
    let bytes = render_workbook(table).map_err(|e| TrafficError::Spreadsheet(e.to_string()))?;

    let tmp = temp_path(path);
    if let Err(source) = fs::write(&tmp, &bytes) {
        let _ = fs::remove_file(&tmp);
        return Err(TrafficError::FileWrite { path: tmp, source });
    }
    if let Err(source) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(TrafficError::FileWrite {
            path: path.to_path_buf(),
            source,
        });
    }

    debug!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

/// `report.xlsx` → `report.xlsx.tmp`, in the same directory.
fn temp_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}
