//! Traffic log loading.
//!
//! Reads the input line by line, drops noise, hands candidate lines to the
//! [`RecordParser`] and logs every rejected line on the way.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use traffic_core::error::{Result, TrafficError};
use traffic_core::models::TrafficRecord;
use tracing::{debug, warn};

use crate::parser::{is_candidate_line, RecordParser};

// ── Public types ──────────────────────────────────────────────────────────────

/// Per-run line accounting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Every line seen, including blanks.
    pub lines_read: usize,
    /// Blank lines and lines that do not start with `client_`.
    pub lines_skipped: usize,
    /// Candidate lines the parser refused.
    pub lines_rejected: usize,
    /// Records accepted.
    pub records: usize,
}

/// Records in input order plus the accounting for how they were obtained.
#[derive(Debug, Clone, Default)]
pub struct LoadOutcome {
    pub records: Vec<TrafficRecord>,
    pub stats: LoadStats,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Open `path` and load every valid record from it.
///
/// The file handle is dropped before this returns. Failing to open or read
/// the file is fatal; a malformed line is not.
pub fn load_records(path: &Path, parser: RecordParser) -> Result<LoadOutcome> {
    let file = File::open(path).map_err(|source| TrafficError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let outcome = read_records(BufReader::new(file), parser).map_err(|err| match err {
        TrafficError::Io(source) => TrafficError::FileRead {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })?;

    debug!(
        "File {}: {} read, {} skipped, {} rejected, {} accepted",
        path.display(),
        outcome.stats.lines_read,
        outcome.stats.lines_skipped,
        outcome.stats.lines_rejected,
        outcome.stats.records,
    );

    Ok(outcome)
}

/// Load records from any buffered source.
pub fn read_records<R: BufRead>(reader: R, parser: RecordParser) -> Result<LoadOutcome> {
    let mut outcome = LoadOutcome::default();

    for (index, line_result) in reader.lines().enumerate() {
        let line = line_result?;
        outcome.stats.lines_read += 1;

        if !is_candidate_line(&line) {
            outcome.stats.lines_skipped += 1;
            continue;
        }

        let trimmed = line.trim();
        match parser.parse(trimmed) {
            Ok(record) => outcome.records.push(record),
            Err(e) => {
                outcome.stats.lines_rejected += 1;
                warn!(line = index + 1, raw = %trimmed, "Skipped line: {}", e);
            }
        }
    }

    outcome.stats.records = outcome.records.len();
    Ok(outcome)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
