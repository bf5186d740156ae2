//! Line parser for the traffic log.
//!
//! Each candidate line has the shape
//! `client_<id>_download <bytes> <YYYY-MM-DD> <YYYY-MM-DD>` and becomes one
//! [`TrafficRecord`], or a [`FormatError`] describing the first rule it broke.

use chrono::{Datelike, NaiveDate};
use traffic_core::error::FormatError;
use traffic_core::formatting::DATE_FORMAT;
use traffic_core::models::TrafficRecord;

/// Every client name token starts with this.
pub const CLIENT_PREFIX: &str = "client_";

/// Every client name token contains this somewhere after the prefix.
pub const DOWNLOAD_MARKER: &str = "_download";

const FIELD_COUNT: usize = 4;

// ── RecordParser ──────────────────────────────────────────────────────────────

/// Parses single log lines into records.
///
/// The default parser is permissive: it accepts empty client ids and periods
/// whose end precedes their start. [`RecordParser::strict`] rejects both.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordParser {
    strict: bool,
}

impl RecordParser {
    pub fn new(strict: bool) -> Self {
        Self { strict }
    }

    /// A parser with the extra empty-id and date-order checks enabled.
    pub fn strict() -> Self {
        Self::new(true)
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Parse one raw line. Surrounding whitespace is ignored.
    pub fn parse(&self, raw_line: &str) -> Result<TrafficRecord, FormatError> {
        let fields: Vec<&str> = raw_line.split_whitespace().collect();
        let [name, traffic, from, to] = fields[..] else {
            return Err(FormatError::InvalidLineFormat {
                found: fields.len(),
            });
        };

        let client_id = extract_client_id(name)?;
        let traffic_bytes = parse_traffic(traffic)?;
        let period_start = parse_date(from)?;
        let period_end = parse_date(to)?;

        if self.strict {
            if client_id.is_empty() {
                return Err(FormatError::EmptyClientId(name.to_string()));
            }
            if period_end < period_start {
                return Err(FormatError::InvertedPeriod {
                    from: from.to_string(),
                    to: to.to_string(),
                });
            }
        }

        Ok(TrafficRecord::new(
            client_id,
            traffic_bytes,
            period_start,
            period_end,
        ))
    }
}

/// Parse a line with the default (permissive) rules.
pub fn parse_record(raw_line: &str) -> Result<TrafficRecord, FormatError> {
    RecordParser::default().parse(raw_line)
}

/// Whether the reader should hand `line` to the parser at all.
///
/// Blank lines and anything not starting with [`CLIENT_PREFIX`] are noise.
pub fn is_candidate_line(line: &str) -> bool {
    line.trim().starts_with(CLIENT_PREFIX)
}

// ── Field helpers ─────────────────────────────────────────────────────────────

/// Strip the `client_` prefix and the first `_download` from a name token.
///
/// The two spans may share an underscore (`client_download...`); in that case
/// they are removed as one span, leaving whatever follows `download`.
fn extract_client_id(name: &str) -> Result<String, FormatError> {
    let invalid = || FormatError::InvalidClientName(name.to_string());

    if !name.starts_with(CLIENT_PREFIX) {
        return Err(invalid());
    }
    let marker_start = name.find(DOWNLOAD_MARKER).ok_or_else(invalid)?;
    let marker_end = marker_start + DOWNLOAD_MARKER.len();
    let prefix_end = CLIENT_PREFIX.len();

    let client_id = if marker_start >= prefix_end {
        [&name[prefix_end..marker_start], &name[marker_end..]].concat()
    } else {
        name[marker_end..].to_string()
    };
    Ok(client_id)
}

/// Base-10 signed integer, optional leading `+` or `-`.
/// Byte count as a signed 64-bit integer.
///
/// Narrower than arbitrary-precision integer parsing: an optional `+`/`-`
/// followed by ASCII digits only. Digit-group underscores (`1_000`) and
/// anything outside `i64::MIN..=i64::MAX` are rejected as
/// [`FormatError::InvalidTraffic`].
fn parse_traffic(token: &str) -> Result<i64, FormatError> {
    token
        .parse::<i64>()
        .map_err(|e| FormatError::InvalidTraffic(format!("{token} ({e})")))
}

/// Exactly `YYYY-MM-DD`: zero-padded, dash separated, a real calendar day.
fn parse_date(token: &str) -> Result<NaiveDate, FormatError> {
    let invalid = || FormatError::InvalidDate(token.to_string());

    let bytes = token.as_bytes();
    let well_shaped = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_shaped {
        return Err(invalid());
    }

    let date = NaiveDate::parse_from_str(token, DATE_FORMAT).map_err(|_| invalid())?;
    // Year 0000 parses in chrono but is not a calendar year.
    if date.year() < 1 {
        return Err(invalid());
    }
    Ok(date)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
