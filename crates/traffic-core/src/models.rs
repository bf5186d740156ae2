use chrono::NaiveDate;

use crate::formatting::bytes_to_gb;

/// One validated traffic entry for a single client and billing window.
///
/// Fields are private: a record is only ever built by the line parser and is
/// never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrafficRecord {
    client_id: String,
    traffic_bytes: i64,
    period_start: NaiveDate,
    period_end: NaiveDate,
}

impl TrafficRecord {
    pub fn new(
        client_id: impl Into<String>,
        traffic_bytes: i64,
        period_start: NaiveDate,
        period_end: NaiveDate,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            traffic_bytes,
            period_start,
            period_end,
        }
    }

    /// Client identifier, usually an IP address. May be empty.
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Raw byte count as written in the input.
    pub fn traffic_bytes(&self) -> i64 {
        self.traffic_bytes
    }

    pub fn period_start(&self) -> NaiveDate {
        self.period_start
    }

    pub fn period_end(&self) -> NaiveDate {
        self.period_end
    }

    /// Traffic in decimal gigabytes, rounded to two places.
    pub fn traffic_gb(&self) -> f64 {
        bytes_to_gb(self.traffic_bytes)
    }

    /// Whole days between start and end. Negative when the dates are inverted.
    pub fn duration_days(&self) -> i64 {
        (self.period_end - self.period_start).num_days()
    }
}

/// The ordered set of accepted records for one report run.
///
/// Totals are computed by the aggregator in `traffic-data`, not here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrafficReport {
    records: Vec<TrafficRecord>,
}

impl TrafficReport {
    pub fn new(records: Vec<TrafficRecord>) -> Self {
        Self { records }
    }

    /// Records in input-file order.
    pub fn records(&self) -> &[TrafficRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
