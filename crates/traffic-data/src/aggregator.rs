//! Totals over the accepted records.

use std::collections::HashSet;

use traffic_core::formatting::round_to;
use traffic_core::models::TrafficRecord;

// ── TrafficTotals ─────────────────────────────────────────────────────────────

/// Report-wide totals.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrafficTotals {
    /// Number of records summed.
    pub record_count: usize,
    /// Number of distinct client ids among them.
    pub client_count: usize,
    /// Raw byte sum. Wider than a record's `i64` so it cannot overflow.
    pub total_bytes: i128,
    /// Sum of every record's rounded GB value, rounded to two places.
    pub total_gb: f64,
}

// ── TrafficAggregator ─────────────────────────────────────────────────────────

/// Stateless helper that folds records into [`TrafficTotals`].
pub struct TrafficAggregator;

impl TrafficAggregator {
    /// Sum up `records`.
    ///
    /// This is the only place the report total is computed. `total_gb` is
    /// built from the per-record rounded values (the same ones shown in the
    /// report rows), so the summary row always agrees with the column above
    /// it.
    pub fn calculate_totals(records: &[TrafficRecord]) -> TrafficTotals {
        let mut clients: HashSet<&str> = HashSet::new();
        let mut total_bytes: i128 = 0;
        let mut gb_sum: f64 = 0.0;

        for record in records {
            clients.insert(record.client_id());
            total_bytes += i128::from(record.traffic_bytes());
            gb_sum += record.traffic_gb();
        }

        TrafficTotals {
            record_count: records.len(),
            client_count: clients.len(),
            total_bytes,
            total_gb: round_to(gb_sum, 2),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
