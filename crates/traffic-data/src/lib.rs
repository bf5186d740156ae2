//! Data ingestion layer for the traffic report.
//!
//! Parses traffic log lines into records, loads them from disk with
//! per-line diagnostics, and computes report-wide totals.

pub mod aggregator;
pub mod parser;
pub mod reader;

pub use traffic_core as core;
