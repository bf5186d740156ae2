//! Report rendering for the traffic report tool.
//!
//! Lays accepted records out as a [`table::ReportTable`], writes it as a
//! single-sheet xlsx workbook, and ties loading and writing together in
//! [`builder::ReportBuilder`].

pub mod builder;
pub mod table;
pub mod xlsx;

#[cfg(test)]
mod readback;

pub use builder::{ReportBuilder, ReportSummary};
