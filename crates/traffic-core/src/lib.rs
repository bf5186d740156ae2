//! Shared model, error and configuration types for the traffic report tool.

pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;
