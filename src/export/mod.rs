//! Flat exports for tripreport
//!
//! - CSV: budget line items (spreadsheet-compatible)
//!
//! Flat exports read the aggregated summary directly; they never go through
//! the chart engine or the renderer.

pub mod csv;

pub use csv::{budget_csv_bytes, escape_csv, export_budget_csv, CSV_HEADER};
