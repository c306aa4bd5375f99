//! Display formatting for terminal output

pub mod summary;

pub use summary::{format_budget_table, format_record_summary};
