//! Report aggregation for tripreport
//!
//! Turns a nested travel plan into flat, fully-resolved summaries:
//! - Budget: per-category subtotals and grand totals
//! - Timeline: per-phase progress
//! - Checklist: completion counts

pub mod budget_summary;
pub mod timeline_summary;

pub use budget_summary::{BudgetSummary, CategoryRow, ItemRow};
pub use timeline_summary::{
    ChecklistRow, ChecklistSummary, PhaseRow, TimelineRow, TimelineSummary,
};
