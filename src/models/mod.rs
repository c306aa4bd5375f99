//! Core data models for tripreport
//!
//! This module contains the read-only travel plan structure (budget,
//! timeline, checklist and narrative fields) plus the small value types the
//! export pipeline is built on.

pub mod budget;
pub mod dates;
pub mod ids;
pub mod job;
pub mod money;
pub mod record;
pub mod timeline;

pub use budget::{Budget, BudgetCategory, BudgetItem, ItemStatus};
pub use ids::{JobId, RecordId};
pub use job::{ExportKind, ExportRequest, OutputFormat, RenderJob};
pub use money::Money;
pub use record::SourceRecord;
pub use timeline::{Checklist, ChecklistItem, Phase, Timeline, TimelineItem, TimelineStatus};
