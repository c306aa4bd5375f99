//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod export;
pub mod markup;
pub mod summary;

pub use export::{handle_export_command, ExportArgs};
pub use markup::{handle_markup_command, MarkupArgs};
pub use summary::{handle_summary_command, SummaryArgs};
