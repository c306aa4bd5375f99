//! CLI command for inspecting the printable markup of a report

use clap::Args;
use std::path::PathBuf;

use crate::error::{ReportError, ReportResult};
use crate::services::Exporter;
use crate::storage::RecordSource;

/// Arguments for `tripreport markup`
#[derive(Args, Debug, Clone)]
pub struct MarkupArgs {
    /// Record id
    pub record: String,

    /// Report kind: budget, experience or timeline
    #[arg(short, long, default_value = "budget")]
    pub kind: String,

    /// Include charts
    #[arg(short, long)]
    pub visuals: bool,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle the markup command
pub fn handle_markup_command<S: RecordSource>(
    exporter: &Exporter<S>,
    args: &MarkupArgs,
) -> ReportResult<()> {
    let document = exporter.markup(&args.record, &args.kind, args.visuals)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &document.markup).map_err(|e| {
                ReportError::Export(format!("Failed to write {}: {}", path.display(), e))
            })?;
            println!("Markup written to: {}", path.display());
        }
        None => print!("{}", document.markup),
    }

    Ok(())
}
