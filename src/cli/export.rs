//! CLI command for exporting a record
//!
//! Kind and format are passed through as raw strings so that the service's
//! allow-list is the only place that decides what is accepted.

use clap::Args;
use std::path::{Path, PathBuf};

use crate::models::ExportRequest;
use crate::services::{ExportFailure, ExportPayload, Exporter};
use crate::storage::RecordSource;

/// Arguments for `tripreport export`
#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    /// Record id
    pub record: String,

    /// Report kind: budget, experience or timeline
    #[arg(short, long, default_value = "budget")]
    pub kind: String,

    /// Output format: pdf or csv (csv is budget only)
    #[arg(short, long, default_value = "pdf")]
    pub format: String,

    /// Include charts in PDF documents
    #[arg(short, long)]
    pub visuals: bool,

    /// Output file or directory (defaults to the generated name in the
    /// current directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl ExportArgs {
    pub fn to_request(&self) -> ExportRequest {
        ExportRequest::new(&self.record, &self.kind, &self.format, self.visuals)
    }
}

/// Handle the export command
pub fn handle_export_command<S: RecordSource>(
    exporter: &Exporter<S>,
    args: &ExportArgs,
) -> Result<PathBuf, ExportFailure> {
    let payload = exporter.respond(&args.to_request())?;
    let target = output_path(args.output.as_deref(), &payload);

    std::fs::write(&target, &payload.bytes).map_err(|e| ExportFailure {
        status: 500,
        message: format!("Failed to write {}: {}", target.display(), e),
    })?;

    println!(
        "Exported {} ({} bytes, {})",
        target.display(),
        payload.bytes.len(),
        payload.content_type
    );
    Ok(target)
}

/// Resolve where the payload is written
fn output_path(output: Option<&Path>, payload: &ExportPayload) -> PathBuf {
    match output {
        Some(path) if path.is_dir() => path.join(&payload.filename),
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(&payload.filename),
    }
}
