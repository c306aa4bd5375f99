//! Export dispatch
//!
//! Validates a request against the kind/format allow-list, loads the
//! record, and routes to the flat CSV export or to the document renderer.
//! Validation runs before anything else: a rejected request never touches
//! the record store, the work directory or the renderer.

use crate::config::{ReportPaths, Settings};
use crate::document::{self, AssembledDocument};
use crate::error::{ReportError, ReportResult};
use crate::export::budget_csv_bytes;
use crate::format::Formatters;
use crate::models::{ExportRequest, OutputFormat, RenderJob};
use crate::render::{RenderPipeline, RenderPool};
use crate::reports::BudgetSummary;
use crate::storage::RecordSource;

/// A finished export, ready to hand to the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPayload {
    pub bytes: Vec<u8>,
    pub content_type: &'static str,
    pub filename: String,
}

impl ExportPayload {
    /// `Content-Disposition` header value for a download
    pub fn content_disposition(&self) -> String {
        format!("attachment; filename=\"{}\"", self.filename)
    }
}

/// Caller-facing failure: a status code and a message safe to display
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message} ({status})")]
pub struct ExportFailure {
    pub status: u16,
    pub message: String,
}

impl From<&ReportError> for ExportFailure {
    fn from(err: &ReportError) -> Self {
        Self {
            status: err.status_code(),
            message: err.public_message(),
        }
    }
}

/// Serves export requests; shared by reference across threads
pub struct Exporter<S: RecordSource> {
    source: S,
    settings: Settings,
    pipeline: RenderPipeline,
    pool: RenderPool,
}

impl<S: RecordSource> Exporter<S> {
    /// Create an exporter using the configured renderer and work directory
    pub fn new(source: S, settings: Settings, paths: &ReportPaths) -> Self {
        let pipeline = RenderPipeline::from_paths(&settings.renderer, paths);
        Self::with_pipeline(source, settings, pipeline)
    }

    /// Create an exporter around an explicit pipeline
    pub fn with_pipeline(source: S, settings: Settings, pipeline: RenderPipeline) -> Self {
        let pool = RenderPool::new(
            settings.renderer.max_concurrent,
            settings.renderer.queue_timeout(),
        );
        Self {
            source,
            settings,
            pipeline,
            pool,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn pool(&self) -> &RenderPool {
        &self.pool
    }

    /// Run one export
    pub fn export(&self, request: &ExportRequest) -> ReportResult<ExportPayload> {
        let job = RenderJob::from_request(request)?;
        log::info!(
            "{}: exporting '{}' as {} {}",
            job.id,
            job.record_id,
            job.kind,
            job.format
        );

        let record = self.source.fetch(&job.record_id)?;

        let payload = match job.format {
            OutputFormat::Csv => {
                let summary = BudgetSummary::generate(&record.budget);
                ExportPayload {
                    bytes: budget_csv_bytes(&summary)?,
                    content_type: OutputFormat::Csv.content_type(),
                    filename: document::export_filename(
                        record.display_name(),
                        job.kind,
                        OutputFormat::Csv,
                    ),
                }
            }
            OutputFormat::Pdf => {
                let formatters = Formatters::new(&record.budget.currency, &self.settings);
                let assembled =
                    document::assemble(&record, job.kind, job.include_visuals, &formatters);
                let _permit = self.pool.acquire()?;
                let output = self.pipeline.render(&job, &assembled)?;
                ExportPayload {
                    bytes: output.bytes,
                    content_type: output.content_type,
                    filename: output.filename,
                }
            }
        };

        log::info!(
            "{}: finished {} ({} bytes)",
            job.id,
            payload.filename,
            payload.bytes.len()
        );
        Ok(payload)
    }

    /// Run one export and map any error to a caller-facing failure
    ///
    /// Internal detail (paths, renderer output) goes to the log only.
    pub fn respond(&self, request: &ExportRequest) -> Result<ExportPayload, ExportFailure> {
        self.export(request).map_err(|err| {
            let failure = ExportFailure::from(&err);
            if failure.status >= 500 {
                log::error!("Export of '{}' failed: {}", request.record_id, err);
            } else {
                log::warn!("Export of '{}' rejected: {}", request.record_id, err);
            }
            failure
        })
    }

    /// Assemble the printable markup without rendering it
    pub fn markup(
        &self,
        record_id: &str,
        kind: &str,
        include_visuals: bool,
    ) -> ReportResult<AssembledDocument> {
        let request = ExportRequest::new(
            record_id,
            kind,
            OutputFormat::Pdf.extension(),
            include_visuals,
        );
        let job = RenderJob::from_request(&request)?;
        let record = self.source.fetch(&job.record_id)?;
        let formatters = Formatters::new(&record.budget.currency, &self.settings);
        Ok(document::assemble(&record, job.kind, job.include_visuals, &formatters))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RendererSettings;
    use crate::models::{BudgetCategory, BudgetItem, Money, RecordId, SourceRecord};
    use crate::storage::MemoryRecordStore;
    use std::path::Path;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tempfile::TempDir;

    /// Counts lookups so tests can assert validation ran first
    #[derive(Default)]
    struct CountingSource {
        inner: MemoryRecordStore,
        fetches: AtomicUsize,
    }

    impl RecordSource for CountingSource {
        fn fetch(&self, id: &RecordId) -> ReportResult<SourceRecord> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            self.inner.fetch(id)
        }
    }

    fn sample_record() -> SourceRecord {
        let mut record = SourceRecord::new("lisbon", "Lisbon Spring Break");
        record.budget.categories.push(
            BudgetCategory::new("Lodging", Money::from_cents(120000))
                .with_item(BudgetItem::new("Hotel", Money::from_cents(90000))),
        );
        record
    }

    fn exporter(program: &str, work: &Path) -> Exporter<CountingSource> {
        let source = CountingSource::default();
        source.inner.upsert(sample_record()).unwrap();

        let mut settings = Settings::default();
        settings.renderer = RendererSettings {
            program: program.to_string(),
            args: Vec::new(),
            ..RendererSettings::default()
        };
        let pipeline = RenderPipeline::new(&settings.renderer, work);
        Exporter::with_pipeline(source, settings, pipeline)
    }

    fn entries(dir: &Path) -> usize {
        std::fs::read_dir(dir).map(|d| d.count()).unwrap_or(0)
    }

    #[test]
    fn test_unsupported_format_has_no_side_effects() {
        let temp_dir = TempDir::new().unwrap();
        let work = temp_dir.path().join("work");
        let exporter = exporter("cp", &work);

        let err = exporter
            .export(&ExportRequest::new("lisbon", "budget", "xml", false))
            .unwrap_err();

        assert!(matches!(err, ReportError::UnsupportedFormat { .. }));
        assert_eq!(exporter.source().fetches.load(Ordering::SeqCst), 0);
        assert!(!work.exists());
    }

    #[test]
    fn test_disallowed_combination_is_400() {
        let temp_dir = TempDir::new().unwrap();
        let exporter = exporter("cp", temp_dir.path());

        let failure = exporter
            .respond(&ExportRequest::new("lisbon", "experience", "csv", false))
            .unwrap_err();
        assert_eq!(failure.status, 400);
        assert_eq!(
            failure.message,
            "Format 'csv' is not supported for experience exports"
        );
    }

    #[test]
    fn test_missing_record_is_404() {
        let temp_dir = TempDir::new().unwrap();
        let exporter = exporter("cp", temp_dir.path());

        let failure = exporter
            .respond(&ExportRequest::new("nowhere", "budget", "pdf", false))
            .unwrap_err();
        assert_eq!(failure.status, 404);
        assert_eq!(failure.message, "Record not found: nowhere");
        assert_eq!(entries(temp_dir.path()), 0);
    }

    #[test]
    fn test_csv_export() {
        let temp_dir = TempDir::new().unwrap();
        let exporter = exporter("false", temp_dir.path());

        let payload = exporter
            .export(&ExportRequest::new("lisbon", "budget", "csv", true))
            .unwrap();

        let text = String::from_utf8(payload.bytes.clone()).unwrap();
        assert!(text.starts_with("Category,Item,Estimated Cost"));
        assert!(text.contains("Lodging,Hotel,900.00,,Planned,"));
        assert_eq!(payload.content_type, "text/csv");
        assert_eq!(payload.filename, "lisbon_spring_break_budget.csv");
        assert_eq!(
            payload.content_disposition(),
            "attachment; filename=\"lisbon_spring_break_budget.csv\""
        );
        // The renderer is never involved
        assert_eq!(entries(temp_dir.path()), 0);
    }

    #[test]
    fn test_pdf_export_through_renderer() {
        let temp_dir = TempDir::new().unwrap();
        let exporter = exporter("cp", temp_dir.path());

        let payload = exporter
            .export(&ExportRequest::new("lisbon", "Experience", "PDF", true))
            .unwrap();

        let text = String::from_utf8(payload.bytes).unwrap();
        assert!(text.starts_with("<!DOCTYPE html>"));
        assert!(text.contains("Travel Experience Report"));
        assert_eq!(payload.content_type, "application/pdf");
        assert_eq!(payload.filename, "lisbon_spring_break_experience.pdf");
        assert_eq!(entries(temp_dir.path()), 0);
        assert_eq!(exporter.pool().available(), exporter.pool().capacity());
    }

    #[test]
    fn test_render_failure_is_sanitized() {
        let temp_dir = TempDir::new().unwrap();
        let exporter = exporter("false", temp_dir.path());

        let failure = exporter
            .respond(&ExportRequest::new("lisbon", "timeline", "pdf", false))
            .unwrap_err();

        assert_eq!(failure.status, 500);
        assert_eq!(failure.message, "Failed to generate export");
        assert_eq!(entries(temp_dir.path()), 0);
        assert_eq!(exporter.pool().available(), exporter.pool().capacity());
    }

    #[test]
    fn test_concurrent_exports() {
        let temp_dir = TempDir::new().unwrap();
        let exporter = exporter("cp", temp_dir.path());

        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    s.spawn(|| {
                        exporter.export(&ExportRequest::new("lisbon", "budget", "pdf", true))
                    })
                })
                .collect();
            for handle in handles {
                assert!(handle.join().unwrap().is_ok());
            }
        });
        assert_eq!(entries(temp_dir.path()), 0);
    }

    #[test]
    fn test_markup_without_rendering() {
        let temp_dir = TempDir::new().unwrap();
        let exporter = exporter("false", temp_dir.path());

        let doc = exporter.markup("lisbon", "budget", true).unwrap();
        assert!(doc.markup.contains("<svg"));
        assert_eq!(doc.filename, "lisbon_spring_break_budget.pdf");
    }
}
