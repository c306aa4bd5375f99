//! Export requests and render jobs
//!
//! An [`ExportRequest`] is what the request layer hands over: raw strings,
//! unchecked. [`RenderJob::from_request`] validates it against the allow-list
//! of kind/format pairs; nothing else in the pipeline runs until that
//! succeeds.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::{JobId, RecordId};
use crate::error::{ReportError, ReportResult};

/// Which logical report is requested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportKind {
    /// Budget breakdown with optional charts
    Budget,
    /// Checklist, timeline and budget in one document
    Experience,
    /// Phases and their items
    Timeline,
}

impl ExportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Budget => "budget",
            Self::Experience => "experience",
            Self::Timeline => "timeline",
        }
    }

    /// Title used in document headers
    pub fn title(&self) -> &'static str {
        match self {
            Self::Budget => "Budget Report",
            Self::Experience => "Travel Experience Report",
            Self::Timeline => "Timeline Report",
        }
    }

    /// Formats this kind can be exported as
    pub fn allowed_formats(&self) -> &'static [OutputFormat] {
        match self {
            Self::Budget => &[OutputFormat::Pdf, OutputFormat::Csv],
            Self::Experience | Self::Timeline => &[OutputFormat::Pdf],
        }
    }

    pub fn supports(&self, format: OutputFormat) -> bool {
        self.allowed_formats().contains(&format)
    }
}

impl fmt::Display for ExportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportKind {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "budget" => Ok(Self::Budget),
            "experience" => Ok(Self::Experience),
            "timeline" => Ok(Self::Timeline),
            other => Err(ReportError::Validation(format!(
                "Unknown export kind '{}' (expected budget, experience or timeline)",
                other
            ))),
        }
    }
}

/// Output document format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Pdf,
    Csv,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Csv => "csv",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Csv => "text/csv",
        }
    }

    /// Parse a format name in the context of an export kind
    ///
    /// Unknown names and known names the kind does not offer both come back
    /// as `UnsupportedFormat`.
    pub fn parse_for(kind: ExportKind, raw: &str) -> ReportResult<Self> {
        let format = match raw.trim().to_ascii_lowercase().as_str() {
            "pdf" => Self::Pdf,
            "csv" => Self::Csv,
            _ => return Err(ReportError::unsupported_format(kind.as_str(), raw.trim())),
        };
        if !kind.supports(format) {
            return Err(ReportError::unsupported_format(kind.as_str(), format.extension()));
        }
        Ok(format)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Unvalidated export parameters from the request layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportRequest {
    pub record_id: String,
    pub export_kind: String,
    pub format: String,
    #[serde(default)]
    pub include_visuals: bool,
}

impl ExportRequest {
    pub fn new(
        record_id: impl Into<String>,
        export_kind: impl Into<String>,
        format: impl Into<String>,
        include_visuals: bool,
    ) -> Self {
        Self {
            record_id: record_id.into(),
            export_kind: export_kind.into(),
            format: format.into(),
            include_visuals,
        }
    }
}

/// A validated unit of export work, consumed once
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderJob {
    pub id: JobId,
    pub record_id: RecordId,
    pub kind: ExportKind,
    pub format: OutputFormat,
    pub include_visuals: bool,
}

impl RenderJob {
    /// Validate a request into a job
    pub fn from_request(request: &ExportRequest) -> ReportResult<Self> {
        let kind: ExportKind = request.export_kind.parse()?;
        let format = OutputFormat::parse_for(kind, &request.format)?;

        let record_id = request.record_id.trim();
        if record_id.is_empty() {
            return Err(ReportError::Validation("Record id must not be empty".into()));
        }

        Ok(Self {
            id: JobId::new(),
            record_id: RecordId::new(record_id),
            kind,
            format,
            include_visuals: request.include_visuals,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allow_list() {
        assert!(ExportKind::Budget.supports(OutputFormat::Pdf));
        assert!(ExportKind::Budget.supports(OutputFormat::Csv));
        assert!(!ExportKind::Experience.supports(OutputFormat::Csv));
        assert!(!ExportKind::Timeline.supports(OutputFormat::Csv));
    }

    #[test]
    fn test_valid_request() {
        let job = RenderJob::from_request(&ExportRequest::new("t1", "Budget", "CSV", false)).unwrap();
        assert_eq!(job.kind, ExportKind::Budget);
        assert_eq!(job.format, OutputFormat::Csv);
        assert_eq!(job.record_id.as_str(), "t1");
    }

    #[test]
    fn test_unknown_format() {
        let err = RenderJob::from_request(&ExportRequest::new("t1", "budget", "xml", false))
            .unwrap_err();
        assert!(matches!(err, ReportError::UnsupportedFormat { .. }));
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn test_disallowed_combination() {
        let err = RenderJob::from_request(&ExportRequest::new("t1", "timeline", "csv", false))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Format 'csv' is not supported for timeline exports"
        );
    }

    #[test]
    fn test_unknown_kind() {
        let err = RenderJob::from_request(&ExportRequest::new("t1", "receipts", "pdf", false))
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_blank_record_id() {
        let err =
            RenderJob::from_request(&ExportRequest::new("  ", "budget", "pdf", true)).unwrap_err();
        assert!(matches!(err, ReportError::Validation(_)));
    }

    #[test]
    fn test_content_types() {
        assert_eq!(OutputFormat::Pdf.content_type(), "application/pdf");
        assert_eq!(OutputFormat::Csv.content_type(), "text/csv");
    }
}
