//! Custom error types for tripreport
//!
//! This module defines the error hierarchy for the export pipeline using
//! thiserror for ergonomic error definitions. Every variant maps onto one of
//! three transport outcomes: a validation failure (400), a missing record
//! (404), or an internal failure (500).

use std::time::Duration;

use thiserror::Error;

/// Message returned to callers for any internal failure
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to generate export";

/// The main error type for tripreport operations
#[derive(Error, Debug)]
pub enum ReportError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization/deserialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Request validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// The requested format is not offered for the requested export kind
    #[error("Format '{format}' is not supported for {kind} exports")]
    UnsupportedFormat { kind: String, format: String },

    /// The external renderer failed, or its files could not be handled
    #[error("Render error: {0}")]
    Render(String),

    /// The external renderer did not finish in time
    #[error("Renderer timed out after {limit:?}")]
    RenderTimeout { limit: Duration },

    /// Export serialization errors
    #[error("Export error: {0}")]
    Export(String),

    /// Record store errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl ReportError {
    /// Create a "not found" error for source records
    pub fn record_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Record",
            identifier: identifier.into(),
        }
    }

    /// Create an "unsupported format" error
    pub fn unsupported_format(kind: impl Into<String>, format: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            kind: kind.into(),
            format: format.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error (including unsupported formats)
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::UnsupportedFormat { .. })
    }

    /// Check if this error came out of the render stage
    pub fn is_render_failure(&self) -> bool {
        matches!(self, Self::Render(_) | Self::RenderTimeout { .. })
    }

    /// HTTP-equivalent status code for this error
    pub fn status_code(&self) -> u16 {
        if self.is_validation() {
            400
        } else if self.is_not_found() {
            404
        } else {
            500
        }
    }

    /// Message that is safe to show to the caller
    ///
    /// Validation and lookup errors describe what the caller sent. Everything
    /// else collapses to a generic message so paths and renderer output stay
    /// in the logs.
    pub fn public_message(&self) -> String {
        match self {
            Self::Validation(_) | Self::UnsupportedFormat { .. } | Self::NotFound { .. } => {
                self.to_string()
            }
            _ => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for ReportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for ReportError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

/// Result type alias for tripreport operations
pub type ReportResult<T> = Result<T, ReportError>;
