//! User settings for tripreport
//!
//! Manages the renderer invocation, render capacity limits and display
//! formats.

use std::time::Duration;

use chrono::{Local, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};

use super::paths::ReportPaths;
use crate::error::ReportError;
use crate::format::date::{try_format_date, try_format_timestamp};

/// How the external document renderer is invoked
///
/// The renderer is called as `program [args...] <markup-file> <output-file>`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RendererSettings {
    /// Executable name or path
    #[serde(default = "default_program")]
    pub program: String,

    /// Arguments placed before the two file paths
    #[serde(default = "default_args")]
    pub args: Vec<String>,

    /// Hard limit on a single render, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum renders running at once
    #[serde(default = "default_max_concurrent")]
    pub max_concurrent: usize,

    /// How long a request may wait for a free render slot, in seconds
    #[serde(default = "default_queue_timeout_secs")]
    pub queue_timeout_secs: u64,
}

fn default_program() -> String {
    "wkhtmltopdf".to_string()
}

fn default_args() -> Vec<String> {
    vec!["--quiet".to_string(), "--enable-local-file-access".to_string()]
}

fn default_timeout_secs() -> u64 {
    60
}

fn default_max_concurrent() -> usize {
    2
}

fn default_queue_timeout_secs() -> u64 {
    120
}

impl Default for RendererSettings {
    fn default() -> Self {
        Self {
            program: default_program(),
            args: default_args(),
            timeout_secs: default_timeout_secs(),
            max_concurrent: default_max_concurrent(),
            queue_timeout_secs: default_queue_timeout_secs(),
        }
    }
}

impl RendererSettings {
    /// Render timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Queue wait limit as a Duration
    pub fn queue_timeout(&self) -> Duration {
        Duration::from_secs(self.queue_timeout_secs)
    }
}

/// User settings for tripreport
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// External renderer configuration
    #[serde(default)]
    pub renderer: RendererSettings,

    /// Date format for report dates (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Format for the "generated on" stamp (strftime format)
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_date_format() -> String {
    "%b %-d, %Y".to_string()
}

fn default_timestamp_format() -> String {
    "%B %-d, %Y at %H:%M".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            renderer: RendererSettings::default(),
            date_format: default_date_format(),
            timestamp_format: default_timestamp_format(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &ReportPaths) -> Result<Self, ReportError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                ReportError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                ReportError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            settings.validate()?;
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ReportPaths) -> Result<(), ReportError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            ReportError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            ReportError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// Reject settings the render pipeline cannot run with
    pub fn validate(&self) -> Result<(), ReportError> {
        if self.renderer.program.trim().is_empty() {
            return Err(ReportError::Config("renderer.program must not be empty".into()));
        }
        if self.renderer.max_concurrent == 0 {
            return Err(ReportError::Config(
                "renderer.max_concurrent must be at least 1".into(),
            ));
        }
        if self.renderer.timeout_secs == 0 {
            return Err(ReportError::Config(
                "renderer.timeout_secs must be at least 1".into(),
            ));
        }
        check_date_format(&self.date_format)?;
        check_timestamp_format(&self.timestamp_format)?;
        Ok(())
    }
}

/// Trial-format a fixed date; chrono reports unusable patterns only when applied
fn check_date_format(pattern: &str) -> Result<(), ReportError> {
    let sample = NaiveDate::from_ymd_opt(2000, 1, 31).unwrap_or_default();
    if try_format_date(sample, pattern).is_none() {
        return Err(ReportError::Config(format!(
            "date_format cannot format a calendar date: {}",
            pattern
        )));
    }
    Ok(())
}

fn check_timestamp_format(pattern: &str) -> Result<(), ReportError> {
    let sample = Local
        .with_ymd_and_hms(2000, 1, 31, 12, 0, 0)
        .earliest()
        .unwrap_or_else(Local::now);
    if try_format_timestamp(&sample, pattern).is_none() {
        return Err(ReportError::Config(format!(
            "timestamp_format is not a valid strftime pattern: {}",
            pattern
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.renderer.program, "wkhtmltopdf");
        assert_eq!(settings.renderer.timeout_secs, 60);
        assert_eq!(settings.renderer.max_concurrent, 2);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ReportPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.renderer.program = "weasyprint".into();
        settings.renderer.args = vec![];
        settings.renderer.max_concurrent = 4;

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.renderer.program, "weasyprint");
        assert!(loaded.renderer.args.is_empty());
        assert_eq!(loaded.renderer.max_concurrent, 4);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ReportPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"renderer": {"timeout_secs": 5}}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.renderer.timeout_secs, 5);
        assert_eq!(loaded.renderer.program, "wkhtmltopdf");
        assert_eq!(loaded.date_format, "%b %-d, %Y");
    }

    #[test]
    fn test_zero_workers_rejected() {
        let mut settings = Settings::default();
        settings.renderer.max_concurrent = 0;
        assert!(matches!(settings.validate(), Err(ReportError::Config(_))));
    }

    #[test]
    fn test_bad_date_pattern_rejected() {
        let mut settings = Settings::default();
        settings.date_format = "%Q %Y".into();
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("date_format"));
    }

    #[test]
    fn test_time_specifier_in_date_format_rejected() {
        let mut settings = Settings::default();
        settings.date_format = "%b %-d, %Y %H:%M".into();
        let err = settings.validate().unwrap_err();
        assert!(matches!(err, ReportError::Config(_)));
        assert!(err.to_string().contains("date_format"));

        settings.date_format = "%b %-d, %Y".into();
        settings.timestamp_format = "%B %-d, %Y %Q".into();
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("timestamp_format"));
    }

    #[test]
    fn test_time_specifier_in_settings_file_rejected_on_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ReportPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"date_format": "%Y-%m-%d %H:%M"}"#).unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, ReportError::Config(_)));
    }
}
