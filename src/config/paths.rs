//! Path management for tripreport
//!
//! Resolves where settings, stored records and render scratch files live.
//!
//! ## Path Resolution Order
//!
//! 1. `TRIPREPORT_HOME` environment variable (if set)
//! 2. The platform config directory for `tripreport` (via `directories`)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::ReportError;

/// Environment variable that overrides the base directory
pub const HOME_ENV_VAR: &str = "TRIPREPORT_HOME";

/// Manages all paths used by tripreport
#[derive(Debug, Clone)]
pub struct ReportPaths {
    /// Base directory for all tripreport data
    base_dir: PathBuf,
}

impl ReportPaths {
    /// Create a new ReportPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, ReportError> {
        let base_dir = if let Ok(custom) = std::env::var(HOME_ENV_VAR) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create ReportPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Directory holding `<record-id>.json` / `<record-id>.yaml` files
    pub fn records_dir(&self) -> PathBuf {
        self.base_dir.join("records")
    }

    /// Scratch directory for ephemeral render files
    pub fn work_dir(&self) -> PathBuf {
        self.base_dir.join("work")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), ReportError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ReportError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.records_dir())
            .map_err(|e| ReportError::Io(format!("Failed to create records directory: {}", e)))?;

        std::fs::create_dir_all(self.work_dir())
            .map_err(|e| ReportError::Io(format!("Failed to create work directory: {}", e)))?;

        Ok(())
    }

    /// Check if tripreport has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, ReportError> {
    ProjectDirs::from("", "", "tripreport")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| ReportError::Config("Could not determine a home directory".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ReportPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.records_dir(), temp_dir.path().join("records"));
        assert_eq!(paths.work_dir(), temp_dir.path().join("work"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        env::set_var(HOME_ENV_VAR, custom_path);

        let paths = ReportPaths::new().unwrap();
        assert_eq!(paths.base_dir(), temp_dir.path());

        env::remove_var(HOME_ENV_VAR);
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ReportPaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(paths.records_dir().exists());
        assert!(paths.work_dir().exists());
        assert!(!paths.is_initialized());
    }
}
