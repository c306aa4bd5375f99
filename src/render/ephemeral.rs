//! Scratch files that delete themselves
//!
//! Every render writes its markup and receives its binary through files in
//! the work directory. An [`EphemeralFile`] owns one such file and removes
//! it when dropped, so early returns and errors cannot leave files behind.

use std::path::{Path, PathBuf};

use tempfile::TempPath;

use crate::error::{ReportError, ReportResult};
use crate::models::JobId;

/// A job-owned scratch file, removed on drop
#[derive(Debug)]
pub struct EphemeralFile {
    job: JobId,
    path: PathBuf,
    guard: Option<TempPath>,
}

impl EphemeralFile {
    /// Create an empty file named after the job in `work_dir`
    pub fn create(work_dir: &Path, job: JobId, suffix: &str) -> ReportResult<Self> {
        let file = tempfile::Builder::new()
            .prefix(&job.file_stem())
            .suffix(suffix)
            .tempfile_in(work_dir)
            .map_err(|e| {
                ReportError::Render(format!(
                    "Failed to create scratch file in {}: {}",
                    work_dir.display(),
                    e
                ))
            })?;

        // Release the handle; the renderer opens the path itself
        let guard = file.into_temp_path();
        let path = guard.to_path_buf();
        log::debug!("{}: created {}", job, path.display());

        Ok(Self {
            job,
            path,
            guard: Some(guard),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn job(&self) -> JobId {
        self.job
    }

    /// Replace the file contents
    pub fn write(&self, bytes: &[u8]) -> ReportResult<()> {
        std::fs::write(&self.path, bytes).map_err(|e| {
            ReportError::Render(format!("Failed to write {}: {}", self.path.display(), e))
        })
    }

    /// Read the whole file
    pub fn read(&self) -> ReportResult<Vec<u8>> {
        std::fs::read(&self.path).map_err(|e| {
            ReportError::Render(format!("Failed to read {}: {}", self.path.display(), e))
        })
    }

    /// Delete now and report failure instead of only logging it
    pub fn close(mut self) -> ReportResult<()> {
        match self.guard.take() {
            Some(guard) => guard.close().map_err(|e| {
                ReportError::Render(format!("Failed to remove {}: {}", self.path.display(), e))
            }),
            None => Ok(()),
        }
    }
}

impl Drop for EphemeralFile {
    fn drop(&mut self) {
        if let Some(guard) = self.guard.take() {
            match guard.close() {
                Ok(()) => log::debug!("{}: removed {}", self.job, self.path.display()),
                Err(e) => log::warn!(
                    "{}: failed to remove scratch file {}: {}",
                    self.job,
                    self.path.display(),
                    e
                ),
            }
        }
    }
}
