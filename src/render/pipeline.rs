//! Markup to PDF through an external renderer
//!
//! The renderer is an ordinary program invoked as
//! `program [args...] <markup-file> <output-file>`. It runs with stdin
//! closed and stdout discarded; stderr is kept for the logs. Both scratch
//! files are [`EphemeralFile`]s, so they are gone once `render` returns,
//! whatever the outcome.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use super::ephemeral::EphemeralFile;
use crate::config::{ReportPaths, RendererSettings};
use crate::document::AssembledDocument;
use crate::error::{ReportError, ReportResult};
use crate::models::{OutputFormat, RenderJob};

const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// A finished binary document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOutput {
    pub bytes: Vec<u8>,
    pub filename: String,
    pub content_type: &'static str,
}

/// Runs the external renderer for one document at a time
#[derive(Debug, Clone)]
pub struct RenderPipeline {
    program: String,
    args: Vec<String>,
    timeout: Duration,
    work_dir: PathBuf,
}

impl RenderPipeline {
    /// Build a pipeline from renderer settings
    pub fn new(settings: &RendererSettings, work_dir: impl Into<PathBuf>) -> Self {
        Self {
            program: settings.program.clone(),
            args: settings.args.clone(),
            timeout: settings.timeout(),
            work_dir: work_dir.into(),
        }
    }

    /// Build a pipeline writing into the configured work directory
    pub fn from_paths(settings: &RendererSettings, paths: &ReportPaths) -> Self {
        Self::new(settings, paths.work_dir())
    }

    /// Override the subprocess deadline
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Render an assembled document to PDF
    pub fn render(
        &self,
        job: &RenderJob,
        document: &AssembledDocument,
    ) -> ReportResult<RenderOutput> {
        std::fs::create_dir_all(&self.work_dir).map_err(|e| {
            ReportError::Render(format!(
                "Failed to create work directory {}: {}",
                self.work_dir.display(),
                e
            ))
        })?;

        let markup = EphemeralFile::create(&self.work_dir, job.id, ".html")?;
        let output = EphemeralFile::create(&self.work_dir, job.id, ".pdf")?;
        markup.write(document.markup.as_bytes())?;

        let started = Instant::now();
        self.run(job, markup.path(), output.path())?;

        let bytes = output.read()?;
        if bytes.is_empty() {
            return Err(ReportError::Render(format!(
                "Renderer '{}' produced an empty document",
                self.program
            )));
        }

        log::debug!(
            "{}: rendered {} bytes in {:?}",
            job.id,
            bytes.len(),
            started.elapsed()
        );

        Ok(RenderOutput {
            bytes,
            filename: document.filename.clone(),
            content_type: OutputFormat::Pdf.content_type(),
        })
    }

    fn run(&self, job: &RenderJob, input: &Path, output: &Path) -> ReportResult<()> {
        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .arg(input)
            .arg(output)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped());

        log::debug!("{}: running {} {:?}", job.id, self.program, self.args);
        let mut child = command.spawn().map_err(|e| {
            ReportError::Render(format!("Failed to start renderer '{}': {}", self.program, e))
        })?;

        // Drain stderr on its own thread so a chatty renderer cannot block
        let stderr = child.stderr.take().map(|mut pipe| {
            thread::spawn(move || {
                let mut text = String::new();
                let _ = pipe.read_to_string(&mut text);
                text
            })
        });

        let status = self.wait_with_deadline(job, &mut child)?;

        let stderr = stderr
            .and_then(|handle| handle.join().ok())
            .unwrap_or_default();
        let stderr = stderr.trim();
        if !stderr.is_empty() {
            log::debug!("{}: renderer stderr: {}", job.id, stderr);
        }

        if !status.success() {
            return Err(ReportError::Render(format!(
                "Renderer '{}' exited with {}: {}",
                self.program, status, stderr
            )));
        }
        Ok(())
    }

    fn wait_with_deadline(&self, job: &RenderJob, child: &mut Child) -> ReportResult<ExitStatus> {
        let started = Instant::now();
        loop {
            match child.try_wait() {
                Ok(Some(status)) => return Ok(status),
                Ok(None) => {
                    if started.elapsed() >= self.timeout {
                        log::warn!(
                            "{}: renderer exceeded {:?}, killing it",
                            job.id,
                            self.timeout
                        );
                        let _ = child.kill();
                        let _ = child.wait();
                        return Err(ReportError::RenderTimeout {
                            limit: self.timeout,
                        });
                    }
                    thread::sleep(POLL_INTERVAL);
                }
                Err(e) => {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(ReportError::Render(format!(
                        "Failed to wait for renderer '{}': {}",
                        self.program, e
                    )));
                }
            }
        }
    }
}
