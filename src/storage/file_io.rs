//! Record file encodings and atomic writes
//!
//! A record file is JSON or YAML depending on its extension. Writes go to a
//! sibling temp file that is persisted over the target, so readers never see
//! a half-written record.

use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{ReportError, ReportResult};

/// Extensions a record file may carry
pub const RECORD_EXTENSIONS: [&str; 3] = ["json", "yaml", "yml"];

/// Encoding of a record file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileEncoding {
    Json,
    Yaml,
}

impl FileEncoding {
    /// Encoding implied by a path's extension, if it is a record file
    pub fn of(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Some(Self::Json),
            Some("yaml" | "yml") => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// Decode a record file, choosing the parser from its extension
pub fn read_document<T: DeserializeOwned>(path: &Path) -> ReportResult<T> {
    let encoding = FileEncoding::of(path).ok_or_else(|| {
        ReportError::Storage(format!("Unrecognized record file: {}", path.display()))
    })?;

    let file = fs::File::open(path)
        .map_err(|e| ReportError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;
    let reader = BufReader::new(file);

    let parsed = match encoding {
        FileEncoding::Json => serde_json::from_reader(reader).map_err(|e| e.to_string()),
        FileEncoding::Yaml => serde_yaml::from_reader(reader).map_err(|e| e.to_string()),
    };
    parsed.map_err(|e| ReportError::Storage(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Write pretty JSON to `path`, replacing any existing file in one step
pub fn write_json_atomic<T: Serialize>(path: &Path, data: &T) -> ReportResult<()> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(dir).map_err(|e| {
        ReportError::Storage(format!("Failed to create directory {}: {}", dir.display(), e))
    })?;

    // Same directory as the target, so the persist is a plain rename
    let temp = tempfile::Builder::new()
        .prefix(".tmp-")
        .suffix(".json")
        .tempfile_in(dir)
        .map_err(|e| ReportError::Storage(format!("Failed to create temp file: {}", e)))?;

    {
        let mut writer = BufWriter::new(temp.as_file());
        serde_json::to_writer_pretty(&mut writer, data)
            .map_err(|e| ReportError::Storage(format!("Failed to serialize data: {}", e)))?;
        writer
            .flush()
            .map_err(|e| ReportError::Storage(format!("Failed to flush data: {}", e)))?;
    }
    temp.as_file()
        .sync_all()
        .map_err(|e| ReportError::Storage(format!("Failed to sync data: {}", e)))?;

    temp.persist(path).map_err(|e| {
        ReportError::Storage(format!("Failed to replace {}: {}", path.display(), e.error))
    })?;
    Ok(())
}
