//! tripreport - printable and flat exports for travel plans
//!
//! This library turns a stored travel plan (budget, timeline, checklist and
//! narrative fields) into downloadable reports: PDF documents rendered by an
//! external HTML-to-PDF program, or a CSV of budget line items.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and settings
//! - `error`: Custom error types
//! - `models`: The travel plan, money, ids and export requests
//! - `storage`: Record sources (files and in-memory)
//! - `reports`: Aggregation into per-category and per-phase summaries
//! - `format`: Currency and date formatting
//! - `charts`: Pie and bar chart geometry
//! - `document`: HTML assembly for the three report kinds
//! - `export`: CSV export
//! - `render`: External renderer, scratch files and the render pool
//! - `services`: The export dispatcher
//! - `display` / `cli`: Terminal output and command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use tripreport::config::{paths::ReportPaths, settings::Settings};
//! use tripreport::models::ExportRequest;
//! use tripreport::services::Exporter;
//! use tripreport::storage::FileRecordStore;
//!
//! let paths = ReportPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let exporter = Exporter::new(FileRecordStore::new(paths.records_dir()), settings, &paths);
//! let payload = exporter.export(&ExportRequest::new("sample-trip", "budget", "pdf", true))?;
//! ```

pub mod charts;
pub mod cli;
pub mod config;
pub mod display;
pub mod document;
pub mod error;
pub mod export;
pub mod format;
pub mod models;
pub mod render;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::ReportError;
