//! Configuration module for tripreport
//!
//! This module provides configuration management including:
//! - Base directory resolution (records, render scratch space)
//! - Renderer and display settings persistence

pub mod paths;
pub mod settings;

pub use paths::ReportPaths;
pub use settings::{RendererSettings, Settings};
