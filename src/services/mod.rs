//! Service layer for tripreport
//!
//! The export service sits on top of the record store, the document
//! assembler and the renderer, and is the single entry point the CLI (or
//! any embedding request layer) calls.

pub mod export;

pub use export::{ExportFailure, ExportPayload, Exporter};
