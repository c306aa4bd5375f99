//! Storage layer for tripreport
//!
//! Read-side access to travel plans: a file-backed store with atomic JSON
//! writes, plus an in-memory store.

pub mod file_io;
pub mod init;
pub mod records;

pub use file_io::{read_document, write_json_atomic, FileEncoding};
pub use init::{initialize_storage, sample_record, SAMPLE_RECORD_ID};
pub use records::{FileRecordStore, MemoryRecordStore, RecordSource};
