//! The travel plan as handed over by the record store
//!
//! Records are read-only input. Every section is optional so that a
//! half-finished plan still produces a report.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::budget::Budget;
use super::dates::deserialize_optional_date;
use super::ids::RecordId;
use super::timeline::{Checklist, Timeline};

/// A complete travel plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceRecord {
    /// Store-assigned identifier (file stores fill it from the file name)
    #[serde(default)]
    pub id: RecordId,

    /// Display name ("Lisbon Spring Break")
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub destination: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub start_date: Option<NaiveDate>,

    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub end_date: Option<NaiveDate>,

    #[serde(default)]
    pub travelers: Option<u32>,

    #[serde(default)]
    pub notes: Option<String>,

    #[serde(default)]
    pub budget: Budget,

    #[serde(default)]
    pub timeline: Timeline,

    #[serde(default)]
    pub checklist: Checklist,
}

impl SourceRecord {
    /// Create an empty record
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: RecordId::new(id),
            name: name.into(),
            description: None,
            destination: None,
            start_date: None,
            end_date: None,
            travelers: None,
            notes: None,
            budget: Budget::default(),
            timeline: Timeline::default(),
            checklist: Checklist::default(),
        }
    }

    /// Name to show in document titles
    pub fn display_name(&self) -> &str {
        let trimmed = self.name.trim();
        if trimmed.is_empty() {
            "Untitled Trip"
        } else {
            trimmed
        }
    }
}
