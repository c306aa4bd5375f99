//! Trip timeline and checklist models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::dates::deserialize_optional_date;

/// Progress of a timeline item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TimelineStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

impl TimelineStatus {
    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In progress",
            Self::Completed => "Completed",
        }
    }

    /// CSS modifier used by the document templates
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl fmt::Display for TimelineStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A dated step inside a phase
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimelineItem {
    #[serde(default)]
    pub title: String,

    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub date: Option<NaiveDate>,

    #[serde(default)]
    pub status: TimelineStatus,

    #[serde(default)]
    pub description: Option<String>,
}

impl TimelineItem {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

/// A stretch of the trip (e.g. "Booking", "In Lisbon")
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Phase {
    #[serde(default)]
    pub name: String,

    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub start_date: Option<NaiveDate>,

    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub end_date: Option<NaiveDate>,

    #[serde(default)]
    pub items: Vec<TimelineItem>,
}

impl Phase {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Ordered phases of the trip
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timeline {
    pub phases: Vec<Phase>,
}

impl Timeline {
    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }
}

/// A to-do entry
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChecklistItem {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub completed: bool,
}

/// Ordered to-do list
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Checklist {
    pub items: Vec<ChecklistItem>,
}

impl Checklist {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeline_from_array() {
        let timeline: Timeline = serde_json::from_str(
            r#"[{"name": "Prep", "start_date": "2025-05-01", "items": [
                {"title": "Book flights", "date": "2025-05-02", "status": "completed"},
                {"title": "Pack", "date": "soon"}
            ]}]"#,
        )
        .unwrap();

        let phase = &timeline.phases[0];
        assert_eq!(phase.start_date, NaiveDate::from_ymd_opt(2025, 5, 1));
        assert!(phase.end_date.is_none());
        assert!(phase.items[0].status.is_completed());
        assert!(phase.items[1].date.is_none());
        assert_eq!(phase.items[1].status, TimelineStatus::Pending);
    }

    #[test]
    fn test_checklist_from_array() {
        let checklist: Checklist =
            serde_json::from_str(r#"[{"title": "Passport", "completed": true}, {"title": "Visa"}]"#)
                .unwrap();
        assert_eq!(checklist.items.len(), 2);
        assert!(checklist.items[0].completed);
        assert!(!checklist.items[1].completed);
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(TimelineStatus::InProgress.label(), "In progress");
        assert_eq!(TimelineStatus::InProgress.css_class(), "in-progress");
    }
}
