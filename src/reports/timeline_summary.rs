//! Timeline and checklist summaries
//!
//! Counts progress per phase and across the checklist so the documents can
//! show "3 of 7 completed" without walking the record again.

use chrono::NaiveDate;

use crate::models::{Checklist, Timeline, TimelineStatus};

/// A timeline item as shown in reports
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineRow {
    pub title: String,
    pub date: Option<NaiveDate>,
    pub status: TimelineStatus,
    pub description: String,
}

/// A phase with its items and progress
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseRow {
    pub name: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub items: Vec<TimelineRow>,
    pub completed: usize,
}

impl PhaseRow {
    pub fn new(name: impl Into<String>, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self {
            name: name.into(),
            start_date: start,
            end_date: end,
            items: Vec::new(),
            completed: 0,
        }
    }

    pub fn add_item(&mut self, item: TimelineRow) {
        if item.status.is_completed() {
            self.completed += 1;
        }
        self.items.push(item);
    }
}

/// Progress across all phases
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineSummary {
    pub phases: Vec<PhaseRow>,
    pub total_items: usize,
    pub completed_items: usize,
}

impl TimelineSummary {
    pub fn generate(timeline: &Timeline) -> Self {
        let mut phases = Vec::with_capacity(timeline.phases.len());
        let mut total_items = 0;
        let mut completed_items = 0;

        for phase in &timeline.phases {
            let mut row = PhaseRow::new(phase.name.clone(), phase.start_date, phase.end_date);
            for item in &phase.items {
                row.add_item(TimelineRow {
                    title: item.title.clone(),
                    date: item.date,
                    status: item.status,
                    description: item.description.clone().unwrap_or_default(),
                });
            }
            total_items += row.items.len();
            completed_items += row.completed;
            phases.push(row);
        }

        Self {
            phases,
            total_items,
            completed_items,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }

    pub fn completion_percentage(&self) -> f64 {
        percentage(self.completed_items, self.total_items)
    }
}

/// A checklist entry as shown in reports
#[derive(Debug, Clone, PartialEq)]
pub struct ChecklistRow {
    pub title: String,
    pub description: String,
    pub completed: bool,
}

/// Checklist progress
#[derive(Debug, Clone, PartialEq)]
pub struct ChecklistSummary {
    pub items: Vec<ChecklistRow>,
    pub completed: usize,
}

impl ChecklistSummary {
    pub fn generate(checklist: &Checklist) -> Self {
        let items: Vec<ChecklistRow> = checklist
            .items
            .iter()
            .map(|item| ChecklistRow {
                title: item.title.clone(),
                description: item.description.clone().unwrap_or_default(),
                completed: item.completed,
            })
            .collect();
        let completed = items.iter().filter(|i| i.completed).count();

        Self { items, completed }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total(&self) -> usize {
        self.items.len()
    }

    pub fn completion_percentage(&self) -> f64 {
        percentage(self.completed, self.items.len())
    }
}

fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}
