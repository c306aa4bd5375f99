//! Storage initialization
//!
//! Handles first-run setup and the sample record

use chrono::NaiveDate;

use crate::config::paths::ReportPaths;
use crate::error::ReportError;
use crate::models::{
    BudgetCategory, BudgetItem, ChecklistItem, ItemStatus, Money, Phase, SourceRecord, TimelineItem,
    TimelineStatus,
};

use super::records::FileRecordStore;

/// Id of the record written on first run
pub const SAMPLE_RECORD_ID: &str = "sample-trip";

/// Initialize storage for a fresh installation
///
/// Creates the directory layout and, when the records directory is empty,
/// a sample record to export. Returns whether the sample was written.
pub fn initialize_storage(paths: &ReportPaths) -> Result<bool, ReportError> {
    paths.ensure_directories()?;

    let store = FileRecordStore::new(paths.records_dir());
    if !store.list()?.is_empty() {
        return Ok(false);
    }

    store.save(&sample_record())?;
    Ok(true)
}

/// A small but complete travel plan
pub fn sample_record() -> SourceRecord {
    let mut record = SourceRecord::new(SAMPLE_RECORD_ID, "Lisbon Spring Break");
    record.destination = Some("Lisbon, Portugal".into());
    record.description = Some("A week of tiles, trams and pastries.".into());
    record.start_date = NaiveDate::from_ymd_opt(2025, 4, 10);
    record.end_date = NaiveDate::from_ymd_opt(2025, 4, 17);
    record.travelers = Some(2);

    record.budget.currency = "EUR".into();
    record.budget.total_budget = Some(Money::from_cents(250000));
    record.budget.categories = vec![
        BudgetCategory::new("Flights", Money::from_cents(60000)).with_item(
            BudgetItem::new("Return flights", Money::from_cents(54000))
                .with_actual(Money::from_cents(51890))
                .with_status(ItemStatus::Paid),
        ),
        BudgetCategory::new("Lodging", Money::from_cents(105000))
            .with_item(
                BudgetItem::new("Guesthouse in Alfama", Money::from_cents(98000))
                    .with_status(ItemStatus::Booked),
            ),
        BudgetCategory::new("Food", Money::from_cents(50000))
            .with_item(BudgetItem::new("Dinners", Money::from_cents(28000)))
            .with_item(BudgetItem::new("Pastéis de nata", Money::from_cents(2500))),
        BudgetCategory::new("Activities", Money::from_cents(20000)),
    ];

    let mut booking = Phase::new("Booking");
    booking.end_date = NaiveDate::from_ymd_opt(2025, 3, 1);
    booking.items.push(TimelineItem {
        date: NaiveDate::from_ymd_opt(2025, 1, 20),
        status: TimelineStatus::Completed,
        ..TimelineItem::new("Book flights")
    });
    booking.items.push(TimelineItem {
        status: TimelineStatus::InProgress,
        ..TimelineItem::new("Book guesthouse")
    });

    let mut trip = Phase::new("In Lisbon");
    trip.start_date = record.start_date;
    trip.end_date = record.end_date;
    trip.items.push(TimelineItem {
        date: NaiveDate::from_ymd_opt(2025, 4, 12),
        description: Some("Day trip by train".into()),
        ..TimelineItem::new("Sintra")
    });

    record.timeline.phases = vec![booking, trip];
    record.checklist.items = vec![
        ChecklistItem {
            title: "Passport".into(),
            description: None,
            completed: true,
        },
        ChecklistItem {
            title: "Travel insurance".into(),
            description: Some("Check the coverage for cancellations".into()),
            completed: false,
        },
    ];

    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecordId;
    use crate::storage::RecordSource;
    use tempfile::TempDir;

    fn has_sample(paths: &ReportPaths) -> bool {
        FileRecordStore::new(paths.records_dir())
            .record_path(&RecordId::from(SAMPLE_RECORD_ID))
            .exists()
    }

    #[test]
    fn test_initialize_storage() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ReportPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert!(!has_sample(&paths));
        assert!(initialize_storage(&paths).unwrap());

        assert!(paths.records_dir().exists());
        assert!(paths.work_dir().exists());
        assert!(has_sample(&paths));
    }

    #[test]
    fn test_sample_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ReportPaths::with_base_dir(temp_dir.path().to_path_buf());
        initialize_storage(&paths).unwrap();

        let store = FileRecordStore::new(paths.records_dir());
        let loaded = store.fetch(&RecordId::from(SAMPLE_RECORD_ID)).unwrap();

        assert_eq!(loaded.display_name(), "Lisbon Spring Break");
        assert_eq!(loaded.budget.categories.len(), 4);
        assert_eq!(
            loaded.budget.categories[0].items[0].actual_cost,
            Some(Money::from_cents(51890))
        );
        assert_eq!(loaded.timeline.phases[1].start_date, record_start());
    }

    fn record_start() -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(2025, 4, 10)
    }

    #[test]
    fn test_doesnt_overwrite_existing() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ReportPaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();
        std::fs::write(paths.records_dir().join("mine.yaml"), "name: Mine\n").unwrap();

        assert!(!initialize_storage(&paths).unwrap());
        assert!(!has_sample(&paths));
    }
}
