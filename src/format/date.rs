//! Date formatting with literal fallbacks for missing values

use std::fmt::Write;

use chrono::{DateTime, Local, NaiveDate, TimeZone};

/// Fallback for plan-level dates (record and phase start/end)
pub const NOT_SET: &str = "Not set";

/// Fallback for timeline item dates
pub const NO_DATE: &str = "No date";

/// Used when a configured date pattern cannot be applied
const FALLBACK_DATE_FORMAT: &str = "%Y-%m-%d";

/// Used when a configured timestamp pattern cannot be applied
const FALLBACK_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Apply `pattern` to a date, or `None` if chrono rejects it
///
/// Time and zone specifiers are rejected here, since a bare date has neither.
pub fn try_format_date(date: NaiveDate, pattern: &str) -> Option<String> {
    let mut out = String::new();
    write!(out, "{}", date.format(pattern)).ok()?;
    Some(out)
}

/// Apply `pattern` to a timestamp, or `None` if chrono rejects it
pub fn try_format_timestamp<Tz: TimeZone>(at: &DateTime<Tz>, pattern: &str) -> Option<String>
where
    Tz::Offset: std::fmt::Display,
{
    let mut out = String::new();
    write!(out, "{}", at.format(pattern)).ok()?;
    Some(out)
}

/// Formats dates and timestamps with configured strftime patterns
#[derive(Debug, Clone)]
pub struct DateFormatter {
    date_format: String,
    timestamp_format: String,
}

impl DateFormatter {
    pub fn new(date_format: impl Into<String>, timestamp_format: impl Into<String>) -> Self {
        Self {
            date_format: date_format.into(),
            timestamp_format: timestamp_format.into(),
        }
    }

    /// Format a date
    pub fn format(&self, date: NaiveDate) -> String {
        try_format_date(date, &self.date_format)
            .unwrap_or_else(|| date.format(FALLBACK_DATE_FORMAT).to_string())
    }

    /// Format an optional date, using `fallback` when absent
    pub fn format_or(&self, date: Option<NaiveDate>, fallback: &str) -> String {
        date.map(|d| self.format(d))
            .unwrap_or_else(|| fallback.to_string())
    }

    /// "Jun 1, 2025 - Jun 9, 2025", with "Not set" for a missing end
    pub fn format_range(&self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> String {
        format!(
            "{} - {}",
            self.format_or(start, NOT_SET),
            self.format_or(end, NOT_SET)
        )
    }

    /// Format the "generated on" stamp
    pub fn format_timestamp<Tz: TimeZone>(&self, at: &DateTime<Tz>) -> String
    where
        Tz::Offset: std::fmt::Display,
    {
        try_format_timestamp(at, &self.timestamp_format)
            .unwrap_or_else(|| at.format(FALLBACK_TIMESTAMP_FORMAT).to_string())
    }

    /// Stamp for the current local time
    pub fn now_stamp(&self) -> String {
        self.format_timestamp(&Local::now())
    }
}

impl Default for DateFormatter {
    fn default() -> Self {
        Self::new("%b %-d, %Y", "%B %-d, %Y at %H:%M")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_format_date() {
        let fmt = DateFormatter::default();
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        assert_eq!(fmt.format(date), "Jun 1, 2025");
    }

    #[test]
    fn test_fallbacks() {
        let fmt = DateFormatter::default();
        assert_eq!(fmt.format_or(None, NO_DATE), "No date");
        assert_eq!(
            fmt.format_range(NaiveDate::from_ymd_opt(2025, 6, 1), None),
            "Jun 1, 2025 - Not set"
        );
    }

    #[test]
    fn test_timestamp() {
        let fmt = DateFormatter::default();
        let at = Utc.with_ymd_and_hms(2025, 3, 4, 14, 5, 0).unwrap();
        assert_eq!(fmt.format_timestamp(&at), "March 4, 2025 at 14:05");
    }

    #[test]
    fn test_custom_pattern() {
        let fmt = DateFormatter::new("%d/%m/%Y", "%Y-%m-%d %H:%M");
        let date = NaiveDate::from_ymd_opt(2025, 12, 24).unwrap();
        assert_eq!(fmt.format(date), "24/12/2025");
    }

    #[test]
    fn test_time_specifier_in_date_pattern_falls_back() {
        let fmt = DateFormatter::new("%b %-d, %Y %H:%M", "%Y %Z %Q");
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();

        assert_eq!(fmt.format(date), "2025-06-01");
        assert_eq!(
            fmt.format_range(Some(date), None),
            "2025-06-01 - Not set"
        );

        let at = Utc.with_ymd_and_hms(2025, 3, 4, 14, 5, 0).unwrap();
        assert_eq!(fmt.format_timestamp(&at), "2025-03-04 14:05");
    }

    #[test]
    fn test_try_format() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        assert_eq!(try_format_date(date, "%d.%m.%Y").as_deref(), Some("01.06.2025"));
        assert_eq!(try_format_date(date, "%H:%M"), None);
        assert_eq!(try_format_date(date, "%Q"), None);
    }
}
