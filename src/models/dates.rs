//! Lenient date parsing for record fields
//!
//! Dates show up either as plain `YYYY-MM-DD` strings or as full RFC 3339
//! timestamps. Anything else is treated as "no date" rather than failing the
//! whole record.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};

/// Parse a date string in any of the accepted shapes
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
                .ok()
                .map(|dt| dt.date())
        })
}

/// Serde helper for `Option<NaiveDate>` fields
pub fn deserialize_optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|s| {
        let parsed = parse_date(&s);
        if parsed.is_none() && !s.trim().is_empty() {
            log::warn!("Ignoring unparseable date '{}'", s);
        }
        parsed
    }))
}
