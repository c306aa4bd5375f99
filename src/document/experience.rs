//! Trip overview for the experience document

use super::template::escape_html;
use crate::format::{DateFormatter, NOT_SET};
use crate::models::SourceRecord;

/// Narrative fields of the record as a definition list
///
/// Destination and dates are always listed; the remaining fields only when
/// the record has them.
pub fn overview_section(record: &SourceRecord, dates: &DateFormatter) -> String {
    let mut html = String::from("<section class=\"overview\">\n<h2>Trip Overview</h2>\n<dl>\n");

    let destination = record
        .destination
        .as_deref()
        .filter(|d| !d.trim().is_empty())
        .unwrap_or(NOT_SET);
    push_field(&mut html, "Destination", destination);
    push_field(
        &mut html,
        "Dates",
        &dates.format_range(record.start_date, record.end_date),
    );

    if let Some(travelers) = record.travelers {
        push_field(&mut html, "Travelers", &travelers.to_string());
    }
    if let Some(description) = non_blank(&record.description) {
        push_field(&mut html, "Description", description);
    }
    if let Some(notes) = non_blank(&record.notes) {
        push_field(&mut html, "Notes", notes);
    }

    html.push_str("</dl>\n</section>\n");
    html
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

fn push_field(html: &mut String, label: &str, value: &str) {
    html.push_str(&format!(
        "<dt>{}</dt><dd>{}</dd>\n",
        escape_html(label),
        escape_html(value)
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_minimal_overview() {
        let record = SourceRecord::new("t1", "Weekend");
        let html = overview_section(&record, &DateFormatter::default());

        assert!(html.contains("<dt>Destination</dt><dd>Not set</dd>"));
        assert!(html.contains("<dd>Not set - Not set</dd>"));
        assert!(!html.contains("Travelers"));
        assert!(!html.contains("Notes"));
    }

    #[test]
    fn test_full_overview() {
        let mut record = SourceRecord::new("t1", "Lisbon");
        record.destination = Some("Lisbon, Portugal".into());
        record.start_date = NaiveDate::from_ymd_opt(2025, 4, 10);
        record.end_date = NaiveDate::from_ymd_opt(2025, 4, 17);
        record.travelers = Some(2);
        record.description = Some("Pastéis & <fado>".into());
        record.notes = Some("   ".into());

        let html = overview_section(&record, &DateFormatter::default());

        assert!(html.contains("<dd>Lisbon, Portugal</dd>"));
        assert!(html.contains("<dd>Apr 10, 2025 - Apr 17, 2025</dd>"));
        assert!(html.contains("<dd>2</dd>"));
        assert!(html.contains("Pastéis &amp; &lt;fado&gt;"));
        assert!(!html.contains("<dt>Notes</dt>"));
    }
}
