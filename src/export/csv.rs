//! CSV export of budget line items
//!
//! One row per item, spreadsheet-compatible. Categories without items still
//! get a row so they are not silently lost.

use crate::error::{ReportError, ReportResult};
use crate::reports::BudgetSummary;
use std::io::Write;

/// Column header line
pub const CSV_HEADER: &str = "Category,Item,Estimated Cost,Actual Cost,Status,Notes";

/// Export budget line items to CSV
///
/// Amounts are plain decimals with two places. The actual cost column is
/// left blank for items that have no recorded actual.
pub fn export_budget_csv<W: Write>(summary: &BudgetSummary, writer: &mut W) -> ReportResult<()> {
    writeln!(writer, "{}", CSV_HEADER).map_err(|e| ReportError::Export(e.to_string()))?;

    let mut rows = 0;
    for category in &summary.categories {
        if category.items.is_empty() {
            writeln!(writer, "{},,,,,", escape_csv(&category.name))
                .map_err(|e| ReportError::Export(e.to_string()))?;
            rows += 1;
            continue;
        }

        for item in &category.items {
            let actual = if item.has_actual {
                item.actual.to_string()
            } else {
                String::new()
            };

            writeln!(
                writer,
                "{},{},{},{},{},{}",
                escape_csv(&category.name),
                escape_csv(&item.name),
                item.estimated,
                actual,
                item.status.label(),
                escape_csv(&item.notes)
            )
            .map_err(|e| ReportError::Export(e.to_string()))?;
            rows += 1;
        }
    }

    log::debug!("Wrote {} budget CSV rows", rows);
    Ok(())
}

/// Export budget line items to an in-memory CSV document
pub fn budget_csv_bytes(summary: &BudgetSummary) -> ReportResult<Vec<u8>> {
    let mut out = Vec::new();
    export_budget_csv(summary, &mut out)?;
    Ok(out)
}

/// Escape a string for CSV format
pub fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
