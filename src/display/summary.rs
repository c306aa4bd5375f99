//! Terminal summary of a travel plan
//!
//! Budget categories go in a table; timeline and checklist progress are
//! one-line counts underneath.

use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::format::{DateFormatter, Formatters, NOT_SET};
use crate::models::SourceRecord;
use crate::reports::{BudgetSummary, ChecklistSummary, TimelineSummary};

#[derive(Debug, Clone, Tabled)]
struct CategoryLine {
    #[tabled(rename = "Category")]
    name: String,
    #[tabled(rename = "Items")]
    items: usize,
    #[tabled(rename = "Allocated")]
    allocated: String,
    #[tabled(rename = "Estimated")]
    estimated: String,
    #[tabled(rename = "Actual")]
    actual: String,
}

/// Format the budget categories as a table with a totals row
pub fn format_budget_table(summary: &BudgetSummary, formatters: &Formatters) -> String {
    if summary.is_empty() {
        return "No budget data available".to_string();
    }

    let currency = &formatters.currency;
    let mut lines: Vec<CategoryLine> = summary
        .categories
        .iter()
        .map(|row| CategoryLine {
            name: row.name.clone(),
            items: row.items.len(),
            allocated: currency.format(row.allocation),
            estimated: currency.format(row.subtotal_estimated),
            actual: currency.format(row.subtotal_actual),
        })
        .collect();

    lines.push(CategoryLine {
        name: "Total".to_string(),
        items: summary.item_count(),
        allocated: currency.format(summary.total_allocated),
        estimated: currency.format(summary.total_estimated),
        actual: currency.format(summary.total_actual),
    });

    Table::new(lines)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()))
        .to_string()
}

/// Full terminal summary for a record
pub fn format_record_summary(record: &SourceRecord, formatters: &Formatters) -> String {
    let budget = BudgetSummary::generate(&record.budget);
    let timeline = TimelineSummary::generate(&record.timeline);
    let checklist = ChecklistSummary::generate(&record.checklist);
    let currency = &formatters.currency;

    let mut output = String::new();
    output.push_str(&format!("{} ({})\n", record.display_name(), record.id));
    output.push_str(&format!(
        "Destination: {}\n",
        record
            .destination
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .unwrap_or(NOT_SET)
    ));
    output.push_str(&format!(
        "Dates:       {}\n\n",
        format_dates(record, &formatters.dates)
    ));

    output.push_str(&format_budget_table(&budget, formatters));
    output.push('\n');

    if !budget.is_empty() {
        output.push_str(&format!(
            "Budget: {}  Remaining: {}",
            currency.format(budget.total_budget),
            currency.format(budget.remaining)
        ));
        if budget.is_over_budget() {
            output.push_str("  (over budget)");
        }
        output.push('\n');
    }

    output.push_str(&format!(
        "Timeline:  {} phases, {} of {} items completed ({:.0}%)\n",
        timeline.phases.len(),
        timeline.completed_items,
        timeline.total_items,
        timeline.completion_percentage()
    ));
    output.push_str(&format!(
        "Checklist: {} of {} done ({:.0}%)\n",
        checklist.completed,
        checklist.total(),
        checklist.completion_percentage()
    ));

    output
}

fn format_dates(record: &SourceRecord, dates: &DateFormatter) -> String {
    dates.format_range(record.start_date, record.end_date)
}
