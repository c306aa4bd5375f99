//! Document assembly
//!
//! Builds the printable HTML handed to the renderer. Every document has the
//! same frame: header with the generation stamp, the kind-specific body and
//! a footer. Charts are computed here only when visuals were requested.
//!
//! - `budget`: summary cards, charts, category tables
//! - `timeline`: phases and checklist
//! - `experience`: the trip overview that opens the combined document

pub mod budget;
pub mod experience;
pub mod svg;
pub mod template;
pub mod timeline;

pub use template::escape_html;

use crate::charts::{render_chart, ChartSpec, RenderedChart};
use crate::format::Formatters;
use crate::models::{ExportKind, OutputFormat, SourceRecord};
use crate::reports::{BudgetSummary, ChecklistSummary, TimelineSummary};

/// Printable markup plus the name the finished file should carry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembledDocument {
    pub markup: String,
    pub filename: String,
}

/// Download name for an export
///
/// The display name is lowercased, whitespace runs become `_`, and
/// characters that would break a `Content-Disposition` header are dropped.
pub fn export_filename(display_name: &str, kind: ExportKind, format: OutputFormat) -> String {
    let cleaned: String = display_name
        .chars()
        .filter(|c| !matches!(c, '"' | '/' | '\\'))
        .collect();
    let mut stem = cleaned
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .to_lowercase();
    if stem.is_empty() {
        stem = "trip".to_string();
    }
    format!("{}_{}.{}", stem, kind.as_str(), format.extension())
}

/// Assemble a document stamped with the current time
pub fn assemble(
    record: &SourceRecord,
    kind: ExportKind,
    include_visuals: bool,
    formatters: &Formatters,
) -> AssembledDocument {
    let generated = formatters.dates.now_stamp();
    assemble_with_stamp(record, kind, include_visuals, formatters, &generated)
}

/// Assemble a document with an explicit "generated on" stamp
pub fn assemble_with_stamp(
    record: &SourceRecord,
    kind: ExportKind,
    include_visuals: bool,
    formatters: &Formatters,
    generated: &str,
) -> AssembledDocument {
    let name = record.display_name();
    let mut body = template::header(kind.title(), name, generated);

    match kind {
        ExportKind::Budget => {
            let summary = BudgetSummary::generate(&record.budget);
            let charts = charts_for(&summary, include_visuals, formatters);
            body.push_str(&budget::budget_section(
                &summary,
                &charts,
                &formatters.currency,
            ));
        }
        ExportKind::Timeline => {
            let summary = TimelineSummary::generate(&record.timeline);
            body.push_str(&timeline::timeline_section(&summary, &formatters.dates));
        }
        ExportKind::Experience => {
            let budget_summary = BudgetSummary::generate(&record.budget);
            let charts = charts_for(&budget_summary, include_visuals, formatters);
            // The overview is the summary block; breaks go between body sections
            body.push_str(&experience::overview_section(record, &formatters.dates));
            let sections = [
                timeline::checklist_section(&ChecklistSummary::generate(&record.checklist)),
                timeline::timeline_section(
                    &TimelineSummary::generate(&record.timeline),
                    &formatters.dates,
                ),
                budget::budget_section(&budget_summary, &charts, &formatters.currency),
            ];
            for (i, section) in sections.iter().enumerate() {
                if i > 0 {
                    body.push_str(template::PAGE_BREAK);
                    body.push('\n');
                }
                body.push_str(section);
            }
        }
    }

    body.push_str(&template::footer(name));

    let title = format!("{} - {}", kind.title(), name);
    let document = AssembledDocument {
        markup: template::page(&title, &body),
        filename: export_filename(name, kind, OutputFormat::Pdf),
    };
    log::debug!(
        "Assembled {} document for '{}' ({} bytes)",
        kind,
        record.id,
        document.markup.len()
    );
    document
}

fn charts_for(
    summary: &BudgetSummary,
    include_visuals: bool,
    formatters: &Formatters,
) -> Vec<RenderedChart> {
    if !include_visuals {
        return Vec::new();
    }
    ChartSpec::for_budget(summary)
        .iter()
        .filter_map(|spec| render_chart(spec, &formatters.currency))
        .collect()
}
