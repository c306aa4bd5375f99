//! Timeline and checklist sections

use super::template::{card, escape_html, placeholder, Tone};
use crate::format::{DateFormatter, NO_DATE};
use crate::reports::{ChecklistSummary, PhaseRow, TimelineSummary};

pub const NO_TIMELINE_DATA: &str = "No timeline data available";
pub const NO_PHASE_ITEMS: &str = "No items in this phase";
pub const NO_CHECKLIST_ITEMS: &str = "No checklist items available";

/// Render the timeline section with its progress cards
pub fn timeline_section(summary: &TimelineSummary, dates: &DateFormatter) -> String {
    let mut html = String::from("<section class=\"timeline\">\n<h2>Timeline</h2>\n");

    if summary.is_empty() {
        html.push_str(&placeholder(NO_TIMELINE_DATA));
        html.push_str("</section>\n");
        return html;
    }

    html.push_str("<div class=\"summary-cards\">\n");
    html.push_str(&card(
        "Phases",
        &summary.phases.len().to_string(),
        Tone::Neutral,
    ));
    html.push_str(&card(
        "Items",
        &summary.total_items.to_string(),
        Tone::Neutral,
    ));
    html.push_str(&card(
        "Completed",
        &format!(
            "{} ({:.0}%)",
            summary.completed_items,
            summary.completion_percentage()
        ),
        Tone::Neutral,
    ));
    html.push_str("</div>\n");

    for phase in &summary.phases {
        html.push_str(&phase_block(phase, dates));
    }

    html.push_str("</section>\n");
    html
}

fn phase_block(phase: &PhaseRow, dates: &DateFormatter) -> String {
    let mut html = format!(
        "<div class=\"phase\">\n<h3>{}</h3>\n<p class=\"dates\">{}</p>\n",
        escape_html(&phase.name),
        escape_html(&dates.format_range(phase.start_date, phase.end_date)),
    );

    if phase.items.is_empty() {
        html.push_str(&placeholder(NO_PHASE_ITEMS));
    }

    for item in &phase.items {
        html.push_str(&format!(
            "<div class=\"timeline-item {}\">\n<strong>{}</strong>\n<p class=\"meta\">{} &middot; {}</p>\n",
            item.status.css_class(),
            escape_html(&item.title),
            escape_html(&dates.format_or(item.date, NO_DATE)),
            item.status.label(),
        ));
        if !item.description.is_empty() {
            html.push_str(&format!(
                "<p class=\"description\">{}</p>\n",
                escape_html(&item.description)
            ));
        }
        html.push_str("</div>\n");
    }

    html.push_str("</div>\n");
    html
}

/// Render the checklist section
pub fn checklist_section(summary: &ChecklistSummary) -> String {
    let mut html = String::from("<section class=\"checklist-section\">\n<h2>Checklist</h2>\n");

    if summary.is_empty() {
        html.push_str(&placeholder(NO_CHECKLIST_ITEMS));
        html.push_str("</section>\n");
        return html;
    }

    html.push_str(&format!(
        "<p>{} of {} completed</p>\n<ul class=\"checklist\">\n",
        summary.completed,
        summary.total()
    ));

    for item in &summary.items {
        let (class, mark) = if item.completed {
            (" class=\"done\"", "&#10003;")
        } else {
            ("", "&#9744;")
        };
        html.push_str(&format!(
            "<li{}><span class=\"box\">{}</span><span class=\"title\">{}</span>",
            class,
            mark,
            escape_html(&item.title)
        ));
        if !item.description.is_empty() {
            html.push_str(&format!(
                "<p class=\"description\">{}</p>",
                escape_html(&item.description)
            ));
        }
        html.push_str("</li>\n");
    }

    html.push_str("</ul>\n</section>\n");
    html
}
