//! Shared markup: stylesheet, page shell, header, footer and small helpers
//!
//! All three report kinds use the same shell so the renderer sees one
//! stylesheet. Record-provided text must go through [`escape_html`] before
//! it lands in markup.

/// Forces the renderer to start a new page
pub const PAGE_BREAK: &str = r#"<div class="page-break"></div>"#;

const CSS: &str = r#"
* { margin: 0; padding: 0; box-sizing: border-box; }
body {
    font-family: -apple-system, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
    color: #111827;
    font-size: 12px;
    line-height: 1.5;
    padding: 32px;
}
h1 { font-size: 24px; margin-bottom: 4px; }
h2 { font-size: 18px; margin: 24px 0 12px; border-bottom: 2px solid #2563eb; padding-bottom: 4px; }
h3 { font-size: 14px; margin: 16px 0 8px; }
.report-header { border-bottom: 1px solid #e5e7eb; padding-bottom: 12px; margin-bottom: 16px; }
.report-header .subtitle { color: #374151; font-size: 14px; }
.report-header .generated { color: #6b7280; font-size: 11px; }
.summary-cards { display: flex; flex-wrap: wrap; gap: 12px; margin: 12px 0; }
.card { border: 1px solid #e5e7eb; border-radius: 6px; padding: 10px 14px; min-width: 140px; }
.card h4 { font-size: 11px; color: #6b7280; text-transform: uppercase; font-weight: 600; }
.card .value { font-size: 16px; font-weight: 600; }
.card.negative .value { color: #dc2626; }
.card.positive .value { color: #16a34a; }
table { width: 100%; border-collapse: collapse; margin: 8px 0 16px; }
th, td { text-align: left; padding: 6px 8px; border-bottom: 1px solid #e5e7eb; }
th { background: #f3f4f6; font-size: 11px; text-transform: uppercase; color: #374151; }
td.amount, th.amount { text-align: right; white-space: nowrap; }
tr.subtotal td { font-weight: 600; background: #f9fafb; }
.charts { display: flex; flex-wrap: wrap; gap: 24px; margin: 12px 0; page-break-inside: avoid; }
.chart { page-break-inside: avoid; }
.chart h3 { margin-top: 0; }
.legend { list-style: none; margin-top: 8px; }
.legend li { display: inline-block; margin-right: 12px; font-size: 11px; }
.swatch { display: inline-block; width: 10px; height: 10px; margin-right: 4px; vertical-align: middle; }
.placeholder { color: #6b7280; font-style: italic; margin: 8px 0; }
.phase { margin-bottom: 16px; page-break-inside: avoid; }
.phase .dates { color: #6b7280; font-size: 11px; }
.timeline-item { border-left: 3px solid #d1d5db; padding: 4px 10px; margin: 6px 0; }
.timeline-item.completed { border-left-color: #16a34a; }
.timeline-item.in-progress { border-left-color: #d97706; }
.timeline-item .meta { color: #6b7280; font-size: 11px; }
.checklist { list-style: none; }
.checklist li { padding: 4px 0; border-bottom: 1px solid #f3f4f6; }
.checklist .box { display: inline-block; width: 14px; font-weight: 600; }
.checklist li.done .title { text-decoration: line-through; color: #6b7280; }
.description { color: #374151; font-size: 11px; margin-left: 18px; }
.overview dt { font-weight: 600; color: #374151; }
.overview dd { margin: 0 0 8px 0; }
.page-break { page-break-before: always; }
.report-footer { margin-top: 32px; padding-top: 8px; border-top: 1px solid #e5e7eb; color: #9ca3af; font-size: 10px; text-align: center; }
"#;

/// Escape text for use in element content and attribute values
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Wrap a body in a complete HTML document
pub fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<title>{title}</title>
<style>{css}</style>
</head>
<body>
{body}
</body>
</html>
"#,
        title = escape_html(title),
        css = CSS,
        body = body,
    )
}

/// Title block with the generation stamp
pub fn header(report_title: &str, trip_name: &str, generated: &str) -> String {
    format!(
        r#"<header class="report-header">
<h1>{}</h1>
<p class="subtitle">{}</p>
<p class="generated">Generated on {}</p>
</header>
"#,
        escape_html(report_title),
        escape_html(trip_name),
        escape_html(generated),
    )
}

pub fn footer(trip_name: &str) -> String {
    format!(
        "<footer class=\"report-footer\">{} &middot; generated by tripreport</footer>\n",
        escape_html(trip_name)
    )
}

/// Tone of a summary card value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Neutral,
    Positive,
    Negative,
}

/// A labelled figure in the summary block
pub fn card(label: &str, value: &str, tone: Tone) -> String {
    let class = match tone {
        Tone::Neutral => "card",
        Tone::Positive => "card positive",
        Tone::Negative => "card negative",
    };
    format!(
        "<div class=\"{}\"><h4>{}</h4><p class=\"value\">{}</p></div>\n",
        class,
        escape_html(label),
        escape_html(value)
    )
}

/// Explicit "nothing here" sentence
pub fn placeholder(message: &str) -> String {
    format!("<p class=\"placeholder\">{}</p>\n", escape_html(message))
}
