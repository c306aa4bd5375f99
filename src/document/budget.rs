//! Budget section: summary cards, optional charts and per-category tables

use super::svg::chart_block;
use super::template::{card, escape_html, placeholder, Tone};
use crate::charts::RenderedChart;
use crate::format::CurrencyFormatter;
use crate::reports::{BudgetSummary, CategoryRow};

/// Shown in place of the whole section when there are no categories
pub const NO_BUDGET_DATA: &str = "No budget data available";

/// Shown under a category heading when it has no items
pub const NO_CATEGORY_ITEMS: &str = "No items in this category";

/// Render the budget section
///
/// `charts` is empty unless visuals were requested.
pub fn budget_section(
    summary: &BudgetSummary,
    charts: &[RenderedChart],
    currency: &CurrencyFormatter,
) -> String {
    let mut html = String::from("<section class=\"budget\">\n<h2>Budget</h2>\n");

    if summary.is_empty() {
        html.push_str(&placeholder(NO_BUDGET_DATA));
        html.push_str("</section>\n");
        return html;
    }

    html.push_str(&summary_cards(summary, currency));

    if !charts.is_empty() {
        html.push_str("<div class=\"charts\">\n");
        for chart in charts {
            html.push_str(&chart_block(chart));
        }
        html.push_str("</div>\n");
    }

    html.push_str("<h2>Categories</h2>\n");
    for category in &summary.categories {
        html.push_str(&category_table(category, currency));
    }

    html.push_str("</section>\n");
    html
}

fn summary_cards(summary: &BudgetSummary, currency: &CurrencyFormatter) -> String {
    let remaining_tone = if summary.remaining.is_negative() {
        Tone::Negative
    } else if summary.remaining.is_positive() {
        Tone::Positive
    } else {
        Tone::Neutral
    };

    let mut html = String::from("<div class=\"summary-cards\">\n");
    html.push_str(&card(
        "Total Budget",
        &currency.format(summary.total_budget),
        Tone::Neutral,
    ));
    html.push_str(&card(
        "Allocated",
        &currency.format(summary.total_allocated),
        Tone::Neutral,
    ));
    html.push_str(&card(
        "Estimated",
        &currency.format(summary.total_estimated),
        Tone::Neutral,
    ));
    html.push_str(&card(
        "Actual",
        &currency.format(summary.total_actual),
        Tone::Neutral,
    ));
    html.push_str(&card(
        "Remaining",
        &currency.format(summary.remaining),
        remaining_tone,
    ));
    html.push_str("</div>\n");
    html
}

fn category_table(category: &CategoryRow, currency: &CurrencyFormatter) -> String {
    let mut html = format!(
        "<div class=\"category\">\n<h3>{}</h3>\n",
        escape_html(&category.name)
    );

    if category.items.is_empty() {
        html.push_str(&placeholder(NO_CATEGORY_ITEMS));
        html.push_str(&format!(
            "<p class=\"allocation\">Allocated: {}</p>\n</div>\n",
            currency.format(category.allocation)
        ));
        return html;
    }

    html.push_str(
        "<table>\n<thead><tr><th>Item</th><th class=\"amount\">Estimated</th>\
         <th class=\"amount\">Actual</th><th>Status</th><th>Notes</th></tr></thead>\n<tbody>\n",
    );

    for item in &category.items {
        let actual = if item.has_actual {
            currency.format(item.actual)
        } else {
            "-".to_string()
        };
        html.push_str(&format!(
            "<tr><td>{}</td><td class=\"amount\">{}</td><td class=\"amount\">{}</td><td>{}</td><td>{}</td></tr>\n",
            escape_html(&item.name),
            currency.format(item.estimated),
            actual,
            item.status.label(),
            escape_html(&item.notes),
        ));
    }

    html.push_str(&format!(
        "<tr class=\"subtotal\"><td>Subtotal (allocated {})</td><td class=\"amount\">{}</td><td class=\"amount\">{}</td><td></td><td></td></tr>\n",
        currency.format(category.allocation),
        currency.format(category.subtotal_estimated),
        currency.format(category.subtotal_actual),
    ));
    html.push_str("</tbody>\n</table>\n</div>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::{render_chart, ChartSpec};
    use crate::models::{Budget, BudgetCategory, BudgetItem, ItemStatus, Money};

    fn sample_summary() -> BudgetSummary {
        let budget = Budget {
            currency: "USD".into(),
            total_budget: Some(Money::from_cents(200000)),
            categories: vec![
                BudgetCategory::new("Lodging", Money::from_cents(120000)).with_item(
                    BudgetItem::new("Hotel <Central>", Money::from_cents(90000))
                        .with_actual(Money::from_cents(95000))
                        .with_status(ItemStatus::Paid),
                ),
                BudgetCategory::new("Activities", Money::from_cents(30000)),
            ],
        };
        BudgetSummary::generate(&budget)
    }

    #[test]
    fn test_empty_budget_placeholder() {
        let summary = BudgetSummary::generate(&Budget::default());
        let html = budget_section(&summary, &[], &CurrencyFormatter::default());

        assert!(html.contains("No budget data available"));
        assert!(!html.contains("<table>"));
    }

    #[test]
    fn test_tables_and_subtotals() {
        let html = budget_section(&sample_summary(), &[], &CurrencyFormatter::default());

        assert!(html.contains("Hotel &lt;Central&gt;"));
        assert!(html.contains("<td class=\"amount\">$900.00</td><td class=\"amount\">$950.00</td><td>Paid</td>"));
        assert!(html.contains("Subtotal (allocated $1,200.00)"));
        assert!(html.contains("Remaining"));
        assert!(html.contains("card positive"));
    }

    #[test]
    fn test_empty_category_placeholder() {
        let html = budget_section(&sample_summary(), &[], &CurrencyFormatter::default());
        assert!(html.contains("No items in this category"));
        assert!(html.contains("Allocated: $300.00"));
    }

    #[test]
    fn test_charts_only_when_given() {
        let summary = sample_summary();
        let currency = CurrencyFormatter::default();

        let without = budget_section(&summary, &[], &currency);
        assert!(!without.contains("<svg"));

        let charts: Vec<_> = ChartSpec::for_budget(&summary)
            .iter()
            .filter_map(|spec| render_chart(spec, &currency))
            .collect();
        let with = budget_section(&summary, &charts, &currency);
        assert_eq!(with.matches("<svg").count(), 2);
        assert!(with.contains("Budget Allocation"));
        assert!(with.contains("Estimated vs. Actual"));
    }
}
