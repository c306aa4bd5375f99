//! Estimated vs. actual bar chart
//!
//! Each category gets a pair of bars (estimated, actual) and one bar-width
//! of spacing, split half before and half after the pair. The value axis
//! has a baseline plus five evenly spaced ticks, topping out 10% above the
//! largest value.

use super::{Drawing, LegendEntry, Point, Primitive, TextAnchor, ACTUAL_COLOR, ESTIMATED_COLOR};
use crate::format::CurrencyFormatter;
use crate::reports::BudgetSummary;

/// Canvas size
pub const BAR_CANVAS_WIDTH: f64 = 600.0;
pub const BAR_CANVAS_HEIGHT: f64 = 340.0;

/// Plot area inside the canvas
pub const CHART_LEFT: f64 = 80.0;
pub const CHART_TOP: f64 = 20.0;
pub const CHART_WIDTH: f64 = 500.0;
pub const CHART_HEIGHT: f64 = 250.0;

/// Number of ticks above the baseline
pub const TICK_COUNT: usize = 5;

/// Headroom factor applied to the largest value
pub const HEADROOM: f64 = 1.1;

const AXIS_COLOR: &str = "#6b7280";
const GRID_COLOR: &str = "#e5e7eb";
const LABEL_MAX_CHARS: usize = 14;

/// One category's pair of values
#[derive(Debug, Clone, PartialEq)]
pub struct BarGroupSpec {
    pub label: String,
    pub estimated: f64,
    pub actual: f64,
}

/// Input for the bar chart
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BarSeriesSpec {
    pub categories: Vec<BarGroupSpec>,
}

impl BarSeriesSpec {
    /// One group per category, valued by its item subtotals
    pub fn from_summary(summary: &BudgetSummary) -> Self {
        let categories = summary
            .categories
            .iter()
            .map(|c| BarGroupSpec {
                label: c.name.clone(),
                estimated: c.subtotal_estimated.as_major(),
                actual: c.subtotal_actual.as_major(),
            })
            .collect();
        Self { categories }
    }
}

/// Which series a bar belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Series {
    Estimated,
    Actual,
}

/// A computed bar
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub category: usize,
    pub series: Series,
    pub value: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// A value-axis tick
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub value: f64,
    pub y: f64,
    pub label: String,
}

/// A category label under a bar pair
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryLabel {
    pub text: String,
    pub center_x: f64,
}

/// Computed bar chart
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub max_value: f64,
    pub bar_width: f64,
    pub bars: Vec<Bar>,
    pub ticks: Vec<AxisTick>,
    pub labels: Vec<CategoryLabel>,
    pub legend: Vec<LegendEntry>,
    pub drawing: Drawing,
}

fn baseline_y() -> f64 {
    CHART_TOP + CHART_HEIGHT
}

fn scaled_height(value: f64, max_value: f64) -> f64 {
    if max_value > 0.0 && value > 0.0 {
        value / max_value * CHART_HEIGHT
    } else {
        0.0
    }
}

fn truncate_label(label: &str) -> String {
    if label.chars().count() <= LABEL_MAX_CHARS {
        label.to_string()
    } else {
        let head: String = label.chars().take(LABEL_MAX_CHARS - 1).collect();
        format!("{}…", head)
    }
}

/// Compute bar geometry
///
/// With no categories the chart is empty. When every value is zero the
/// scale is flat: all bars have zero height and every tick reads zero.
pub fn bar_chart(spec: &BarSeriesSpec, currency: &CurrencyFormatter) -> BarChart {
    let legend = vec![
        LegendEntry {
            color: ESTIMATED_COLOR,
            label: "Estimated".to_string(),
            detail: None,
        },
        LegendEntry {
            color: ACTUAL_COLOR,
            label: "Actual".to_string(),
            detail: None,
        },
    ];

    let mut chart = BarChart {
        max_value: 0.0,
        bar_width: 0.0,
        bars: Vec::new(),
        ticks: Vec::new(),
        labels: Vec::new(),
        legend,
        drawing: Drawing::new(BAR_CANVAS_WIDTH, BAR_CANVAS_HEIGHT),
    };

    let count = spec.categories.len();
    if count == 0 {
        return chart;
    }

    let largest = spec
        .categories
        .iter()
        .flat_map(|c| [c.estimated, c.actual])
        .fold(0.0_f64, f64::max);
    let max_value = largest * HEADROOM;
    let bar_width = CHART_WIDTH / (count as f64 * 3.0);
    chart.max_value = max_value;
    chart.bar_width = bar_width;

    // Grid and ticks
    for i in 0..=TICK_COUNT {
        let fraction = i as f64 / TICK_COUNT as f64;
        let value = fraction * max_value;
        let y = baseline_y() - fraction * CHART_HEIGHT;
        let label = currency.format_major(value);

        chart.drawing.push(Primitive::Line {
            from: Point::new(CHART_LEFT, y),
            to: Point::new(CHART_LEFT + CHART_WIDTH, y),
            stroke: GRID_COLOR,
        });
        chart.drawing.push(Primitive::Text {
            at: Point::new(CHART_LEFT - 8.0, y + 4.0),
            content: label.clone(),
            anchor: TextAnchor::End,
            size: 10.0,
        });
        chart.ticks.push(AxisTick { value, y, label });
    }

    // Bars and category labels
    for (i, group) in spec.categories.iter().enumerate() {
        let group_left = CHART_LEFT + i as f64 * 3.0 * bar_width + bar_width / 2.0;

        for (offset, series, value, fill) in [
            (0.0, Series::Estimated, group.estimated, ESTIMATED_COLOR),
            (bar_width, Series::Actual, group.actual, ACTUAL_COLOR),
        ] {
            let height = scaled_height(value, max_value);
            let bar = Bar {
                category: i,
                series,
                value,
                x: group_left + offset,
                y: baseline_y() - height,
                width: bar_width,
                height,
            };
            chart.drawing.push(Primitive::Rect {
                x: bar.x,
                y: bar.y,
                width: bar.width,
                height: bar.height,
                fill,
            });
            chart.bars.push(bar);
        }

        let center_x = group_left + bar_width;
        chart.drawing.push(Primitive::Text {
            at: Point::new(center_x, baseline_y() + 18.0),
            content: truncate_label(&group.label),
            anchor: TextAnchor::Middle,
            size: 10.0,
        });
        chart.labels.push(CategoryLabel {
            text: group.label.clone(),
            center_x,
        });
    }

    // Axes on top of the grid and bars
    chart.drawing.push(Primitive::Line {
        from: Point::new(CHART_LEFT, CHART_TOP),
        to: Point::new(CHART_LEFT, baseline_y()),
        stroke: AXIS_COLOR,
    });
    chart.drawing.push(Primitive::Line {
        from: Point::new(CHART_LEFT, baseline_y()),
        to: Point::new(CHART_LEFT + CHART_WIDTH, baseline_y()),
        stroke: AXIS_COLOR,
    });

    chart
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-6, "{} != {}", a, b);
    }

    fn group(label: &str, estimated: f64, actual: f64) -> BarGroupSpec {
        BarGroupSpec {
            label: label.to_string(),
            estimated,
            actual,
        }
    }

    #[test]
    fn test_scale_and_heights() {
        let spec = BarSeriesSpec {
            categories: vec![group("Lodging", 1000.0, 800.0), group("Food", 400.0, 500.0)],
        };
        let chart = bar_chart(&spec, &CurrencyFormatter::default());

        assert_close(chart.max_value, 1100.0);
        assert_close(chart.bar_width, CHART_WIDTH / 6.0);
        assert_eq!(chart.bars.len(), 4);

        let lodging_estimated = &chart.bars[0];
        assert_eq!(lodging_estimated.series, Series::Estimated);
        assert_close(lodging_estimated.height, 1000.0 / 1100.0 * CHART_HEIGHT);
        // Anchored at the bottom edge
        assert_close(
            lodging_estimated.y + lodging_estimated.height,
            CHART_TOP + CHART_HEIGHT,
        );
    }

    #[test]
    fn test_bar_positions() {
        let spec = BarSeriesSpec {
            categories: vec![group("A", 10.0, 5.0), group("B", 3.0, 1.0)],
        };
        let chart = bar_chart(&spec, &CurrencyFormatter::default());
        let w = chart.bar_width;

        assert_close(chart.bars[0].x, CHART_LEFT + w / 2.0);
        assert_close(chart.bars[1].x, CHART_LEFT + w * 1.5);
        assert_close(chart.bars[2].x, CHART_LEFT + w * 3.5);
        assert_close(chart.labels[0].center_x, CHART_LEFT + w * 1.5);
        assert_close(chart.labels[1].center_x, CHART_LEFT + w * 4.5);
        // Last pair plus its trailing half gap ends at the plot edge
        assert_close(chart.bars[3].x + w + w / 2.0, CHART_LEFT + CHART_WIDTH);
    }

    #[test]
    fn test_ticks() {
        let spec = BarSeriesSpec {
            categories: vec![group("A", 500.0, 0.0)],
        };
        let chart = bar_chart(&spec, &CurrencyFormatter::default());

        assert_eq!(chart.ticks.len(), TICK_COUNT + 1);
        assert_close(chart.ticks[0].value, 0.0);
        assert_close(chart.ticks[0].y, CHART_TOP + CHART_HEIGHT);
        assert_close(chart.ticks[5].value, 550.0);
        assert_close(chart.ticks[5].y, CHART_TOP);
        assert_eq!(chart.ticks[5].label, "$550.00");
        assert_eq!(chart.ticks[1].label, "$110.00");
    }

    #[test]
    fn test_all_zero_is_flat() {
        let spec = BarSeriesSpec {
            categories: vec![group("A", 0.0, 0.0), group("B", 0.0, 0.0)],
        };
        let chart = bar_chart(&spec, &CurrencyFormatter::default());

        assert_close(chart.max_value, 0.0);
        assert!(chart.bars.iter().all(|b| b.height == 0.0));
        assert!(chart.ticks.iter().all(|t| t.label == "$0.00"));
        assert!(!chart.drawing.is_empty());
    }

    #[test]
    fn test_no_categories() {
        let chart = bar_chart(&BarSeriesSpec::default(), &CurrencyFormatter::default());
        assert!(chart.bars.is_empty());
        assert!(chart.drawing.is_empty());
        assert_eq!(chart.legend.len(), 2);
    }

    #[test]
    fn test_long_labels_truncated_in_drawing() {
        assert_eq!(truncate_label("Transportation & Transfers"), "Transportatio…");
        assert_eq!(truncate_label("Food"), "Food");
    }
}
