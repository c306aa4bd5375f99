//! Chart geometry
//!
//! Pure functions that turn aggregated budget numbers into vector drawing
//! primitives. Nothing here does I/O or knows about markup; the document
//! assembler decides how a [`Drawing`] is serialized.
//!
//! - `pie`: allocation share per category
//! - `bar`: estimated vs. actual spend per category

pub mod bar;
pub mod pie;

pub use bar::{bar_chart, AxisTick, Bar, BarChart, BarGroupSpec, BarSeriesSpec, Series};
pub use pie::{pie_chart, PieChart, PieSlice, PieSliceSpec, PieSpec};

use crate::reports::BudgetSummary;

/// Slice and series colors, cycled by category position
pub const PALETTE: [&str; 10] = [
    "#4e79a7", "#f28e2b", "#e15759", "#76b7b2", "#59a14f", "#edc948", "#b07aa1", "#ff9da7",
    "#9c755f", "#bab0ac",
];

/// Color of the "estimated" bar series
pub const ESTIMATED_COLOR: &str = "#4e79a7";

/// Color of the "actual" bar series
pub const ACTUAL_COLOR: &str = "#f28e2b";

/// Color for a category position
pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// Pure description of a chart, independent of how it is drawn
#[derive(Debug, Clone, PartialEq)]
pub enum ChartSpec {
    Pie(PieSpec),
    Bar(BarSeriesSpec),
}

impl ChartSpec {
    /// The charts shown for a budget, in display order
    pub fn for_budget(summary: &BudgetSummary) -> Vec<ChartSpec> {
        vec![
            ChartSpec::Pie(PieSpec::from_summary(summary)),
            ChartSpec::Bar(BarSeriesSpec::from_summary(summary)),
        ]
    }
}

/// A 2-D point in drawing coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Horizontal text alignment relative to the anchor point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

/// One vector drawing instruction
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// A closed, filled path (SVG path data)
    Path { d: String, fill: &'static str },
    Circle {
        center: Point,
        radius: f64,
        fill: &'static str,
    },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: &'static str,
    },
    Line {
        from: Point,
        to: Point,
        stroke: &'static str,
    },
    Text {
        at: Point,
        content: String,
        anchor: TextAnchor,
        size: f64,
    },
}

/// A sized canvas of primitives
#[derive(Debug, Clone, PartialEq)]
pub struct Drawing {
    pub width: f64,
    pub height: f64,
    pub primitives: Vec<Primitive>,
}

impl Drawing {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            primitives: Vec::new(),
        }
    }

    pub fn push(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }
}

/// A legend swatch with its label
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub color: &'static str,
    pub label: String,
    /// Extra text after the label (e.g. "25.0%")
    pub detail: Option<String>,
}

/// A chart ready to embed: the drawing plus its legend
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedChart {
    pub title: &'static str,
    pub drawing: Drawing,
    pub legend: Vec<LegendEntry>,
}

/// Compute geometry for a chart spec
///
/// Returns `None` when there is nothing to draw (no categories, or no
/// positive allocation for a pie).
pub fn render_chart(
    spec: &ChartSpec,
    currency: &crate::format::CurrencyFormatter,
) -> Option<RenderedChart> {
    match spec {
        ChartSpec::Pie(pie) => {
            let chart = pie_chart(pie);
            if chart.slices.is_empty() {
                return None;
            }
            Some(RenderedChart {
                title: "Budget Allocation",
                drawing: chart.drawing,
                legend: chart.legend,
            })
        }
        ChartSpec::Bar(series) => {
            let chart = bar_chart(series, currency);
            if chart.bars.is_empty() {
                return None;
            }
            Some(RenderedChart {
                title: "Estimated vs. Actual",
                drawing: chart.drawing,
                legend: chart.legend,
            })
        }
    }
}
