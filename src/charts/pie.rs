//! Allocation pie chart
//!
//! Angles are measured clockwise from 12 o'clock. Internally a boundary
//! angle `a` maps onto the circle at `a - 90°` in standard position, which
//! with a downward y axis sweeps clockwise.

use super::{palette_color, Drawing, LegendEntry, Point, Primitive};
use crate::reports::BudgetSummary;

/// Canvas edge length
pub const PIE_SIZE: f64 = 300.0;

/// Circle radius
pub const PIE_RADIUS: f64 = 120.0;

const CENTER: Point = Point::new(PIE_SIZE / 2.0, PIE_SIZE / 2.0);

/// Input slice: a category's allocation
#[derive(Debug, Clone, PartialEq)]
pub struct PieSliceSpec {
    pub label: String,
    pub value: f64,
    pub color_index: usize,
}

/// Input for a pie chart
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PieSpec {
    pub slices: Vec<PieSliceSpec>,
}

impl PieSpec {
    /// One slice per category, valued by its allocation
    pub fn from_summary(summary: &BudgetSummary) -> Self {
        let slices = summary
            .categories
            .iter()
            .enumerate()
            .map(|(i, c)| PieSliceSpec {
                label: c.name.clone(),
                value: c.allocation.as_major(),
                color_index: i,
            })
            .collect();
        Self { slices }
    }
}

/// A computed slice
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub color: &'static str,
    pub percentage: f64,
    /// Degrees clockwise from 12 o'clock
    pub start_angle: f64,
    /// Degrees swept by this slice
    pub angle: f64,
    pub start: Point,
    pub end: Point,
    pub large_arc: bool,
}

impl PieSlice {
    /// Whether this slice is the whole circle
    pub fn is_full_circle(&self) -> bool {
        self.angle >= 360.0 - 1e-9
    }

    /// SVG path data for a filled wedge
    pub fn path_data(&self) -> String {
        format!(
            "M {:.2} {:.2} L {:.2} {:.2} A {:.2} {:.2} 0 {} 1 {:.2} {:.2} Z",
            CENTER.x,
            CENTER.y,
            self.start.x,
            self.start.y,
            PIE_RADIUS,
            PIE_RADIUS,
            u8::from(self.large_arc),
            self.end.x,
            self.end.y,
        )
    }
}

/// Computed pie chart
#[derive(Debug, Clone, PartialEq)]
pub struct PieChart {
    pub slices: Vec<PieSlice>,
    pub legend: Vec<LegendEntry>,
    pub drawing: Drawing,
}

/// Point on the pie's circle for an angle measured clockwise from 12 o'clock
pub fn point_on_circle(angle: f64) -> Point {
    let radians = (angle - 90.0).to_radians();
    Point::new(
        CENTER.x + PIE_RADIUS * radians.cos(),
        CENTER.y + PIE_RADIUS * radians.sin(),
    )
}

/// Compute slice geometry
///
/// Slices with a value of zero or less are skipped: they get no wedge, no
/// legend entry, and consume no angle.
pub fn pie_chart(spec: &PieSpec) -> PieChart {
    let total: f64 = spec
        .slices
        .iter()
        .filter(|s| s.value > 0.0)
        .map(|s| s.value)
        .sum();

    let mut chart = PieChart {
        slices: Vec::new(),
        legend: Vec::new(),
        drawing: Drawing::new(PIE_SIZE, PIE_SIZE),
    };

    if total <= 0.0 {
        return chart;
    }

    let mut start_angle = 0.0;
    for input in spec.slices.iter().filter(|s| s.value > 0.0) {
        let percentage = input.value / total * 100.0;
        let angle = percentage / 100.0 * 360.0;
        let color = palette_color(input.color_index);

        let slice = PieSlice {
            label: input.label.clone(),
            color,
            percentage,
            start_angle,
            angle,
            start: point_on_circle(start_angle),
            end: point_on_circle(start_angle + angle),
            large_arc: angle > 180.0,
        };

        if slice.is_full_circle() {
            // A 360° arc has identical endpoints and would draw nothing
            chart.drawing.push(Primitive::Circle {
                center: CENTER,
                radius: PIE_RADIUS,
                fill: color,
            });
        } else {
            chart.drawing.push(Primitive::Path {
                d: slice.path_data(),
                fill: color,
            });
        }

        chart.legend.push(LegendEntry {
            color,
            label: input.label.clone(),
            detail: Some(format!("{:.1}%", percentage)),
        });

        start_angle += angle;
        chart.slices.push(slice);
    }

    chart
}
