//! Inline SVG serialization for chart drawings

use super::template::escape_html;
use crate::charts::{Drawing, LegendEntry, Primitive, RenderedChart, TextAnchor};

/// Serialize a drawing as an inline `<svg>` element
pub fn drawing_to_svg(drawing: &Drawing) -> String {
    let mut svg = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w:.0}\" height=\"{h:.0}\" viewBox=\"0 0 {w:.2} {h:.2}\">\n",
        w = drawing.width,
        h = drawing.height,
    );

    for primitive in &drawing.primitives {
        svg.push_str("  ");
        svg.push_str(&primitive_to_svg(primitive));
        svg.push('\n');
    }

    svg.push_str("</svg>");
    svg
}

fn primitive_to_svg(primitive: &Primitive) -> String {
    match primitive {
        Primitive::Path { d, fill } => {
            format!(r##"<path d="{}" fill="{}" stroke="#ffffff" stroke-width="1"/>"##, d, fill)
        }
        Primitive::Circle {
            center,
            radius,
            fill,
        } => format!(
            r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{}"/>"#,
            center.x, center.y, radius, fill
        ),
        Primitive::Rect {
            x,
            y,
            width,
            height,
            fill,
        } => format!(
            r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{}"/>"#,
            x, y, width, height, fill
        ),
        Primitive::Line { from, to, stroke } => format!(
            r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-width="1"/>"#,
            from.x, from.y, to.x, to.y, stroke
        ),
        Primitive::Text {
            at,
            content,
            anchor,
            size,
        } => {
            let anchor = match anchor {
                TextAnchor::Start => "start",
                TextAnchor::Middle => "middle",
                TextAnchor::End => "end",
            };
            format!(
                r##"<text x="{:.2}" y="{:.2}" text-anchor="{}" font-size="{:.0}" fill="#374151">{}</text>"##,
                at.x,
                at.y,
                anchor,
                size,
                escape_html(content)
            )
        }
    }
}

fn legend_to_html(legend: &[LegendEntry]) -> String {
    let mut html = String::from("<ul class=\"legend\">");
    for entry in legend {
        html.push_str(&format!(
            "<li><span class=\"swatch\" style=\"background:{}\"></span>{}",
            entry.color,
            escape_html(&entry.label)
        ));
        if let Some(detail) = &entry.detail {
            html.push_str(&format!(" ({})", escape_html(detail)));
        }
        html.push_str("</li>");
    }
    html.push_str("</ul>");
    html
}

/// A titled chart block: SVG plus legend
pub fn chart_block(chart: &RenderedChart) -> String {
    format!(
        "<div class=\"chart\">\n<h3>{}</h3>\n{}\n{}\n</div>\n",
        escape_html(chart.title),
        drawing_to_svg(&chart.drawing),
        legend_to_html(&chart.legend)
    )
}
