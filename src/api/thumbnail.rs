use crate::core::{Point, Rect};
use crate::render::{Canvas, Color, LineStyle};

/// Top edge of the legend fill box.
///
/// The fill reaches the vertical midpoint when a line is drawn through it,
/// so fill and line together read as a step; otherwise it covers the box.
#[must_use]
pub fn thumbnail_fill_top(bounds: Rect, line_present: bool) -> f64 {
    if line_present {
        bounds.center().y
    } else {
        bounds.max.y
    }
}

/// Draws the legend icon of a step series onto `canvas`.
///
/// Independent of plotted data: a fill box and/or one horizontal line
/// through the vertical center of the canvas.
pub fn render_step_thumbnail(
    canvas: &mut Canvas,
    fill_color: Option<Color>,
    line_style: Option<&LineStyle>,
) {
    let bounds = canvas.bounds();

    if let Some(color) = fill_color {
        let top = thumbnail_fill_top(bounds, line_style.is_some());
        let outline = [
            Point::new(bounds.min.x, bounds.min.y),
            Point::new(bounds.min.x, top),
            Point::new(bounds.max.x, top),
            Point::new(bounds.max.x, bounds.min.y),
        ];
        let polygon = canvas.clip_polygon_xy(&outline);
        canvas.fill_polygon(color, &polygon);
    }

    if let Some(style) = line_style {
        let y = canvas.center().y;
        canvas.stroke_line2(style, bounds.min.x, y, bounds.max.x, y);
    }
}
