use tracing::warn;

use crate::core::{Path, Point, Rect, Viewport, clip_polygon, clip_polyline};
use crate::render::{Color, FillPrimitive, LineStyle, RenderFrame, StrokePrimitive};

/// Drawing area that records fill and stroke commands into a [`RenderFrame`].
///
/// `bounds` is the visible device rectangle of this canvas; plot elements
/// map their data into it and clip their lines against it. Several canvases
/// (plot area, legend thumbnails) can target the same viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    bounds: Rect,
    frame: RenderFrame,
}

impl Canvas {
    /// Canvas covering the whole viewport.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self::with_bounds(viewport, viewport.bounds())
    }

    #[must_use]
    pub fn with_bounds(viewport: Viewport, bounds: Rect) -> Self {
        Self {
            bounds,
            frame: RenderFrame::new(viewport),
        }
    }

    /// Sub-canvas over `bounds` that records into an empty frame of the same viewport.
    #[must_use]
    pub fn sub_canvas(&self, bounds: Rect) -> Self {
        Self::with_bounds(self.frame.viewport, bounds)
    }

    /// Appends everything recorded by `other` to this canvas.
    pub fn append(&mut self, other: Canvas) {
        let frame = other.into_frame();
        self.frame.fills.extend(frame.fills);
        self.frame.strokes.extend(frame.strokes);
    }

    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    #[must_use]
    pub fn center(&self) -> Point {
        self.bounds.center()
    }

    #[must_use]
    pub fn frame(&self) -> &RenderFrame {
        &self.frame
    }

    #[must_use]
    pub fn into_frame(self) -> RenderFrame {
        self.frame
    }

    /// Records a solid fill. Empty or non-finite paths are dropped.
    pub fn fill(&mut self, path: Path, color: Color) {
        if !drawable(&path, "fill") {
            return;
        }
        self.frame.fills.push(FillPrimitive::new(path, color));
    }

    /// Records a stroke. Empty or non-finite paths are dropped.
    pub fn stroke(&mut self, path: Path, style: &LineStyle) {
        if !drawable(&path, "stroke") {
            return;
        }
        self.frame
            .strokes
            .push(StrokePrimitive::new(path, style.clone()));
    }

    /// Fills the closed polygon through `polygon`; empty input draws nothing.
    pub fn fill_polygon(&mut self, color: Color, polygon: &[Point]) {
        let Some((first, rest)) = polygon.split_first() else {
            return;
        };
        let mut path = Path::with_capacity(polygon.len() + 1);
        path.move_to(*first);
        for point in rest {
            path.line_to(*point);
        }
        path.close();
        self.fill(path, color);
    }

    /// Strokes a single straight line.
    pub fn stroke_line2(&mut self, style: &LineStyle, x1: f64, y1: f64, x2: f64, y2: f64) {
        let mut path = Path::with_capacity(2);
        path.move_to(Point::new(x1, y1));
        path.line_to(Point::new(x2, y2));
        self.stroke(path, style);
    }

    /// Splits `line` into the fragments visible inside the canvas bounds.
    #[must_use]
    pub fn clip_lines_xy(&self, line: &[Point]) -> Vec<Vec<Point>> {
        clip_polyline(line, self.bounds)
    }

    /// Clips `polygon` to the canvas bounds.
    #[must_use]
    pub fn clip_polygon_xy(&self, polygon: &[Point]) -> Vec<Point> {
        clip_polygon(polygon, self.bounds)
    }
}

fn drawable(path: &Path, kind: &'static str) -> bool {
    if path.is_empty() {
        return false;
    }
    if !path.is_finite() {
        warn!(kind, commands = path.commands().len(), "dropping non-finite path");
        return false;
    }
    true
}
