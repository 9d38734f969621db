use tracing::debug;

use crate::core::{
    DataRange, Point, StepGeometry, StepKind, XYs, build_step_geometry, step_data_range,
};
use crate::error::PlotResult;
use crate::render::{Canvas, Color, LineStyle};

use super::{
    DataRanger, PlotContext, Plotter, StepConfig, Thumbnailer, render_step_thumbnail,
};

/// Step plot element: a line connecting points with horizontal and vertical
/// segments, optionally filled down to the x-axis.
///
/// The element is read-only while drawing; every draw pass maps its points
/// into a fresh device-space buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    xys: XYs,
    step_kind: StepKind,
    line_style: Option<LineStyle>,
    fill_color: Option<Color>,
}

impl Step {
    /// Step with the default line style, `Pre` steps and no fill.
    #[must_use]
    pub fn new(xys: XYs) -> Self {
        Self::from_config(xys, StepConfig::default())
    }

    #[must_use]
    pub fn from_config(xys: XYs, config: StepConfig) -> Self {
        Self {
            xys,
            step_kind: config.step_kind,
            line_style: config.line_style,
            fill_color: config.fill_color,
        }
    }

    /// Validates caller pairs and builds a default step element.
    pub fn try_from_pairs<I>(pairs: I) -> PlotResult<Self>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        Ok(Self::new(XYs::try_from_pairs(pairs)?))
    }

    #[must_use]
    pub fn with_step_kind(mut self, step_kind: StepKind) -> Self {
        self.step_kind = step_kind;
        self
    }

    #[must_use]
    pub fn with_line_style(mut self, line_style: LineStyle) -> Self {
        self.line_style = Some(line_style);
        self
    }

    #[must_use]
    pub fn without_line(mut self) -> Self {
        self.line_style = None;
        self
    }

    #[must_use]
    pub fn with_fill_color(mut self, fill_color: Color) -> Self {
        self.fill_color = Some(fill_color);
        self
    }

    #[must_use]
    pub fn without_fill(mut self) -> Self {
        self.fill_color = None;
        self
    }

    #[must_use]
    pub fn xys(&self) -> &XYs {
        &self.xys
    }

    #[must_use]
    pub fn step_kind(&self) -> StepKind {
        self.step_kind
    }

    #[must_use]
    pub fn line_style(&self) -> Option<&LineStyle> {
        self.line_style.as_ref()
    }

    #[must_use]
    pub fn fill_color(&self) -> Option<Color> {
        self.fill_color
    }

    /// Current styling as a serializable config.
    #[must_use]
    pub fn config(&self) -> StepConfig {
        StepConfig {
            step_kind: self.step_kind,
            line_style: self.line_style.clone(),
            fill_color: self.fill_color,
        }
    }

    /// Device-space geometry this element would draw onto `canvas`.
    ///
    /// The fill polygon is only built with a fill color and the stroke only
    /// with a line style.
    #[must_use]
    pub fn project_geometry(&self, canvas: &Canvas, plot: &PlotContext) -> StepGeometry {
        let transforms = plot.transforms(canvas);
        let device: Vec<Point> = self.xys.iter().map(|p| transforms.point(*p)).collect();

        let fill_baseline = self.fill_color.map(|_| plot.baseline_y(canvas));
        let stroke_clip = self.line_style.as_ref().map(|_| canvas.bounds());
        build_step_geometry(&device, self.step_kind, fill_baseline, stroke_clip)
    }
}

impl Plotter for Step {
    fn plot(&self, canvas: &mut Canvas, plot: &PlotContext) {
        let geometry = self.project_geometry(canvas, plot);
        debug!(
            points = self.xys.len(),
            step_kind = ?self.step_kind,
            filled = geometry.fill_polygon.is_some(),
            strokes = geometry.stroke_paths.len(),
            "plot step series"
        );

        if let (Some(polygon), Some(color)) = (geometry.fill_polygon, self.fill_color) {
            canvas.fill(polygon, color);
        }
        if let Some(style) = &self.line_style {
            for path in geometry.stroke_paths {
                canvas.stroke(path, style);
            }
        }
    }
}

impl DataRanger for Step {
    fn data_range(&self) -> DataRange {
        step_data_range(&self.xys, self.fill_color.is_some())
    }
}

impl Thumbnailer for Step {
    fn thumbnail(&self, canvas: &mut Canvas) {
        render_step_thumbnail(canvas, self.fill_color, self.line_style.as_ref());
    }
}
