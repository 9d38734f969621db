use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Axis, DataRange, Point, Rect};
use crate::error::{PlotError, PlotResult};
use crate::render::Canvas;

use super::DataRanger;

/// Axis extents a plot element is drawn against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotContext {
    pub x: Axis,
    pub y: Axis,
}

impl PlotContext {
    #[must_use]
    pub fn new(x: Axis, y: Axis) -> Self {
        Self { x, y }
    }

    /// Fits linear axes around the union of every element's data range.
    pub fn fit(elements: &[&dyn DataRanger]) -> PlotResult<Self> {
        let range = elements
            .iter()
            .fold(DataRange::EMPTY, |range, element| {
                range.union(element.data_range())
            });
        if range.is_empty() {
            return Err(PlotError::InvalidData(
                "cannot fit axes to empty data".to_owned(),
            ));
        }
        debug!(
            x_min = range.x_min,
            x_max = range.x_max,
            y_min = range.y_min,
            y_max = range.y_max,
            "fitted plot axes"
        );
        Ok(Self {
            x: Axis::fitted(range.x_min, range.x_max)?,
            y: Axis::fitted(range.y_min, range.y_max)?,
        })
    }

    /// Data-to-device transforms for `canvas`.
    #[must_use]
    pub fn transforms(&self, canvas: &Canvas) -> Transforms {
        Transforms {
            x_axis: self.x,
            y_axis: self.y,
            bounds: canvas.bounds(),
        }
    }

    /// Device y of the fill baseline: the zero line when the y-axis contains
    /// zero, otherwise the axis end nearest to zero.
    #[must_use]
    pub fn baseline_y(&self, canvas: &Canvas) -> f64 {
        let baseline = if self.y.min() > 0.0 {
            self.y.min()
        } else if self.y.max() < 0.0 {
            self.y.max()
        } else {
            0.0
        };
        self.transforms(canvas).y(baseline)
    }
}

/// Data-to-device coordinate mapping for one canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transforms {
    x_axis: Axis,
    y_axis: Axis,
    bounds: Rect,
}

impl Transforms {
    #[must_use]
    pub fn x(&self, value: f64) -> f64 {
        interpolate(self.bounds.min.x, self.bounds.max.x, self.x_axis.normalize(value))
    }

    #[must_use]
    pub fn y(&self, value: f64) -> f64 {
        interpolate(self.bounds.min.y, self.bounds.max.y, self.y_axis.normalize(value))
    }

    #[must_use]
    pub fn point(&self, point: Point) -> Point {
        Point::new(self.x(point.x), self.y(point.y))
    }
}

/// Device coordinate at fraction `t` between `low` and `high`.
///
/// Exact at both ends; fractions in `[0, 1]` stay within `[low, high]`.
fn interpolate(low: f64, high: f64, t: f64) -> f64 {
    let value = low * (1.0 - t) + high * t;
    if (0.0..=1.0).contains(&t) {
        value.max(low).min(high)
    } else {
        value
    }
}
