use std::ops::Deref;

use tracing::trace;

use crate::core::Point;
use crate::error::{PlotError, PlotResult};

/// Indexed source of `(x, y)` pairs that can be copied into an [`XYs`].
pub trait XYer {
    fn len(&self) -> usize;

    fn xy(&self, index: usize) -> (f64, f64);

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl XYer for [Point] {
    fn len(&self) -> usize {
        <[Point]>::len(self)
    }

    fn xy(&self, index: usize) -> (f64, f64) {
        let point = self[index];
        (point.x, point.y)
    }
}

impl XYer for [(f64, f64)] {
    fn len(&self) -> usize {
        <[(f64, f64)]>::len(self)
    }

    fn xy(&self, index: usize) -> (f64, f64) {
        self[index]
    }
}

/// Owned, validated point sequence in data space.
///
/// Every coordinate is finite; insertion order is the traversal order of the
/// plotted line.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct XYs(Vec<Point>);

impl XYs {
    #[must_use]
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Copies points, rejecting any non-finite coordinate.
    pub fn try_from_points<I>(points: I) -> PlotResult<Self>
    where
        I: IntoIterator<Item = Point>,
    {
        let points: Vec<Point> = points.into_iter().collect();
        for (index, point) in points.iter().enumerate() {
            ensure_finite(index, *point)?;
        }
        trace!(count = points.len(), "copied xy points");
        Ok(Self(points))
    }

    pub fn try_from_pairs<I>(pairs: I) -> PlotResult<Self>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        Self::try_from_points(pairs.into_iter().map(Point::from))
    }

    /// Zips parallel coordinate slices; both must have the same length.
    pub fn try_from_xy_slices(xs: &[f64], ys: &[f64]) -> PlotResult<Self> {
        if xs.len() != ys.len() {
            return Err(PlotError::InvalidInput(format!(
                "x and y lengths differ: {} != {}",
                xs.len(),
                ys.len()
            )));
        }
        Self::try_from_pairs(xs.iter().copied().zip(ys.iter().copied()))
    }

    pub fn copy_from<T>(source: &T) -> PlotResult<Self>
    where
        T: XYer + ?Sized,
    {
        Self::try_from_pairs((0..source.len()).map(|index| source.xy(index)))
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Point] {
        &self.0
    }
}

impl Deref for XYs {
    type Target = [Point];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl TryFrom<Vec<Point>> for XYs {
    type Error = PlotError;

    fn try_from(points: Vec<Point>) -> PlotResult<Self> {
        Self::try_from_points(points)
    }
}

fn ensure_finite(index: usize, point: Point) -> PlotResult<()> {
    if point.is_finite() {
        return Ok(());
    }
    Err(PlotError::InvalidInput(format!(
        "point {index} has non-finite coordinates ({}, {})",
        point.x, point.y
    )))
}
