use serde::{Deserialize, Serialize};

use crate::core::Point;

/// Bounding box of plotted data in data space.
///
/// The empty range uses `+inf` minimums and `-inf` maximums so that
/// unions and `include_*` calls need no special casing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataRange {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl DataRange {
    pub const EMPTY: Self = Self {
        x_min: f64::INFINITY,
        x_max: f64::NEG_INFINITY,
        y_min: f64::INFINITY,
        y_max: f64::NEG_INFINITY,
    };

    #[must_use]
    pub const fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// True when no point contributed to the range on either axis.
    #[must_use]
    pub fn is_empty(self) -> bool {
        !(self.x_min <= self.x_max && self.y_min <= self.y_max)
    }

    #[must_use]
    pub fn include_point(self, point: Point) -> Self {
        Self {
            x_min: self.x_min.min(point.x),
            x_max: self.x_max.max(point.x),
            y_min: self.y_min.min(point.y),
            y_max: self.y_max.max(point.y),
        }
    }

    #[must_use]
    pub fn include_y(self, value: f64) -> Self {
        Self {
            y_min: self.y_min.min(value),
            y_max: self.y_max.max(value),
            ..self
        }
    }

    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self {
            x_min: self.x_min.min(other.x_min),
            x_max: self.x_max.max(other.x_max),
            y_min: self.y_min.min(other.y_min),
            y_max: self.y_max.max(other.y_max),
        }
    }
}

impl Default for DataRange {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Tight bounding box of `points`.
#[must_use]
pub fn xy_range(points: &[Point]) -> DataRange {
    points
        .iter()
        .fold(DataRange::EMPTY, |range, point| range.include_point(*point))
}

/// Data range of a step series.
///
/// With `fill_enabled` the y-range is widened to contain zero so the fill
/// baseline is never clipped by the chart's own axis limits.
#[must_use]
pub fn step_data_range(points: &[Point], fill_enabled: bool) -> DataRange {
    let range = xy_range(points);
    if fill_enabled {
        range.include_y(0.0)
    } else {
        range
    }
}

#[cfg(test)]
mod tests {
    use super::{DataRange, step_data_range, xy_range};
    use crate::core::Point;

    #[test]
    fn empty_input_keeps_the_empty_sentinel() {
        let range = xy_range(&[]);
        assert_eq!(range, DataRange::EMPTY);
        assert!(range.is_empty());
    }

    #[test]
    fn fill_widening_on_empty_input_only_touches_y() {
        let range = step_data_range(&[], true);
        assert_eq!(range.y_min, 0.0);
        assert_eq!(range.y_max, 0.0);
        assert!(range.is_empty(), "x axis has still no data");
    }

    #[test]
    fn union_covers_both_ranges() {
        let left = xy_range(&[Point::new(0.0, 1.0)]);
        let right = xy_range(&[Point::new(4.0, -2.0)]);
        assert_eq!(left.union(right), DataRange::new(0.0, 4.0, -2.0, 1.0));
    }
}
