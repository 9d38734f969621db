use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};

/// Mapping used to normalize data values along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AxisScale {
    /// Uniform spacing in raw data units.
    #[default]
    Linear,
    /// Uniform spacing in decimal-log units (axis bounds must be > 0).
    Log10,
}

/// Data-space extent of one plot axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    min: f64,
    max: f64,
    #[serde(default)]
    scale: AxisScale,
}

impl Axis {
    pub fn new(min: f64, max: f64) -> PlotResult<Self> {
        Self::with_scale(min, max, AxisScale::Linear)
    }

    pub fn new_log10(min: f64, max: f64) -> PlotResult<Self> {
        Self::with_scale(min, max, AxisScale::Log10)
    }

    pub fn with_scale(min: f64, max: f64, scale: AxisScale) -> PlotResult<Self> {
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(PlotError::InvalidData(
                "axis domain must be finite with min < max".to_owned(),
            ));
        }
        if scale == AxisScale::Log10 && min <= 0.0 {
            return Err(PlotError::InvalidData(
                "log axis domain must be > 0".to_owned(),
            ));
        }
        Ok(Self { min, max, scale })
    }

    /// Builds a linear axis covering `[min, max]`, widening a zero-width span by one unit each side.
    pub fn fitted(min: f64, max: f64) -> PlotResult<Self> {
        if min == max {
            return Self::new(min - 1.0, max + 1.0);
        }
        Self::new(min, max)
    }

    #[must_use]
    pub fn min(self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(self) -> f64 {
        self.max
    }

    #[must_use]
    pub fn scale(self) -> AxisScale {
        self.scale
    }

    /// Maps `value` to its fractional position on the axis (`0` at `min`, `1` at `max`).
    ///
    /// Values outside the domain extrapolate. Non-positive values on a log
    /// axis yield non-finite results, which downstream geometry drops.
    #[must_use]
    pub fn normalize(self, value: f64) -> f64 {
        match self.scale {
            AxisScale::Linear => (value - self.min) / (self.max - self.min),
            AxisScale::Log10 => {
                let low = self.min.log10();
                let high = self.max.log10();
                (value.log10() - low) / (high - low)
            }
        }
    }
}
