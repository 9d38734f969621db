use serde::{Deserialize, Serialize};

use crate::core::Path;
use crate::error::{PlotError, PlotResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub fn validate(self) -> PlotResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(PlotError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Stroke parameters for lines.
///
/// `dashes` alternates on/off lengths in device units; empty means solid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    pub width: f64,
    pub color: Color,
    #[serde(default)]
    pub dashes: Vec<f64>,
    #[serde(default)]
    pub dash_offset: f64,
}

impl LineStyle {
    #[must_use]
    pub fn new(width: f64, color: Color) -> Self {
        Self {
            width,
            color,
            dashes: Vec::new(),
            dash_offset: 0.0,
        }
    }

    #[must_use]
    pub fn with_dashes(mut self, dashes: Vec<f64>, dash_offset: f64) -> Self {
        self.dashes = dashes;
        self.dash_offset = dash_offset;
        self
    }

    pub fn validate(&self) -> PlotResult<()> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(PlotError::InvalidData(
                "line width must be finite and > 0".to_owned(),
            ));
        }
        if self
            .dashes
            .iter()
            .any(|length| !length.is_finite() || *length < 0.0)
        {
            return Err(PlotError::InvalidData(
                "dash lengths must be finite and >= 0".to_owned(),
            ));
        }
        if !self.dashes.is_empty() && self.dashes.iter().all(|length| *length == 0.0) {
            return Err(PlotError::InvalidData(
                "dash pattern must contain a non-zero length".to_owned(),
            ));
        }
        if !self.dash_offset.is_finite() {
            return Err(PlotError::InvalidData(
                "dash offset must be finite".to_owned(),
            ));
        }
        self.color.validate()
    }
}

impl Default for LineStyle {
    fn default() -> Self {
        Self::new(1.0, Color::BLACK)
    }
}

/// Draw command filling one closed path with a solid color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FillPrimitive {
    pub path: Path,
    pub color: Color,
}

impl FillPrimitive {
    #[must_use]
    pub fn new(path: Path, color: Color) -> Self {
        Self { path, color }
    }

    pub fn validate(&self) -> PlotResult<()> {
        validate_path(&self.path, "fill")?;
        self.color.validate()
    }
}

/// Draw command stroking one path with a line style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokePrimitive {
    pub path: Path,
    pub style: LineStyle,
}

impl StrokePrimitive {
    #[must_use]
    pub fn new(path: Path, style: LineStyle) -> Self {
        Self { path, style }
    }

    pub fn validate(&self) -> PlotResult<()> {
        validate_path(&self.path, "stroke")?;
        self.style.validate()
    }
}

fn validate_path(path: &Path, kind: &str) -> PlotResult<()> {
    if path.is_empty() {
        return Err(PlotError::InvalidData(format!(
            "{kind} path must not be empty"
        )));
    }
    if !path.is_finite() {
        return Err(PlotError::InvalidData(format!(
            "{kind} path coordinates must be finite"
        )));
    }
    Ok(())
}
