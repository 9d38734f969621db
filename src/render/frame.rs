use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{PlotError, PlotResult};
use crate::render::{FillPrimitive, StrokePrimitive};

/// Backend-agnostic scene for one draw pass.
///
/// Renderers paint all fills first, then all strokes, each in insertion
/// order, so lines always sit on top of the shaded areas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub fills: Vec<FillPrimitive>,
    pub strokes: Vec<StrokePrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            fills: Vec::new(),
            strokes: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_fill(mut self, fill: FillPrimitive) -> Self {
        self.fills.push(fill);
        self
    }

    #[must_use]
    pub fn with_stroke(mut self, stroke: StrokePrimitive) -> Self {
        self.strokes.push(stroke);
        self
    }

    pub fn validate(&self) -> PlotResult<()> {
        if !self.viewport.is_valid() {
            return Err(PlotError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for fill in &self.fills {
            fill.validate()?;
        }
        for stroke in &self.strokes {
            stroke.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fills.is_empty() && self.strokes.is_empty()
    }
}
