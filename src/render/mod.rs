mod canvas;
mod frame;
mod null_renderer;
mod primitives;

pub use canvas::Canvas;
pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{Color, FillPrimitive, LineStyle, StrokePrimitive};

use crate::error::PlotResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code remains isolated from plot geometry.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> PlotResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
