//! step-plot: step-line geometry for vector chart canvases.
//!
//! Points are bridged with axis-aligned segments using one of three step
//! conventions (pre, mid, post). The crate builds the stroke, clipped to the
//! visible area and possibly split into several fragments, and an optional
//! fill polygon closed against the axis baseline. Geometry is recorded into a
//! backend-agnostic `RenderFrame` executed by a `Renderer`.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{DataRanger, PlotContext, Plotter, Step, StepConfig, Thumbnailer};
pub use crate::core::{DataRange, Point, StepKind, XYs};
pub use error::{PlotError, PlotResult};
