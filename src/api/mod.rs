//! Plot-element surface: the traits a plotting framework drives and the
//! step series implementing them.

mod plot_context;
mod step;
mod step_config;
mod thumbnail;

pub use plot_context::{PlotContext, Transforms};
pub use step::Step;
pub use step_config::{STEP_CONFIG_JSON_SCHEMA_V1, StepConfig, StepConfigJsonContractV1};
pub use thumbnail::{render_step_thumbnail, thumbnail_fill_top};

use crate::core::DataRange;
use crate::render::Canvas;

/// Element that draws itself onto a canvas against plot axes.
pub trait Plotter {
    fn plot(&self, canvas: &mut Canvas, plot: &PlotContext);
}

/// Element that reports the data-space extent it needs to be fully visible.
pub trait DataRanger {
    fn data_range(&self) -> DataRange;
}

/// Element that can draw a small legend icon into the canvas bounds.
pub trait Thumbnailer {
    fn thumbnail(&self, canvas: &mut Canvas);
}
