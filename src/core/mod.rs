pub mod clip;
pub mod path;
pub mod range;
pub mod scale;
pub mod step_series;
pub mod types;
pub mod xys;

pub use clip::{clip_polygon, clip_polyline};
pub use path::{Path, PathCommand};
pub use range::{DataRange, step_data_range, xy_range};
pub use scale::{Axis, AxisScale};
pub use step_series::{
    StepGeometry, StepKind, build_fill_polygon, build_step_geometry, build_step_polyline,
    build_stroke_segments,
};
pub use types::{Point, Rect, Viewport};
pub use xys::{XYer, XYs};
