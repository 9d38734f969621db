use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};
use tracing::trace;

use crate::core::{Path, Point, Rect, clip_polyline};

/// Where the vertical transition between two consecutive points is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    /// Vertical at the left point, then horizontal.
    #[default]
    Pre,
    /// Horizontal to the midpoint, vertical, horizontal.
    Mid,
    /// Horizontal to the right point, then vertical.
    Post,
}

impl StepKind {
    /// Corner vertices inserted between `prev` and `pt`, not including `pt`.
    #[must_use]
    pub fn corners(self, prev: Point, pt: Point) -> SmallVec<[Point; 2]> {
        match self {
            Self::Pre => smallvec![Point::new(prev.x, pt.y)],
            Self::Mid => {
                let mid_x = (prev.x + pt.x) / 2.0;
                smallvec![Point::new(mid_x, prev.y), Point::new(mid_x, pt.y)]
            }
            Self::Post => smallvec![Point::new(pt.x, prev.y)],
        }
    }
}

/// Device-space geometry of one step series draw pass.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StepGeometry {
    /// Closed polygon between the step line and the baseline.
    pub fill_polygon: Option<Path>,
    /// Visible stroke fragments, in line order.
    pub stroke_paths: Vec<Path>,
}

/// Builds the closed fill polygon between the step line and `min_y`.
///
/// Returns `None` for empty input. A single point produces a zero-area
/// closed path.
///
/// `Pre` omits the initial riser from the baseline to the first point (its
/// first step draws on the same vertical) and `Post` omits the riser to the
/// last point (the closing edge to the baseline runs along it).
#[must_use]
pub fn build_fill_polygon(points: &[Point], kind: StepKind, min_y: f64) -> Option<Path> {
    let (first, last) = (points.first()?, points.last()?);

    let mut path = Path::with_capacity(points.len() * 3 + 3);
    path.move_to(Point::new(first.x, min_y));
    match kind {
        StepKind::Pre => {}
        StepKind::Mid | StepKind::Post => path.line_to(*first),
    }

    for (index, pair) in points.windows(2).enumerate() {
        let (prev, pt) = (pair[0], pair[1]);
        for corner in kind.corners(prev, pt) {
            path.line_to(corner);
        }
        let is_last_pair = index + 2 == points.len();
        let skip_point = match kind {
            StepKind::Post => is_last_pair,
            StepKind::Pre | StepKind::Mid => false,
        };
        if !skip_point {
            path.line_to(pt);
        }
    }

    path.line_to(Point::new(last.x, min_y));
    path.close();
    Some(path)
}

/// Builds the open step polyline through `line`; `None` below two points.
#[must_use]
pub fn build_step_polyline(line: &[Point], kind: StepKind) -> Option<Path> {
    let (first, rest) = line.split_first()?;
    if rest.is_empty() {
        return None;
    }

    let mut path = Path::with_capacity(line.len() * 3);
    path.move_to(*first);
    let mut prev = *first;
    for &pt in rest {
        for corner in kind.corners(prev, pt) {
            path.line_to(corner);
        }
        path.line_to(pt);
        prev = pt;
    }
    Some(path)
}

/// Clips `points` to `clip` and builds one step polyline per visible fragment.
///
/// Fragments of a single point carry no visible stroke and are skipped.
#[must_use]
pub fn build_stroke_segments(points: &[Point], kind: StepKind, clip: Rect) -> Vec<Path> {
    let fragments = clip_polyline(points, clip);
    let paths: Vec<Path> = fragments
        .iter()
        .filter_map(|fragment| build_step_polyline(fragment, kind))
        .collect();
    trace!(
        points = points.len(),
        fragments = fragments.len(),
        strokes = paths.len(),
        ?kind,
        "built step stroke segments"
    );
    paths
}

/// Builds fill and stroke geometry in one pass.
///
/// `fill_baseline` enables the fill polygon, `stroke_clip` enables the
/// stroke; either may be absent independently.
#[must_use]
pub fn build_step_geometry(
    points: &[Point],
    kind: StepKind,
    fill_baseline: Option<f64>,
    stroke_clip: Option<Rect>,
) -> StepGeometry {
    StepGeometry {
        fill_polygon: fill_baseline.and_then(|min_y| build_fill_polygon(points, kind, min_y)),
        stroke_paths: stroke_clip
            .map(|clip| build_stroke_segments(points, kind, clip))
            .unwrap_or_default(),
    }
}
