use crate::core::{Point, Rect};

/// Splits a device-space polyline into the fragments visible inside `rect`.
///
/// A new fragment starts whenever the line re-enters the rectangle, so one
/// logical line can yield several disjoint polylines. Segments with a
/// non-finite endpoint are treated as invisible. A single-point line yields
/// a one-point fragment when the point lies inside `rect`.
#[must_use]
pub fn clip_polyline(line: &[Point], rect: Rect) -> Vec<Vec<Point>> {
    if let [point] = line {
        if point.is_finite() && rect.contains(*point) {
            return vec![vec![*point]];
        }
        return Vec::new();
    }

    let mut fragments = Vec::new();
    let mut current: Vec<Point> = Vec::new();
    // Whether `current` ends on an unclipped vertex the next segment can extend.
    let mut open = false;

    for pair in line.windows(2) {
        let (start, end) = (pair[0], pair[1]);
        let Some((t0, t1)) = clip_segment(start, end, rect) else {
            flush(&mut fragments, &mut current);
            open = false;
            continue;
        };

        let extends = open && t0 == 0.0;
        if extends && t1 == t0 {
            // Leaves the rect right at the fragment's last vertex.
            open = false;
            continue;
        }
        if !extends {
            flush(&mut fragments, &mut current);
            current.push(lerp(start, end, t0));
        }
        if t1 > t0 {
            current.push(lerp(start, end, t1));
        }
        open = t1 == 1.0;
    }
    flush(&mut fragments, &mut current);

    fragments
}

/// Clips a polygon against `rect` (Sutherland-Hodgman).
///
/// Returns an empty vector when nothing of the polygon is visible.
#[must_use]
pub fn clip_polygon(polygon: &[Point], rect: Rect) -> Vec<Point> {
    let edges = [
        Edge::Left(rect.min.x),
        Edge::Right(rect.max.x),
        Edge::Bottom(rect.min.y),
        Edge::Top(rect.max.y),
    ];

    let mut output: Vec<Point> = polygon.iter().copied().filter(|p| p.is_finite()).collect();
    for edge in edges {
        if output.is_empty() {
            break;
        }
        let input = std::mem::take(&mut output);
        let mut previous = input[input.len() - 1];
        for &current in &input {
            match (edge.inside(previous), edge.inside(current)) {
                (true, true) => output.push(current),
                (true, false) => output.push(edge.intersect(previous, current)),
                (false, true) => {
                    output.push(edge.intersect(previous, current));
                    output.push(current);
                }
                (false, false) => {}
            }
            previous = current;
        }
    }
    output
}

/// Liang-Barsky parametric clip; returns the visible `[t0, t1]` sub-range.
fn clip_segment(start: Point, end: Point, rect: Rect) -> Option<(f64, f64)> {
    if !start.is_finite() || !end.is_finite() {
        return None;
    }

    let dx = end.x - start.x;
    let dy = end.y - start.y;
    let mut t0 = 0.0_f64;
    let mut t1 = 1.0_f64;

    for (p, q) in [
        (-dx, start.x - rect.min.x),
        (dx, rect.max.x - start.x),
        (-dy, start.y - rect.min.y),
        (dy, rect.max.y - start.y),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }

    Some((t0, t1))
}

fn lerp(start: Point, end: Point, t: f64) -> Point {
    if t == 0.0 {
        return start;
    }
    if t == 1.0 {
        return end;
    }
    Point::new(
        start.x + (end.x - start.x) * t,
        start.y + (end.y - start.y) * t,
    )
}

fn flush(fragments: &mut Vec<Vec<Point>>, current: &mut Vec<Point>) {
    if !current.is_empty() {
        fragments.push(std::mem::take(current));
    }
}

#[derive(Debug, Clone, Copy)]
enum Edge {
    Left(f64),
    Right(f64),
    Bottom(f64),
    Top(f64),
}

impl Edge {
    fn inside(self, point: Point) -> bool {
        match self {
            Self::Left(x) => point.x >= x,
            Self::Right(x) => point.x <= x,
            Self::Bottom(y) => point.y >= y,
            Self::Top(y) => point.y <= y,
        }
    }

    fn intersect(self, from: Point, to: Point) -> Point {
        match self {
            Self::Left(x) | Self::Right(x) => {
                let t = (x - from.x) / (to.x - from.x);
                Point::new(x, from.y + (to.y - from.y) * t)
            }
            Self::Bottom(y) | Self::Top(y) => {
                let t = (y - from.y) / (to.y - from.y);
                Point::new(from.x + (to.x - from.x) * t, y)
            }
        }
    }
}
