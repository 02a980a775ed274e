use cavalier_contours::polyline::{PlineVertex, Polyline};

use crate::Point;

/// Corners of the axis-aligned rectangle spanned by `start` and `end`, walking
/// `start -> (end.x, start.y) -> end -> (start.x, end.y)`.
#[must_use]
pub fn rect_corners(start: Point, end: Point) -> Vec<Point> {
    vec![
        start,
        Point::new(end.x, start.y),
        end,
        Point::new(start.x, end.y),
    ]
}

/// Corners of a `size` rectangle centered on `center`, rotated by `rotation_deg` about it.
#[must_use]
pub fn rectangle(center: Point, size: (f64, f64), rotation_deg: f64) -> Vec<Point> {
    let (hw, hh) = (size.0 / 2.0, size.1 / 2.0);
    let mut pts = rect_corners(
        Point::new(center.x - hw, center.y - hh),
        Point::new(center.x + hw, center.y + hh),
    );
    if rotation_deg != 0.0 {
        for p in &mut pts {
            *p = p.rotated(rotation_deg, center);
        }
    }
    pts
}

/// Close a ring by repeating its first point, unless it already ends there.
#[must_use]
pub fn close_ring(mut pts: Vec<Point>) -> Vec<Point> {
    if let (Some(first), Some(last)) = (pts.first().copied(), pts.last().copied()) {
        if pts.len() > 1 && !first.approx_eq(last, crate::TOLERANCE) {
            pts.push(first);
        }
    }
    pts
}

/// Straight-segment closed polyline over `pts`.
pub(crate) fn to_pline(pts: &[Point]) -> Polyline<f64> {
    let mut pl = Polyline::new_closed();
    for p in pts {
        pl.vertex_data.push(PlineVertex::new(p.x, p.y, 0.0));
    }
    pl
}

/// Axis-aligned bounds as `(min, max)`.
#[must_use]
pub fn bounds(pts: &[Point]) -> Option<(Point, Point)> {
    let first = *pts.first()?;
    Some(pts.iter().skip(1).fold((first, first), |(lo, hi), p| {
        (
            Point::new(lo.x.min(p.x), lo.y.min(p.y)),
            Point::new(hi.x.max(p.x), hi.y.max(p.y)),
        )
    }))
}
