use cavalier_contours::polyline::{PlineOrientation, PlineSource};

use crate::error::GeometryError;
use crate::primitives::to_pline;
use crate::{Point, TOLERANCE};

/// Corners whose incident edges turn back on themselves have no miter point.
const REVERSAL_EPS: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winding {
    Clockwise,
    CounterClockwise,
}

/// Signed shoelace area of the closed ring over `pts` (positive when counter-clockwise in a
/// y-up frame).
#[must_use]
pub fn polygon_signed_area(pts: &[Point]) -> f64 {
    if pts.len() < 3 {
        return 0.0;
    }
    to_pline(pts).area()
}

/// Winding of the closed ring over `pts`.
///
/// # Errors
///
/// Returns [`GeometryError::InvalidGeometry`] when the ring has no area to orient.
pub fn polygon_orientation(pts: &[Point]) -> Result<Winding, GeometryError> {
    if polygon_signed_area(pts).abs() <= TOLERANCE {
        return Err(GeometryError::invalid("polygon has zero area"));
    }
    match to_pline(pts).orientation() {
        PlineOrientation::Clockwise => Ok(Winding::Clockwise),
        PlineOrientation::CounterClockwise => Ok(Winding::CounterClockwise),
        PlineOrientation::Open => Err(GeometryError::invalid("polygon is not closed")),
    }
}

/// Offset the closed polygon `points` by `margin`, outward for positive margins and inward for
/// negative ones.
///
/// Every edge of the result is parallel to its source edge at perpendicular distance `margin`;
/// each vertex moves to the intersection of its two offset edges, i.e. along the external
/// bisector by `margin / sin(interior / 2)`. Vertex count, ordering and winding are preserved.
///
/// The ring is implicitly closed. When the last point repeats the first, it is treated as the
/// explicit closing point and the output repeats the offset first point as well.
///
/// Only convex inputs are guaranteed; concave corners are mitered the same way but the result
/// is not checked for self-intersections.
///
/// # Errors
///
/// [`GeometryError::InvalidGeometry`] for fewer than three distinct vertices, a repeated
/// vertex (adjacent or not), a non-finite coordinate or margin, a polygon without area, or an edge that doubles
/// back onto the previous one.
pub fn offset_polygon(points: &[Point], margin: f64) -> Result<Vec<Point>, GeometryError> {
    if !margin.is_finite() {
        return Err(GeometryError::invalid(format!("margin {margin} is not finite")));
    }

    let explicitly_closed =
        points.len() > 3 && points[0].approx_eq(points[points.len() - 1], TOLERANCE);
    let ring = if explicitly_closed {
        &points[..points.len() - 1]
    } else {
        points
    };

    let n = ring.len();
    if n < 3 {
        return Err(GeometryError::invalid(format!(
            "polygon needs at least 3 vertices, got {n}"
        )));
    }
    if let Some(i) = ring.iter().position(|p| !p.is_finite()) {
        return Err(GeometryError::invalid(format!(
            "vertex {i} has a non-finite coordinate"
        )));
    }

    let winding = polygon_orientation_checked(ring)?;

    // normals[i] belongs to the edge ring[i] -> ring[i + 1].
    let mut normals = Vec::with_capacity(n);
    for i in 0..n {
        let j = (i + 1) % n;
        normals.push(outward_normal(ring[i], ring[j], winding).ok_or_else(|| {
            GeometryError::invalid(format!(
                "zero-length edge between vertex {i} and vertex {j}"
            ))
        })?);
    }

    let mut out = Vec::with_capacity(points.len());
    for (i, &vertex) in ring.iter().enumerate() {
        let n_prev = normals[(i + n - 1) % n];
        let n_next = normals[i];
        let denom = 1.0 + n_prev.dot(n_next);
        if denom <= REVERSAL_EPS {
            return Err(GeometryError::invalid(format!(
                "edges double back at vertex {i}"
            )));
        }
        out.push(vertex + (n_prev + n_next) * (margin / denom));
    }

    if explicitly_closed {
        out.push(out[0]);
    }
    Ok(out)
}

/// Coincident vertices are reported before the area check so that duplicated points get the
/// more specific message. Non-adjacent repeats pinch the ring into two loops.
fn polygon_orientation_checked(ring: &[Point]) -> Result<Winding, GeometryError> {
    let n = ring.len();
    for i in 0..n {
        for j in i + 1..n {
            if ring[i].distance(ring[j]) > TOLERANCE {
                continue;
            }
            let adjacent = j == i + 1 || (i == 0 && j == n - 1);
            return Err(GeometryError::invalid(if adjacent {
                format!("zero-length edge between vertex {i} and vertex {j}")
            } else {
                format!("vertex {j} repeats vertex {i}")
            }));
        }
    }
    polygon_orientation(ring)
}

fn outward_normal(from: Point, to: Point, winding: Winding) -> Option<Point> {
    let d = (to - from).normalized(TOLERANCE)?;
    Some(match winding {
        Winding::CounterClockwise => Point::new(d.y, -d.x),
        Winding::Clockwise => Point::new(-d.y, d.x),
    })
}
