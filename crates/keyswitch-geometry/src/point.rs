use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

/// A position or direction in footprint space, in millimeters.
///
/// Footprints follow the KiCad convention: +x points right, +y points down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn dot(self, other: Point) -> f64 {
        self.x * other.x + self.y * other.y
    }

    #[must_use]
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    #[must_use]
    pub fn distance(self, other: Point) -> f64 {
        (other - self).length()
    }

    /// Unit vector in the same direction, or `None` for a (near) zero vector.
    #[must_use]
    pub fn normalized(self, eps: f64) -> Option<Point> {
        let len = self.length();
        if len <= eps {
            None
        } else {
            Some(Point::new(self.x / len, self.y / len))
        }
    }

    /// Rotate by `angle_deg` around `origin`.
    ///
    /// The rotation is counter-clockwise in a y-up frame, which shows as clockwise on a KiCad
    /// canvas.
    #[must_use]
    pub fn rotated(self, angle_deg: f64, origin: Point) -> Point {
        let translated = self - origin;
        let (s, c) = angle_deg.to_radians().sin_cos();
        Point::new(
            translated.x * c - translated.y * s,
            translated.x * s + translated.y * c,
        ) + origin
    }

    #[must_use]
    pub fn approx_eq(self, other: Point, eps: f64) -> bool {
        (self.x - other.x).abs() <= eps && (self.y - other.y).abs() <= eps
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<[f64; 2]> for Point {
    fn from(v: [f64; 2]) -> Self {
        Point::new(v[0], v[1])
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl From<Point> for [f64; 2] {
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

/// Build a point list from literal coordinate pairs.
#[must_use]
pub fn points(coords: &[[f64; 2]]) -> Vec<Point> {
    coords.iter().copied().map(Point::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn rotate_about_origin() {
        let p = Point::new(1.0, 0.0).rotated(90.0, Point::ORIGIN);
        assert_abs_diff_eq!(p.x, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(p.y, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn rotate_about_offset_origin() {
        let p = Point::new(3.0, 2.0).rotated(180.0, Point::new(2.0, 2.0));
        assert_abs_diff_eq!(p.x, 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(p.y, 2.0, epsilon = 1e-9);
    }

    #[test]
    fn normalized_rejects_zero_vector() {
        assert!(Point::new(0.0, 0.0).normalized(1e-12).is_none());
        let n = Point::new(3.0, 4.0).normalized(1e-12).unwrap();
        assert_abs_diff_eq!(n.length(), 1.0, epsilon = 1e-12);
    }
}
