//! 2D geometry for keyswitch footprints: points, outline primitives and polygon offsetting.

pub mod error;
pub mod offset;
pub mod point;
pub mod primitives;

pub use error::GeometryError;
pub use offset::{offset_polygon, polygon_orientation, polygon_signed_area, Winding};
pub use point::{points, Point};

/// Distance below which two coordinates are considered coincident, in millimeters.
pub const TOLERANCE: f64 = 1e-9;
