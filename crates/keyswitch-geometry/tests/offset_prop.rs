use keyswitch_geometry::primitives::{bounds, rectangle};
use keyswitch_geometry::{offset_polygon, polygon_orientation, Point};
use proptest::prelude::*;

fn regular_polygon(sides: u32, radius: f64, phase: f64) -> Vec<Point> {
    (0..sides)
        .map(|k| {
            Point::new(radius, 0.0).rotated(phase + 360.0 * f64::from(k) / f64::from(sides), Point::ORIGIN)
        })
        .collect()
}

proptest! {
    #[test]
    fn rectangle_bounds_grow_by_margin(
        w in 0.5f64..40.0,
        h in 0.5f64..40.0,
        cx in -20.0f64..20.0,
        cy in -20.0f64..20.0,
        margin in -0.2f64..2.0,
    ) {
        let rect = rectangle(Point::new(cx, cy), (w, h), 0.0);
        let grown = offset_polygon(&rect, margin).unwrap();
        prop_assert_eq!(grown.len(), rect.len());

        let (lo, hi) = bounds(&grown).unwrap();
        prop_assert!((hi.x - lo.x - (w + 2.0 * margin)).abs() < 1e-9);
        prop_assert!((hi.y - lo.y - (h + 2.0 * margin)).abs() < 1e-9);
        prop_assert!(((hi.x + lo.x) / 2.0 - cx).abs() < 1e-9);
        prop_assert!(((hi.y + lo.y) / 2.0 - cy).abs() < 1e-9);
    }

    #[test]
    fn convex_round_trip_and_winding(
        sides in 3u32..12,
        radius in 1.0f64..30.0,
        phase in 0.0f64..360.0,
        margin in 0.0f64..0.5,
        reversed in any::<bool>(),
    ) {
        let mut poly = regular_polygon(sides, radius, phase);
        if reversed {
            poly.reverse();
        }

        let grown = offset_polygon(&poly, margin).unwrap();
        prop_assert_eq!(grown.len(), poly.len());
        prop_assert_eq!(polygon_orientation(&grown).unwrap(), polygon_orientation(&poly).unwrap());

        let back = offset_polygon(&grown, -margin).unwrap();
        for (a, b) in back.iter().zip(&poly) {
            prop_assert!(a.approx_eq(*b, 1e-7), "{:?} vs {:?}", a, b);
        }
    }
}
