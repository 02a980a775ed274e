//! Shape behaviors shared between switch variants.

use keyswitch_geometry::primitives::rect_corners;
use keyswitch_geometry::{offset_polygon, points, GeometryError, Point};

use crate::node::{layer, Footprint, Node, Pad};

pub const FAB_WIDTH: f64 = 0.1;
pub const SILK_WIDTH: f64 = 0.12;
pub const SILK_MARGIN: f64 = 0.1;
pub const CRTYD_WIDTH: f64 = 0.05;
pub const CRTYD_MARGIN: f64 = 0.25;
pub const CUTOUT_WIDTH: f64 = 0.1;

/// Plate cutout for MX switches with notches for opening the switch in place.
const MX_RELIEF_CUTOUT: [[f64; 2]; 21] = [
    [7.0, -7.0],
    [7.0, -6.0],
    [7.8, -6.0],
    [7.8, -2.9],
    [7.0, -2.9],
    [7.0, 2.9],
    [7.8, 2.9],
    [7.8, 6.0],
    [7.0, 6.0],
    [7.0, 7.0],
    [-7.0, 7.0],
    [-7.0, 6.0],
    [-7.8, 6.0],
    [-7.8, 2.9],
    [-7.0, 2.9],
    [-7.0, -2.9],
    [-7.8, -2.9],
    [-7.8, -6.0],
    [-7.0, -6.0],
    [-7.0, -7.0],
    [7.0, -7.0],
];

/// Appends primitives onto a borrowed [`Footprint`].
pub struct ShapeBuilder<'a> {
    footprint: &'a mut Footprint,
}

impl<'a> ShapeBuilder<'a> {
    pub fn new(footprint: &'a mut Footprint) -> Self {
        Self { footprint }
    }

    pub fn line(&mut self, start: [f64; 2], end: [f64; 2], layer: &'static str, width: f64) -> &mut Self {
        self.footprint.push(Node::Line {
            start: start.into(),
            end: end.into(),
            layer,
            width,
        });
        self
    }

    pub fn arc(
        &mut self,
        center: [f64; 2],
        start: [f64; 2],
        angle: f64,
        layer: &'static str,
        width: f64,
    ) -> &mut Self {
        self.footprint.push(Node::Arc {
            center: center.into(),
            start: start.into(),
            angle,
            layer,
            width,
        });
        self
    }

    pub fn rect(&mut self, start: Point, end: Point, layer: &'static str, width: f64) -> &mut Self {
        self.footprint.push(Node::Rect {
            start,
            end,
            layer,
            width,
        });
        self
    }

    /// Rectangle grown by `margin` on every side.
    pub fn rect_offset(
        &mut self,
        start: Point,
        end: Point,
        layer: &'static str,
        width: f64,
        margin: f64,
    ) -> Result<&mut Self, GeometryError> {
        let corners = offset_polygon(&rect_corners(start, end), margin)?;
        Ok(self.rect(corners[0], corners[2], layer, width))
    }

    pub fn polyline(&mut self, pts: Vec<Point>, layer: &'static str, width: f64) -> &mut Self {
        self.footprint.push(Node::Polyline {
            points: pts,
            layer,
            width,
        });
        self
    }

    /// Closed outline `pts` offset by `margin`.
    pub fn polyline_offset(
        &mut self,
        pts: &[Point],
        layer: &'static str,
        width: f64,
        margin: f64,
    ) -> Result<&mut Self, GeometryError> {
        let offset = offset_polygon(pts, margin)?;
        Ok(self.polyline(offset, layer, width))
    }

    pub fn pad(&mut self, pad: Pad) -> &mut Self {
        self.footprint.push(Node::Pad(pad));
        self
    }

    pub fn fab_outline(&mut self, w: f64, h: f64) -> &mut Self {
        let (start, end) = centered(w, h);
        self.rect(start, end, layer::F_FAB, FAB_WIDTH)
    }

    pub fn silkscreen(&mut self, w: f64, h: f64) -> Result<&mut Self, GeometryError> {
        let (start, end) = centered(w, h);
        self.rect_offset(start, end, layer::F_SILKS, SILK_WIDTH, SILK_MARGIN)
    }

    pub fn courtyard(&mut self, w: f64, h: f64) -> Result<&mut Self, GeometryError> {
        let (start, end) = centered(w, h);
        self.rect_offset(start, end, layer::F_CRTYD, CRTYD_WIDTH, CRTYD_MARGIN)
    }

    /// Fabrication outline of a `w` x `h` switch body plus the silkscreen and courtyard derived
    /// from it.
    pub fn body_outlines(&mut self, w: f64, h: f64) -> Result<&mut Self, GeometryError> {
        self.fab_outline(w, h).silkscreen(w, h)?.courtyard(w, h)
    }

    /// Fabrication, silkscreen and courtyard outlines derived from a closed polygon.
    pub fn outline_with_margins(&mut self, outline: &[Point]) -> Result<&mut Self, GeometryError> {
        self.polyline(outline.to_vec(), layer::F_FAB, FAB_WIDTH)
            .polyline_offset(outline, layer::F_SILKS, SILK_WIDTH, SILK_MARGIN)?
            .polyline_offset(outline, layer::F_CRTYD, CRTYD_WIDTH, CRTYD_MARGIN)
    }

    /// Plain rectangular plate cutout.
    pub fn rect_cutout(&mut self, w: f64, h: f64) -> &mut Self {
        let (start, end) = centered(w, h);
        self.rect(start, end, layer::ECO1_USER, CUTOUT_WIDTH)
    }

    pub fn mx_relief_cutout(&mut self) -> &mut Self {
        self.polyline(points(&MX_RELIEF_CUTOUT), layer::ECO1_USER, CUTOUT_WIDTH)
    }

    pub fn center_hole(&mut self, diameter: f64) -> &mut Self {
        self.pad(Pad::npth_circle(Point::ORIGIN, diameter))
    }

    /// Pair of unplated holes on the x axis at `+-x`.
    pub fn mount_holes(&mut self, diameter: f64, x: f64) -> &mut Self {
        self.pad(Pad::npth_circle(Point::new(-x, 0.0), diameter))
            .pad(Pad::npth_circle(Point::new(x, 0.0), diameter))
    }

    /// Kailh MX hotswap socket holes and solder pads.
    ///
    /// Plated variants bridge plated holes to the socket pads on `B.Cu` and carry the mask and
    /// paste openings on separate unnumbered pads.
    pub fn mx_hotswap_pads(&mut self, plated: bool) -> &mut Self {
        let hole_1 = Point::new(-3.81, -2.54);
        let hole_2 = Point::new(2.54, -5.08);
        let pad_1 = Point::new(-7.085, -2.54);
        let pad_2 = Point::new(5.842, -5.08);
        let all = [layer::B_CU, layer::B_MASK, layer::B_PASTE];

        if plated {
            self.pad(Pad::tht_circle(Some(1), hole_1, 3.6, 3.05))
                .pad(Pad::tht_circle(Some(2), hole_2, 3.6, 3.05))
                .pad(Pad::smd_roundrect(
                    Some(1),
                    Point::new(-6.585, -2.54),
                    [3.55, 2.5],
                    0.25,
                    &[layer::B_CU],
                ))
                .pad(Pad::smd_roundrect(
                    Some(2),
                    Point::new(5.32, -5.08),
                    [3.55, 2.5],
                    0.25,
                    &[layer::B_CU],
                ))
                .pad(Pad::smd_roundrect(None, pad_1, [2.55, 2.5], 0.25, &all[1..]))
                .pad(Pad::smd_roundrect(None, pad_2, [2.55, 2.5], 0.25, &all[1..]))
        } else {
            self.pad(Pad::npth_circle(hole_1, 3.05))
                .pad(Pad::npth_circle(hole_2, 3.05))
                .pad(Pad::smd_roundrect(Some(1), pad_1, [2.55, 2.5], 0.25, &all))
                .pad(Pad::smd_roundrect(Some(2), pad_2, [2.55, 2.5], 0.25, &all))
        }
    }
}

fn centered(w: f64, h: f64) -> (Point, Point) {
    (Point::new(-w / 2.0, -h / 2.0), Point::new(w / 2.0, h / 2.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn body_outlines_inflate_silkscreen_and_courtyard() {
        let mut fp = Footprint::new("T", "", "");
        fp.shapes().body_outlines(14.0, 14.0).unwrap();

        let rects: Vec<(Point, Point, &str)> = fp
            .nodes
            .iter()
            .filter_map(|n| match n {
                Node::Rect { start, end, layer, .. } => Some((*start, *end, *layer)),
                _ => None,
            })
            .collect();
        assert_eq!(rects.len(), 3);
        assert_eq!(rects[0].2, layer::F_FAB);
        assert_eq!(rects[1].2, layer::F_SILKS);
        assert_eq!(rects[2].2, layer::F_CRTYD);
        assert_abs_diff_eq!(rects[1].0.x, -7.1, epsilon = 1e-12);
        assert_abs_diff_eq!(rects[1].1.y, 7.1, epsilon = 1e-12);
        assert_abs_diff_eq!(rects[2].0.y, -7.25, epsilon = 1e-12);
        assert_abs_diff_eq!(rects[2].1.x, 7.25, epsilon = 1e-12);
    }

    #[test]
    fn relief_cutout_is_closed() {
        let mut fp = Footprint::new("T", "", "");
        fp.shapes().mx_relief_cutout();
        let Node::Polyline { points: pts, layer: on, .. } = &fp.nodes[0] else {
            panic!("expected polyline");
        };
        assert_eq!(*on, layer::ECO1_USER);
        assert_eq!(pts.first(), pts.last());
    }

    #[test]
    fn hotswap_pads_differ_for_plated_sockets() {
        let mut plain = Footprint::new("T", "", "");
        plain.shapes().mx_hotswap_pads(false);
        let mut plated = Footprint::new("T", "", "");
        plated.shapes().mx_hotswap_pads(true);

        assert_eq!(plain.pads().count(), 4);
        assert_eq!(plated.pads().count(), 6);
        assert!(plain.pads().filter(|p| p.number.is_some()).all(|p| p.layers.len() == 3));
    }
}
