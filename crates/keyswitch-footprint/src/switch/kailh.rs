//! Kailh low profile switches that share no geometry with the Choc family.

use keyswitch_geometry::{points, Point};

use super::{finish_with_keycap, model_path, FootprintGenerator, SwitchBase, SwitchOptions};
use crate::error::FootprintError;
use crate::node::{layer, Footprint, Pad};

const EDGE_CUT_WIDTH: f64 = 0.05;

/// Board cutout under the Choc Mini, where the switch body drops through.
const CHOC_MINI_CENTER_CUT: [[f64; 2]; 9] = [
    [5.95, -2.9],
    [-5.9, -2.9],
    [-5.9, 3.0],
    [-2.5, 3.0],
    [-2.5, 4.05],
    [2.05, 4.05],
    [2.05, 3.0],
    [5.95, 3.0],
    [5.95, -2.9],
];

fn base<'a>(
    name: &str,
    description: &str,
    tags: &str,
    default_model: &str,
    cutout: bool,
    options: &'a SwitchOptions,
) -> SwitchBase<'a> {
    let model3d = options.model3d.as_deref().unwrap_or(default_model);
    SwitchBase::new(name, description, tags)
        .cutout(cutout)
        .keycap(options.keycap.as_ref())
        .model(Some(model_path(options.path3d.as_deref(), model3d)))
}

// https://www.kailhswitch.com/mechanical-keyboard-switches/mini-keyboard-push-button-switches.html
#[derive(Debug, Clone)]
pub struct KailhChocMini {
    cutout: bool,
    options: SwitchOptions,
}

impl KailhChocMini {
    #[must_use]
    pub fn new(cutout: bool, options: SwitchOptions) -> Self {
        Self { cutout, options }
    }
}

impl FootprintGenerator for KailhChocMini {
    fn footprint(&self) -> Result<Footprint, FootprintError> {
        let (w, h) = (14.5, 13.5);
        let mut fp = base(
            "SW_Kailh_Choc_Mini",
            "Kailh Choc Mini CPG1232 low profile keyswitch",
            "Kailh Choc Mini CPG1232 Keyboard Low Profile Keyswitch Switch",
            "SW_Kailh_Choc_Mini.wrl",
            self.cutout,
            &self.options,
        )
        .text_offset(8.5)
        .build();

        let mut shapes = fp.shapes();
        shapes
            .body_outlines(w, h)?
            .polyline(points(&CHOC_MINI_CENTER_CUT), layer::EDGE_CUTS, EDGE_CUT_WIDTH)
            .pad(Pad::tht_circle(Some(1), Point::new(2.0, 5.4), 1.5, 1.2))
            .pad(Pad::tht_circle(Some(2), Point::new(-4.58, 5.1), 1.5, 1.2))
            .pad(Pad::npth_oval(Point::new(-5.29, -4.75), [1.2, 1.6], [0.8, 1.2]))
            .pad(Pad::npth_oval(Point::new(5.29, -4.75), [1.2, 1.6], [0.8, 1.2]));
        if self.cutout {
            shapes.rect_cutout(13.7, 12.7);
        }

        Ok(finish_with_keycap(fp, self.options.keycap.as_ref()))
    }
}

// http://www.kailh.com/en/Products/Ks/KHS
#[derive(Debug, Clone)]
pub struct KailhKh {
    cutout: bool,
    options: SwitchOptions,
}

impl KailhKh {
    #[must_use]
    pub fn new(cutout: bool, options: SwitchOptions) -> Self {
        Self { cutout, options }
    }
}

impl FootprintGenerator for KailhKh {
    fn footprint(&self) -> Result<Footprint, FootprintError> {
        let mut fp = base(
            "SW_Kailh_KH",
            "Kailh KH CPG1280 keyswitch",
            "Kailh KH CPG1280 Keyboard Keyswitch Switch",
            "SW_Kailh_KH.wrl",
            self.cutout,
            &self.options,
        )
        .build();

        let mut shapes = fp.shapes();
        shapes
            .body_outlines(13.0, 13.0)?
            .pad(Pad::tht_circle(Some(1), Point::new(-3.8, -2.55), 2.5, 1.5))
            .pad(Pad::tht_circle(Some(2), Point::new(3.0, -5.12), 2.5, 1.5))
            .center_hole(4.0)
            .mount_holes(1.5, 4.5);
        if self.cutout {
            shapes.rect_cutout(12.2, 12.2);
        }

        Ok(finish_with_keycap(fp, self.options.keycap.as_ref()))
    }
}

/// Notebook switch. It has no plate; `cutout` only marks the footprint in its tags.
// http://www.kailh.com/en/Products/Ks/NotebookS/
#[derive(Debug, Clone)]
pub struct KailhNb {
    cutout: bool,
    options: SwitchOptions,
}

impl KailhNb {
    #[must_use]
    pub fn new(cutout: bool, options: SwitchOptions) -> Self {
        Self { cutout, options }
    }
}

impl FootprintGenerator for KailhNb {
    fn footprint(&self) -> Result<Footprint, FootprintError> {
        let mut fp = base(
            "SW_Kailh_NB",
            "Kailh KH CPG1425 low profile notebook keyswitch",
            "Kailh KH CPG1425 Keyboard Low Profile Notebook Keyswitch Switch",
            "SW_Kailh_NB.wrl",
            self.cutout,
            &self.options,
        )
        .text_offset(8.5)
        .build();

        fp.shapes()
            .body_outlines(14.0, 14.8)?
            .rect(
                Point::new(1.1, -2.5),
                Point::new(-2.9, 2.5),
                layer::EDGE_CUTS,
                EDGE_CUT_WIDTH,
            )
            .pad(Pad::tht_circle(Some(1), Point::new(-2.0, -3.4), 1.4, 1.1))
            .pad(Pad::tht_circle(Some(2), Point::new(2.9, -3.4), 1.4, 1.1))
            .pad(Pad::npth_circle(Point::new(5.5, -5.5), 1.3))
            .pad(Pad::npth_circle(Point::new(-5.5, 5.5), 1.3));

        Ok(finish_with_keycap(fp, self.options.keycap.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{Node, PadShape};

    #[test]
    fn choc_mini_cuts_board_and_has_oval_pegs() {
        let fp = KailhChocMini::new(true, SwitchOptions::default())
            .footprint()
            .unwrap();
        assert_eq!(fp.nodes_on(layer::EDGE_CUTS).count(), 1);
        assert_eq!(
            fp.pads().filter(|p| p.shape == PadShape::Oval).count(),
            2
        );
        assert!(matches!(&fp.nodes[0], Node::Text { at, .. } if at.y == -8.5));
    }

    #[test]
    fn kh_plate_cutout_is_smaller_than_body() {
        let fp = KailhKh::new(true, SwitchOptions::default()).footprint().unwrap();
        let cut: Vec<_> = fp.nodes_on(layer::ECO1_USER).collect();
        assert_eq!(cut.len(), 1);
        assert!(matches!(
            cut[0],
            Node::Rect { start, .. } if start.x == -6.1
        ));
        assert_eq!(fp.pads().count(), 5);
    }

    #[test]
    fn nb_cutout_flag_only_tags() {
        let fp = KailhNb::new(true, SwitchOptions::default()).footprint().unwrap();
        assert!(fp.tags.ends_with(" Cutout"));
        assert_eq!(fp.nodes_on(layer::ECO1_USER).count(), 0);
        assert_eq!(fp.models().next().unwrap().path, "SW_Kailh_NB.wrl");
    }
}
