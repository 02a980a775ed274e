// https://github.com/keyboardio/keyswitch_documentation/blob/master/datasheets/ALPS/SKCL.pdf
use keyswitch_geometry::Point;

use super::{finish_with_keycap, model_path, FootprintGenerator, SwitchBase, SwitchOptions};
use crate::error::FootprintError;
use crate::node::{Footprint, Pad};

pub(crate) const ALPS_W: f64 = 15.5;
pub(crate) const ALPS_H: f64 = 12.8;

#[derive(Debug, Clone)]
pub struct AlpsMatias {
    cutout: bool,
    options: SwitchOptions,
}

impl AlpsMatias {
    #[must_use]
    pub fn new(cutout: bool, options: SwitchOptions) -> Self {
        Self { cutout, options }
    }
}

impl FootprintGenerator for AlpsMatias {
    fn footprint(&self) -> Result<Footprint, FootprintError> {
        let model3d = self.options.model3d.as_deref().unwrap_or("SW_Alps_Matias.wrl");
        let mut fp = SwitchBase::new(
            "SW_Alps_Matias",
            "Alps/Matias keyswitch",
            "Alps Matias Keyboard Keyswitch Switch Plate",
        )
        .cutout(self.cutout)
        .keycap(self.options.keycap.as_ref())
        .model(Some(model_path(self.options.path3d.as_deref(), model3d)))
        .build();

        let mut shapes = fp.shapes();
        shapes
            .body_outlines(ALPS_W, ALPS_H)?
            .pad(Pad::tht_circle(Some(1), Point::new(-2.5, -4.0), 2.5, 1.5))
            .pad(Pad::tht_circle(Some(2), Point::new(2.5, -4.5), 2.5, 1.5));
        if self.cutout {
            shapes.rect_cutout(ALPS_W, ALPS_H);
        }

        Ok(finish_with_keycap(fp, self.options.keycap.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{layer, Node};

    #[test]
    fn alps_body_and_cutout() {
        let fp = AlpsMatias::new(true, SwitchOptions::default().with_path3d("models"))
            .footprint()
            .unwrap();
        assert_eq!(fp.tags, "Alps Matias Keyboard Keyswitch Switch Plate Cutout");
        assert_eq!(fp.models().next().unwrap().path, "models/SW_Alps_Matias.wrl");
        assert!(matches!(
            fp.nodes_on(layer::F_FAB).find(|n| matches!(n, Node::Rect { .. })),
            Some(Node::Rect { start, .. }) if start.x == -7.75 && start.y == -6.4
        ));
        assert_eq!(fp.nodes_on(layer::ECO1_USER).count(), 1);
        assert_eq!(fp.pads().count(), 2);
    }
}
