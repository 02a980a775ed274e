// https://www.cherrymx.de/en/dev.html
use std::fmt;
use std::str::FromStr;

use keyswitch_geometry::Point;

use super::{finish_with_keycap, model_path, CutoutStyle, FootprintGenerator, SwitchBase, SwitchOptions};
use crate::error::FootprintError;
use crate::node::{Footprint, Pad};

const CHERRY_W: f64 = 14.0;
const CHERRY_H: f64 = 14.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MxMount {
    /// PCB mount: adds the two plastic alignment pegs.
    Pcb,
    Plate,
}

impl FromStr for MxMount {
    type Err = FootprintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PCB" => Ok(Self::Pcb),
            "Plate" => Ok(Self::Plate),
            other => Err(FootprintError::UnsupportedSwitchType(other.to_string())),
        }
    }
}

impl fmt::Display for MxMount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pcb => "PCB",
            Self::Plate => "Plate",
        })
    }
}

#[derive(Debug, Clone)]
pub struct CherryMx {
    mount: MxMount,
    cutout: Option<CutoutStyle>,
    options: SwitchOptions,
}

impl CherryMx {
    #[must_use]
    pub fn new(mount: MxMount, cutout: Option<CutoutStyle>, options: SwitchOptions) -> Self {
        Self {
            mount,
            cutout,
            options,
        }
    }

    /// Construct from option strings (`"PCB"`/`"Plate"`, `"simple"`/`"relief"`).
    ///
    /// # Errors
    ///
    /// Unsupported mount or cutout names.
    pub fn from_names(
        mount: &str,
        cutout: Option<&str>,
        options: SwitchOptions,
    ) -> Result<Self, FootprintError> {
        Ok(Self::new(
            mount.parse()?,
            CutoutStyle::parse_optional(cutout)?,
            options,
        ))
    }
}

impl FootprintGenerator for CherryMx {
    fn footprint(&self) -> Result<Footprint, FootprintError> {
        let name = format!("SW_Cherry_MX_{}", self.mount);
        let model3d = self
            .options
            .model3d
            .clone()
            .unwrap_or_else(|| format!("{name}.wrl"));

        let mut fp = SwitchBase::new(
            name,
            format!("Cherry MX keyswitch {} Mount", self.mount),
            format!("Cherry MX Keyboard Keyswitch Switch {}", self.mount),
        )
        .cutout(self.cutout.is_some())
        .keycap(self.options.keycap.as_ref())
        .model(Some(model_path(self.options.path3d.as_deref(), &model3d)))
        .build();

        let mut shapes = fp.shapes();
        shapes
            .body_outlines(CHERRY_W, CHERRY_H)?
            .pad(Pad::tht_circle(Some(1), Point::new(-3.81, -2.54), 2.5, 1.5))
            .pad(Pad::tht_circle(Some(2), Point::new(2.54, -5.08), 2.5, 1.5))
            .center_hole(4.0);
        if self.mount == MxMount::Pcb {
            shapes.mount_holes(1.75, 5.08);
        }

        match self.cutout {
            Some(CutoutStyle::Simple) => {
                shapes.rect_cutout(CHERRY_W, CHERRY_H);
            }
            Some(CutoutStyle::Relief) => {
                shapes.mx_relief_cutout();
            }
            None => {}
        }

        Ok(finish_with_keycap(fp, self.options.keycap.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keycap::{Keycap, Spacing};
    use crate::node::{layer, Node};

    #[test]
    fn plate_mount_has_no_pegs() {
        let pcb = CherryMx::new(MxMount::Pcb, None, SwitchOptions::default())
            .footprint()
            .unwrap();
        let plate = CherryMx::new(MxMount::Plate, None, SwitchOptions::default())
            .footprint()
            .unwrap();
        assert_eq!(pcb.pads().count(), 5);
        assert_eq!(plate.pads().count(), 3);
        assert_eq!(plate.name, "SW_Cherry_MX_Plate");
        assert_eq!(plate.tags, "Cherry MX Keyboard Keyswitch Switch Plate");
    }

    #[test]
    fn rejects_unknown_options() {
        assert!(matches!(
            CherryMx::from_names("Hybrid", None, SwitchOptions::default()),
            Err(FootprintError::UnsupportedSwitchType(s)) if s == "Hybrid"
        ));
        assert!(matches!(
            CherryMx::from_names("PCB", Some("round"), SwitchOptions::default()),
            Err(FootprintError::UnsupportedCutout(s)) if s == "round"
        ));
    }

    #[test]
    fn node_order_ends_with_cutout_then_keycap() {
        let keycap = Keycap::regular(1.5, Spacing::uniform(19.0)).unwrap();
        let fp = CherryMx::from_names(
            "PCB",
            Some("relief"),
            SwitchOptions::default().with_keycap(Some(keycap)),
        )
        .unwrap()
        .footprint()
        .unwrap();

        assert_eq!(fp.name, "SW_Cherry_MX_PCB_1.50u");
        assert_eq!(fp.description, "Cherry MX keyswitch PCB Mount with 1.50u keycap");
        let n = fp.nodes.len();
        assert_eq!(fp.nodes[n - 1].layer(), Some(layer::DWGS_USER));
        assert!(matches!(
            &fp.nodes[n - 2],
            Node::Polyline { layer: on, .. } if *on == layer::ECO1_USER
        ));
        assert_eq!(fp.models().next().unwrap().path, "SW_Cherry_MX_PCB.wrl");
    }
}
