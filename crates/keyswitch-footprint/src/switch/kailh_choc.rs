// http://www.kailh.com/en/Products/Ks/CS/
use std::fmt;
use std::str::FromStr;

use keyswitch_geometry::{points, Point};

use super::{finish_with_keycap, model_path, FootprintGenerator, SwitchBase, SwitchOptions};
use crate::error::FootprintError;
use crate::node::{layer, Attribute, Footprint, Pad};
use crate::shapes::{CRTYD_WIDTH, FAB_WIDTH, SILK_WIDTH};

const CHOC_W: f64 = 15.0;
const CHOC_H: f64 = 15.0;
const CHOC_CUT: f64 = 14.5;

/// Socket outline from the contact side around to the hole of pin 1.
const SOCKET_OUTLINE_A: [[f64; 2]; 14] = [
    [7.275, -2.225],
    [7.575, -2.225],
    [7.575, -1.425],
    [3.567, -1.425],
    [3.276, -1.48],
    [3.025, -1.636],
    [2.848, -1.873],
    [2.769, -2.158],
    [2.612, -2.729],
    [2.258, -3.203],
    [1.756, -3.516],
    [1.175, -3.625],
    [-1.45, -3.625],
    [-2.275, -4.45],
];

const SOCKET_OUTLINE_B: [[f64; 2]; 16] = [
    [-2.275, -7.45],
    [-1.45, -8.275],
    [1.261, -8.275],
    [1.643, -8.199],
    [1.968, -7.982],
    [2.475, -7.475],
    [2.475, -7.275],
    [2.566, -6.816],
    [2.826, -6.426],
    [3.216, -6.166],
    [3.675, -6.075],
    [6.475, -6.075],
    [6.781, -6.014],
    [7.041, -5.841],
    [7.214, -5.581],
    [7.275, -5.275],
];

/// Choc generation: V1 (CPG1350), V2 (CPG1353) or a footprint accepting both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChocType {
    V1,
    V2,
    V1V2,
}

impl ChocType {
    fn has_v1(self) -> bool {
        matches!(self, Self::V1 | Self::V1V2)
    }

    fn has_v2(self) -> bool {
        matches!(self, Self::V2 | Self::V1V2)
    }
}

impl FromStr for ChocType {
    type Err = FootprintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "V1" => Ok(Self::V1),
            "V2" => Ok(Self::V2),
            "V1V2" => Ok(Self::V1V2),
            other => Err(FootprintError::UnsupportedSwitchType(other.to_string())),
        }
    }
}

impl fmt::Display for ChocType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::V1 => "V1",
            Self::V2 => "V2",
            Self::V1V2 => "V1V2",
        })
    }
}

/// Kailh Choc low profile switch, soldered or in a hotswap socket.
#[derive(Debug, Clone)]
pub struct KailhChoc {
    switch_type: ChocType,
    hotswap: bool,
    plated: bool,
    cutout: bool,
    options: SwitchOptions,
}

impl KailhChoc {
    /// # Errors
    ///
    /// [`FootprintError::PlatedRequiresHotswap`] when `plated` is set without `hotswap`.
    pub fn new(
        switch_type: ChocType,
        hotswap: bool,
        plated: bool,
        cutout: bool,
        options: SwitchOptions,
    ) -> Result<Self, FootprintError> {
        if plated && !hotswap {
            return Err(FootprintError::PlatedRequiresHotswap);
        }
        Ok(Self {
            switch_type,
            hotswap,
            plated,
            cutout,
            options,
        })
    }

    /// # Errors
    ///
    /// Unknown type names and plated sockets without hotswap.
    pub fn from_names(
        switch_type: &str,
        hotswap: bool,
        plated: bool,
        cutout: bool,
        options: SwitchOptions,
    ) -> Result<Self, FootprintError> {
        Self::new(switch_type.parse()?, hotswap, plated, cutout, options)
    }

    fn identity(&self) -> (String, String, String) {
        let mut name = if self.hotswap {
            "SW_Hotswap_Kailh_Choc".to_string()
        } else {
            "SW_Kailh_Choc".to_string()
        };
        name.push('_');
        name.push_str(&self.switch_type.to_string());
        if self.plated {
            name.push_str("_Plated");
        }

        let mut words = String::new();
        if self.switch_type.has_v1() {
            words.push_str(" CPG1350 V1");
        }
        if self.switch_type.has_v2() {
            words.push_str(" CPG1353 V2");
        }
        if self.hotswap {
            words.push_str(" Hotswap");
        }
        if self.plated {
            words.push_str(" Plated");
        }

        (
            name,
            format!("Kailh Choc keyswitch{words}"),
            format!("Kailh Choc Keyswitch Switch{words}"),
        )
    }
}

impl FootprintGenerator for KailhChoc {
    fn footprint(&self) -> Result<Footprint, FootprintError> {
        let (name, description, tags) = self.identity();
        let default_model = if self.hotswap {
            "SW_Hotswap_Kailh_Choc_v1.wrl"
        } else {
            "SW_Kailh_Choc_V1.wrl"
        };
        let model3d = self.options.model3d.as_deref().unwrap_or(default_model);

        let mut fp = SwitchBase::new(name, description, tags)
            .cutout(self.cutout)
            .keycap(self.options.keycap.as_ref())
            .model(Some(model_path(self.options.path3d.as_deref(), model3d)))
            .text_offset(9.0)
            .build();
        if self.hotswap {
            fp.set_attribute(Attribute::Smd);
        }

        let mut shapes = fp.shapes();
        shapes.body_outlines(CHOC_W, CHOC_H)?;

        if self.hotswap {
            let (a, b) = (points(&SOCKET_OUTLINE_A), points(&SOCKET_OUTLINE_B));
            shapes
                .polyline(a.clone(), layer::B_FAB, FAB_WIDTH)
                .polyline(b.clone(), layer::B_FAB, FAB_WIDTH)
                .polyline(a.clone(), layer::B_SILKS, SILK_WIDTH)
                .polyline(b.clone(), layer::B_SILKS, SILK_WIDTH);

            let mut courtyard = a;
            courtyard.extend(b);
            courtyard.push(courtyard[0]);
            shapes.polyline(courtyard, layer::B_CRTYD, CRTYD_WIDTH);
        }

        let pin_1 = Point::new(0.0, -5.9);
        let pin_2 = Point::new(5.0, -3.8);
        let v2_pin = Point::new(-5.0, 5.15);
        let solder = [layer::B_CU, layer::B_MASK, layer::B_PASTE];

        if self.hotswap && self.plated {
            shapes
                .pad(Pad::tht_circle(Some(1), pin_1, 3.6, 3.05))
                .pad(Pad::tht_circle(Some(2), pin_2, 3.6, 3.05))
                .pad(Pad::smd_roundrect(
                    Some(1),
                    Point::new(-2.85, -6.0),
                    [3.85, 2.5],
                    0.25,
                    &[layer::B_CU],
                ))
                .pad(Pad::smd_roundrect(
                    Some(2),
                    Point::new(7.85, -3.8),
                    [3.85, 2.5],
                    0.25,
                    &[layer::B_CU],
                ))
                .pad(Pad::smd_roundrect(None, Point::new(-3.5, -6.0), [2.55, 2.5], 0.25, &solder[1..]))
                .pad(Pad::smd_roundrect(None, Point::new(8.5, -3.8), [2.55, 2.5], 0.25, &solder[1..]))
                .pad(Pad::tht_circle(None, v2_pin, 2.6, 1.6));
        } else if self.hotswap {
            shapes
                .pad(Pad::npth_circle(pin_1, 3.05))
                .pad(Pad::npth_circle(pin_2, 3.05))
                .pad(Pad::smd_roundrect(Some(1), Point::new(-3.5, -6.0), [2.55, 2.5], 0.25, &solder))
                .pad(Pad::smd_roundrect(Some(2), Point::new(8.5, -3.8), [2.55, 2.5], 0.25, &solder))
                .pad(Pad::npth_circle(v2_pin, 1.6));
        } else {
            shapes
                .pad(Pad::tht_circle(Some(1), pin_1, 2.2, 1.2))
                .pad(Pad::tht_circle(Some(2), pin_2, 2.2, 1.2));
        }

        shapes.center_hole(if self.switch_type == ChocType::V1 { 3.45 } else { 5.05 });
        if self.switch_type.has_v1() {
            shapes.mount_holes(1.9, 5.5);
        }
        // Hotswap sockets already carry the V2 locating pin.
        if self.switch_type.has_v2() && !self.hotswap {
            shapes.pad(Pad::tht_circle(None, v2_pin, 2.6, 1.6));
        }

        if self.cutout {
            shapes.rect_cutout(CHOC_CUT, CHOC_CUT);
        }

        Ok(finish_with_keycap(fp, self.options.keycap.as_ref()))
    }
}
