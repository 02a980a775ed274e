use super::{finish_with_keycap, model_path, CutoutStyle, FootprintGenerator, SwitchBase, SwitchOptions};
use crate::error::FootprintError;
use crate::node::{layer, Attribute, Footprint};
use crate::shapes::{ShapeBuilder, CRTYD_WIDTH, SILK_WIDTH};

const SWITCH_W: f64 = 14.0;
const SWITCH_H: f64 = 14.0;

/// Kailh MX hotswap socket (CPG151101S11) under a Cherry MX compatible switch.
#[derive(Debug, Clone)]
pub struct HotswapKailhMx {
    plated: bool,
    cutout: Option<CutoutStyle>,
    options: SwitchOptions,
}

impl HotswapKailhMx {
    #[must_use]
    pub fn new(plated: bool, cutout: Option<CutoutStyle>, options: SwitchOptions) -> Self {
        Self {
            plated,
            cutout,
            options,
        }
    }

    /// # Errors
    ///
    /// Unsupported cutout names.
    pub fn from_names(
        plated: bool,
        cutout: Option<&str>,
        options: SwitchOptions,
    ) -> Result<Self, FootprintError> {
        Ok(Self::new(plated, CutoutStyle::parse_optional(cutout)?, options))
    }
}

impl FootprintGenerator for HotswapKailhMx {
    fn footprint(&self) -> Result<Footprint, FootprintError> {
        let mut name = "SW_Hotswap_Kailh_MX".to_string();
        let mut description = "Kailh keyswitch Hotswap Socket".to_string();
        let mut tags = "Kailh Keyboard Keyswitch Switch Hotswap Socket".to_string();
        if self.plated {
            name.push_str("_plated");
            tags.push_str(" plated");
            description.push_str(" plated holes");
        }
        let model3d = self
            .options
            .model3d
            .as_deref()
            .unwrap_or("SW_Hotswap_Kailh_MX.wrl");

        let mut fp = SwitchBase::new(name, description, tags)
            .cutout(self.cutout.is_some())
            .keycap(self.options.keycap.as_ref())
            .model(Some(model_path(self.options.path3d.as_deref(), model3d)))
            .build();
        fp.set_attribute(Attribute::Smd);

        let mut shapes = fp.shapes();
        shapes.fab_outline(SWITCH_W, SWITCH_H);
        socket_outline(&mut shapes, layer::B_FAB, SILK_WIDTH);
        shapes.silkscreen(SWITCH_W, SWITCH_H)?;
        socket_silkscreen(&mut shapes);
        shapes.courtyard(SWITCH_W, SWITCH_H)?;
        socket_outline(&mut shapes, layer::B_CRTYD, CRTYD_WIDTH);

        shapes
            .mx_hotswap_pads(self.plated)
            .center_hole(4.0)
            .mount_holes(1.75, 5.08);

        match self.cutout {
            Some(CutoutStyle::Simple) => {
                shapes.rect_cutout(SWITCH_W, SWITCH_H);
            }
            Some(CutoutStyle::Relief) => {
                shapes.mx_relief_cutout();
            }
            None => {}
        }

        Ok(finish_with_keycap(fp, self.options.keycap.as_ref()))
    }
}

/// Socket body: straight runs plus the two rounded corners.
fn socket_outline(shapes: &mut ShapeBuilder<'_>, on: &'static str, width: f64) {
    shapes
        .line([-4.0, -6.8], [4.8, -6.8], on, width)
        .line([4.8, -6.8], [4.8, -2.8], on, width)
        .line([-0.3, -2.8], [4.8, -2.8], on, width)
        .line([-6.0, -0.8], [-2.3, -0.8], on, width)
        .line([-6.0, -0.8], [-6.0, -4.8], on, width)
        .arc([-4.0, -4.8], [-4.0, -6.8], -90.0, on, width)
        .arc([-0.3, -0.8], [-0.3, -2.8], -90.0, on, width);
}

/// Silkscreen keeps clear of the solder pads, so only part of the body is drawn.
fn socket_silkscreen(shapes: &mut ShapeBuilder<'_>) {
    let on = layer::B_SILKS;
    shapes
        .line([-4.1, -6.9], [1.0, -6.9], on, SILK_WIDTH)
        .line([-0.2, -2.7], [4.9, -2.7], on, SILK_WIDTH)
        .arc([-4.1, -4.9], [-4.1, -6.9], -90.0, on, SILK_WIDTH)
        .arc([-0.2, -0.7], [-0.2, -2.7], -90.0, on, SILK_WIDTH);
}
