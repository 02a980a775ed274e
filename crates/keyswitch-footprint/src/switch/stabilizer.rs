use keyswitch_geometry::Point;

use super::{model_path, FootprintGenerator, SwitchBase};
use crate::error::FootprintError;
use crate::node::{layer, Attribute, Footprint, Pad};
use crate::shapes::CUTOUT_WIDTH;

/// Supported stabilizer sizes: `(size in u, keycap widths it serves, wire half-length in mm)`.
pub const STABILIZER_SIZES: [(f64, &str, f64); 6] = [
    (2.0, "2.00u 2.25u 2.50u 2.75u", 11.938),
    (3.0, "3.00u", 19.05),
    (6.0, "6.00u", 47.625),
    (6.25, "6.25u", 50.0),
    (7.0, "7.00u", 57.15),
    (8.0, "8.00u 9.00u 10.00u", 66.675),
];

const SMALL_HOLE: f64 = 3.048;
const LARGE_HOLE: f64 = 3.9878;
const TOP_Y: f64 = -6.985;
const BOTTOM_Y: f64 = 8.225;

/// Cherry MX PCB-mount stabilizer: two housings `offset` mm left and right of the switch.
#[derive(Debug, Clone)]
pub struct StabilizerCherryMx {
    size: f64,
    keycaps: &'static str,
    offset: f64,
    cutout: bool,
    path3d: Option<String>,
    model3d: Option<String>,
}

impl StabilizerCherryMx {
    /// # Errors
    ///
    /// [`FootprintError::UnsupportedStabilizerSize`] for sizes outside [`STABILIZER_SIZES`].
    pub fn new(size: f64, cutout: bool) -> Result<Self, FootprintError> {
        let &(size, keycaps, offset) = STABILIZER_SIZES
            .iter()
            .find(|(s, _, _)| *s == size)
            .ok_or(FootprintError::UnsupportedStabilizerSize(size))?;
        Ok(Self {
            size,
            keycaps,
            offset,
            cutout,
            path3d: None,
            model3d: None,
        })
    }

    #[must_use]
    pub fn with_model(mut self, path3d: Option<String>, model3d: Option<String>) -> Self {
        self.path3d = path3d;
        self.model3d = model3d;
        self
    }
}

impl FootprintGenerator for StabilizerCherryMx {
    fn footprint(&self) -> Result<Footprint, FootprintError> {
        let name = format!("Stabilizer_Cherry_MX_{:.2}u", self.size);
        let model3d = self
            .model3d
            .clone()
            .unwrap_or_else(|| format!("{name}.wrl"));

        let mut fp = SwitchBase::new(
            name,
            format!("Cherry MX PCB Stabilizer {}", self.keycaps),
            format!("Cherry MX Keyboard Stabilizer {}", self.keycaps),
        )
        .cutout(self.cutout)
        .model(Some(model_path(self.path3d.as_deref(), &model3d)))
        .text_offset(2.0)
        .build();
        fp.set_attribute(Attribute::Virtual);

        let off = self.offset;
        let mut shapes = fp.shapes();
        shapes
            .pad(Pad::npth_circle(Point::new(-off, TOP_Y), SMALL_HOLE))
            .pad(Pad::npth_circle(Point::new(off, TOP_Y), SMALL_HOLE))
            .pad(Pad::npth_circle(Point::new(-off, BOTTOM_Y), LARGE_HOLE))
            .pad(Pad::npth_circle(Point::new(off, BOTTOM_Y), LARGE_HOLE))
            // reference cross at the switch center
            .line([0.0, 2.0], [0.0, -2.0], layer::DWGS_USER, 0.1)
            .line([-2.0, 0.0], [2.0, 0.0], layer::DWGS_USER, 0.1);

        if self.cutout {
            for x in [off, -off] {
                shapes.rect(
                    Point::new(x - 3.375, -5.53),
                    Point::new(x + 3.375, 6.77),
                    layer::ECO1_USER,
                    CUTOUT_WIDTH,
                );
            }
        }

        Ok(fp)
    }
}
