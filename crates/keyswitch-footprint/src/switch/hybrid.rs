// https://www.cherrymx.de/en/dev.html
// https://github.com/keyboardio/keyswitch_documentation/blob/master/datasheets/ALPS/SKCL.pdf
use keyswitch_geometry::Point;

use super::alps_matias::{ALPS_H, ALPS_W};
use super::{finish_with_keycap, model_path, FootprintGenerator, SwitchBase, SwitchOptions};
use crate::error::FootprintError;
use crate::node::{Drill, Footprint, Model, Node, Pad};

const CHERRY_W: f64 = 14.0;
const CHERRY_H: f64 = 14.0;

/// PCB footprint accepting either a Cherry MX or an Alps/Matias switch.
#[derive(Debug, Clone, Default)]
pub struct HybridCherryMxAlps {
    options: SwitchOptions,
}

impl HybridCherryMxAlps {
    #[must_use]
    pub fn new(options: SwitchOptions) -> Self {
        Self { options }
    }

    /// Union of both switch bodies: the MX square with the wider Alps sides poking out.
    #[must_use]
    pub fn outline() -> Vec<Point> {
        let (cw, ch) = (CHERRY_W / 2.0, CHERRY_H / 2.0);
        let (aw, ah) = (ALPS_W / 2.0, ALPS_H / 2.0);
        vec![
            Point::new(-cw, -ch),
            Point::new(cw, -ch),
            Point::new(cw, -ah),
            Point::new(aw, -ah),
            Point::new(aw, ah),
            Point::new(cw, ah),
            Point::new(cw, ch),
            Point::new(-cw, ch),
            Point::new(-cw, ah),
            Point::new(-aw, ah),
            Point::new(-aw, -ah),
            Point::new(-cw, -ah),
            Point::new(-cw, -ch),
        ]
    }

    fn models(&self) -> Vec<String> {
        let path3d = self.options.path3d.as_deref();
        match self.options.model3d.as_deref() {
            Some(model3d) => vec![model_path(path3d, model3d)],
            None => vec![
                model_path(path3d, "SW_Cherry_MX_PCB.wrl"),
                model_path(path3d, "SW_Alps_Matias.wrl"),
            ],
        }
    }
}

impl FootprintGenerator for HybridCherryMxAlps {
    fn footprint(&self) -> Result<Footprint, FootprintError> {
        let mut fp = SwitchBase::new(
            "SW_Hybrid_Cherry_MX_Alps",
            "Cherry MX / Alps keyswitch hybrid",
            "Cherry MX Alps Matias Hybrid Keyboard Keyswitch Switch PCB",
        )
        .keycap(self.options.keycap.as_ref())
        .build();
        for model in self.models() {
            fp.push(Node::Model(Model::new(model)));
        }

        fp.shapes()
            .outline_with_margins(&Self::outline())?
            .pad(Pad::tht_circle(Some(1), Point::new(-2.5, -4.0), 2.5, 1.5))
            .pad(
                Pad::tht_oval(1, Point::new(-3.81, -2.54), [4.46156, 2.5], Drill::Round(1.5))
                    .rotated(48.0)
                    .with_drill_offset(Point::new(0.980778, 0.0)),
            )
            .pad(
                Pad::tht_oval(2, Point::new(2.52, -4.79), [3.081378, 2.5], Drill::Oval(2.08137, 1.5))
                    .rotated(86.0),
            )
            .center_hole(4.0)
            .mount_holes(1.75, 5.08);

        Ok(finish_with_keycap(fp, self.options.keycap.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::layer;
    use approx::assert_abs_diff_eq;

    #[test]
    fn loads_both_models_by_default() {
        let fp = HybridCherryMxAlps::new(SwitchOptions::default().with_path3d("3d"))
            .footprint()
            .unwrap();
        let paths: Vec<_> = fp.models().map(|m| m.path.as_str()).collect();
        assert_eq!(paths, ["3d/SW_Cherry_MX_PCB.wrl", "3d/SW_Alps_Matias.wrl"]);
        assert_eq!(fp.tags, "Cherry MX Alps Matias Hybrid Keyboard Keyswitch Switch PCB");
    }

    #[test]
    fn explicit_model_replaces_defaults() {
        let options = SwitchOptions {
            model3d: Some("hybrid.wrl".to_string()),
            ..SwitchOptions::default()
        };
        let fp = HybridCherryMxAlps::new(options).footprint().unwrap();
        assert_eq!(fp.models().count(), 1);
    }

    #[test]
    fn courtyard_follows_notched_outline() {
        let fp = HybridCherryMxAlps::default().footprint().unwrap();
        let crtyd: Vec<_> = fp.nodes_on(layer::F_CRTYD).collect();
        let Node::Polyline { points: pts, .. } = crtyd[0] else {
            panic!("expected polyline");
        };
        assert_eq!(pts.len(), 13);
        assert_abs_diff_eq!(pts[0].x, -7.25, epsilon = 1e-9);
        assert_abs_diff_eq!(pts[0].y, -7.25, epsilon = 1e-9);
        assert_abs_diff_eq!(pts[3].x, 8.0, epsilon = 1e-9);
        assert_abs_diff_eq!(pts[3].y, -6.65, epsilon = 1e-9);
        assert_eq!(pts.first(), pts.last());
    }
}
