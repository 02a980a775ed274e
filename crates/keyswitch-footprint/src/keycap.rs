use std::fmt;
use std::str::FromStr;

use keyswitch_geometry::primitives::{bounds, close_ring, rectangle};
use keyswitch_geometry::Point;
use serde::{Deserialize, Serialize};

use crate::error::FootprintError;
use crate::node::{layer, Footprint};

const KEYCAP_WIDTH: f64 = 0.1;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeycapType {
    #[default]
    Regular,
    /// ISO enter: 1.5u wide on the top row, 1.25u on the bottom row.
    Iso,
}

impl FromStr for KeycapType {
    type Err = FootprintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "regular" => Ok(Self::Regular),
            "iso" => Ok(Self::Iso),
            other => Err(FootprintError::UnsupportedKeycapType(other.to_string())),
        }
    }
}

impl fmt::Display for KeycapType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Regular => "regular",
            Self::Iso => "iso",
        })
    }
}

/// Key pitch in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spacing {
    pub x: f64,
    pub y: f64,
}

impl Spacing {
    #[must_use]
    pub const fn uniform(pitch: f64) -> Self {
        Self { x: pitch, y: pitch }
    }
}

/// A keycap entry of the library configuration, in keyboard units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KeycapPreset {
    #[serde(default)]
    pub keycap_type: KeycapType,
    pub width: f64,
    #[serde(default = "one")]
    pub height: f64,
    #[serde(default)]
    pub rotation: f64,
}

fn one() -> f64 {
    1.0
}

impl KeycapPreset {
    #[must_use]
    pub fn regular(width: f64) -> Self {
        Self {
            keycap_type: KeycapType::Regular,
            width,
            height: 1.0,
            rotation: 0.0,
        }
    }

    #[must_use]
    pub fn rotated(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }
}

/// Keycap outline drawn on `Dwgs.User` around the switch origin.
#[derive(Debug, Clone, PartialEq)]
pub struct Keycap {
    keycap_type: KeycapType,
    width: f64,
    height: f64,
    rotation: f64,
    spacing: Spacing,
}

impl Keycap {
    /// # Errors
    ///
    /// Rejects non-positive sizes and rotations that are not a multiple of 90 degrees.
    pub fn new(
        keycap_type: KeycapType,
        width: f64,
        height: f64,
        rotation: f64,
        spacing: Spacing,
    ) -> Result<Self, FootprintError> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(FootprintError::InvalidKeycapSize { width, height });
        }
        if !rotation.is_finite() || rotation % 90.0 != 0.0 {
            return Err(FootprintError::UnsupportedRotation(rotation));
        }
        Ok(Self {
            keycap_type,
            width,
            height,
            rotation: rotation.rem_euclid(360.0),
            spacing,
        })
    }

    /// # Errors
    ///
    /// See [`Keycap::new`].
    pub fn regular(width: f64, spacing: Spacing) -> Result<Self, FootprintError> {
        Self::new(KeycapType::Regular, width, 1.0, 0.0, spacing)
    }

    /// # Errors
    ///
    /// See [`Keycap::new`].
    pub fn from_preset(preset: &KeycapPreset, spacing: Spacing) -> Result<Self, FootprintError> {
        Self::new(
            preset.keycap_type,
            preset.width,
            preset.height,
            preset.rotation,
            spacing,
        )
    }

    #[must_use]
    pub fn keycap_type(&self) -> KeycapType {
        self.keycap_type
    }

    /// Footprint name suffix, e.g. `1.25u` or `2.00u_90deg`.
    #[must_use]
    pub fn name(&self) -> String {
        let mut name = self.base_label();
        if self.rotation != 0.0 {
            name.push_str(&format!("_{}deg", self.rotation));
        }
        name
    }

    /// Tag words, e.g. `2.00u 90deg`.
    #[must_use]
    pub fn tags(&self) -> String {
        let mut tags = self.base_label();
        if self.rotation != 0.0 {
            tags.push_str(&format!(" {}deg", self.rotation));
        }
        tags
    }

    fn base_label(&self) -> String {
        match self.keycap_type {
            KeycapType::Regular => format!("{:.2}u", self.width),
            KeycapType::Iso => "ISO".to_string(),
        }
    }

    /// Closed outline in footprint coordinates.
    #[must_use]
    pub fn outline(&self) -> Vec<Point> {
        let (ux, uy) = (self.spacing.x, self.spacing.y);
        match self.keycap_type {
            KeycapType::Regular => close_ring(rectangle(
                Point::ORIGIN,
                (self.width * ux, self.height * uy),
                self.rotation,
            )),
            KeycapType::Iso => {
                // Lower part is 1.25/1.5 of the full width with the stem at its middle. The
                // upper row overhangs to the left.
                let (w, h) = (self.width * ux, self.height * uy);
                let lower = w * 1.25 / 1.5;
                let (left, right) = (lower / 2.0 - w, lower / 2.0);
                let outline = [
                    [left, -h / 2.0],
                    [right, -h / 2.0],
                    [right, h / 2.0],
                    [-lower / 2.0, h / 2.0],
                    [-lower / 2.0, 0.0],
                    [left, 0.0],
                    [left, -h / 2.0],
                ];
                outline
                    .iter()
                    .map(|&p| Point::from(p).rotated(self.rotation, Point::ORIGIN))
                    .collect()
            }
        }
    }

    pub(crate) fn append_to(&self, footprint: &mut Footprint) {
        let outline = self.outline();
        match self.keycap_type {
            KeycapType::Regular => {
                if let Some((lo, hi)) = bounds(&outline) {
                    footprint.shapes().rect(lo, hi, layer::DWGS_USER, KEYCAP_WIDTH);
                }
            }
            KeycapType::Iso => {
                footprint
                    .shapes()
                    .polyline(outline, layer::DWGS_USER, KEYCAP_WIDTH);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn names_and_tags() {
        let k = Keycap::regular(1.25, Spacing::uniform(19.0)).unwrap();
        assert_eq!(k.name(), "1.25u");
        assert_eq!(k.tags(), "1.25u");

        let r = Keycap::from_preset(&KeycapPreset::regular(2.0).rotated(90.0), Spacing::uniform(19.0))
            .unwrap();
        assert_eq!(r.name(), "2.00u_90deg");
        assert_eq!(r.tags(), "2.00u 90deg");
    }

    #[test]
    fn rotated_outline_swaps_extents() {
        let k = Keycap::new(KeycapType::Regular, 2.0, 1.0, 90.0, Spacing { x: 19.0, y: 18.5 }).unwrap();
        let (lo, hi) = bounds(&k.outline()).unwrap();
        assert_abs_diff_eq!(hi.x - lo.x, 18.5, epsilon = 1e-9);
        assert_abs_diff_eq!(hi.y - lo.y, 38.0, epsilon = 1e-9);
    }

    #[test]
    fn iso_outline_spans_two_rows() {
        let k = Keycap::new(KeycapType::Iso, 1.5, 2.0, 0.0, Spacing::uniform(19.0)).unwrap();
        let outline = k.outline();
        assert_eq!(outline.first(), outline.last());
        let (lo, hi) = bounds(&outline).unwrap();
        assert_abs_diff_eq!(hi.x - lo.x, 1.5 * 19.0, epsilon = 1e-9);
        assert_abs_diff_eq!(hi.y - lo.y, 2.0 * 19.0, epsilon = 1e-9);
        assert_eq!(k.name(), "ISO");
    }

    #[test]
    fn iso_outline_scales_with_size() {
        let k = Keycap::new(KeycapType::Iso, 2.25, 3.0, 0.0, Spacing::uniform(19.0)).unwrap();
        let outline = k.outline();
        let (lo, hi) = bounds(&outline).unwrap();
        assert_abs_diff_eq!(hi.x - lo.x, 42.75, epsilon = 1e-9);
        assert_abs_diff_eq!(hi.y - lo.y, 57.0, epsilon = 1e-9);
        // lower part is 1.875u wide and centered on the stem
        assert_abs_diff_eq!(outline[2].x, 17.8125, epsilon = 1e-9);
        assert_abs_diff_eq!(outline[3].x, -17.8125, epsilon = 1e-9);
    }

    #[test]
    fn iso_default_size_keeps_classic_enter_shape() {
        let k = Keycap::new(KeycapType::Iso, 1.5, 2.0, 0.0, Spacing::uniform(19.0)).unwrap();
        let outline = k.outline();
        assert_abs_diff_eq!(outline[0].x, -0.875 * 19.0, epsilon = 1e-9);
        assert_abs_diff_eq!(outline[1].x, 0.625 * 19.0, epsilon = 1e-9);
        assert_abs_diff_eq!(outline[4].x, -0.625 * 19.0, epsilon = 1e-9);
        assert_abs_diff_eq!(outline[0].y, -19.0, epsilon = 1e-9);
    }

    #[test]
    fn rejects_odd_rotation_and_sizes() {
        let s = Spacing::uniform(19.0);
        assert!(matches!(
            Keycap::new(KeycapType::Regular, 1.0, 1.0, 45.0, s),
            Err(FootprintError::UnsupportedRotation(_))
        ));
        assert!(matches!(
            Keycap::new(KeycapType::Regular, 0.0, 1.0, 0.0, s),
            Err(FootprintError::InvalidKeycapSize { .. })
        ));
        assert!(matches!(
            "stepped".parse::<KeycapType>(),
            Err(FootprintError::UnsupportedKeycapType(_))
        ));
    }
}
