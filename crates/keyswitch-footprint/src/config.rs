use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, FootprintError};
use crate::keycap::{Keycap, KeycapPreset, Spacing};
use crate::switch::{CutoutStyle, STABILIZER_SIZES};

pub const DEFAULT_PATH3D: &str =
    "${KICAD6_3RD_PARTY}/3dmodels/com_github_perigoso_keyswitch-kicad-library/3d-library.3dshapes/";

/// Round metric pitch, common on Preonic and other OLKB boards (19.05 is the imperial 0.75").
pub const MX_SPACING: f64 = 19.0;
pub const CHOC_SPACING: Spacing = Spacing { x: 19.0, y: 18.5 };

/// Settings of a library batch. Every field is optional in the YAML file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LibraryConfig {
    /// Directory prefix of every 3D model; `null` writes bare model file names.
    pub path3d: Option<String>,
    pub spacing: f64,
    pub choc_spacing: Spacing,
    /// Named keycap presets, kept in file order.
    pub keycaps: IndexMap<String, KeycapPreset>,
    /// Presets drawn over the MX-style switches.
    pub mx_keycaps: Vec<String>,
    /// Presets drawn over Choc switches.
    pub choc_keycaps: Vec<String>,
    pub mx_cutout: Option<CutoutStyle>,
    pub hotswap_cutout: Option<CutoutStyle>,
    pub stabilizer_sizes: Vec<f64>,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        let keycaps: IndexMap<String, KeycapPreset> = [
            ("1u", KeycapPreset::regular(1.0)),
            ("1.25u", KeycapPreset::regular(1.25)),
            ("1.25u90", KeycapPreset::regular(1.25).rotated(90.0)),
            ("1.5u", KeycapPreset::regular(1.5)),
            ("1.5u90", KeycapPreset::regular(1.5).rotated(90.0)),
            ("1.75u", KeycapPreset::regular(1.75)),
            ("1.75u90", KeycapPreset::regular(1.75).rotated(90.0)),
            ("2u", KeycapPreset::regular(2.0)),
            ("2u90", KeycapPreset::regular(2.0).rotated(90.0)),
        ]
        .into_iter()
        .map(|(name, preset)| (name.to_string(), preset))
        .collect();
        let mx_keycaps = keycaps.keys().cloned().collect();

        Self {
            path3d: Some(DEFAULT_PATH3D.to_string()),
            spacing: MX_SPACING,
            choc_spacing: CHOC_SPACING,
            keycaps,
            mx_keycaps,
            choc_keycaps: ["1u", "1.25u", "1.5u", "2u"].map(String::from).to_vec(),
            mx_cutout: Some(CutoutStyle::Simple),
            hotswap_cutout: Some(CutoutStyle::Relief),
            stabilizer_sizes: STABILIZER_SIZES.iter().map(|(size, _, _)| *size).collect(),
        }
    }
}

impl LibraryConfig {
    /// # Errors
    ///
    /// Malformed YAML, unknown fields or wrongly typed values.
    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        if source.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(source)?)
    }

    #[must_use]
    pub fn mx_spacing(&self) -> Spacing {
        Spacing::uniform(self.spacing)
    }

    /// Resolve a named preset at the given pitch.
    ///
    /// # Errors
    ///
    /// [`FootprintError::UnknownKeycap`] when the preset is missing, or the preset's own
    /// validation error.
    pub fn keycap(&self, name: &str, spacing: Spacing) -> Result<Keycap, FootprintError> {
        let preset = self
            .keycaps
            .get(name)
            .ok_or_else(|| FootprintError::UnknownKeycap(name.to_string()))?;
        Keycap::from_preset(preset, spacing)
    }

    /// Resolve a list of preset names in order.
    ///
    /// # Errors
    ///
    /// See [`LibraryConfig::keycap`].
    pub fn keycaps_for(&self, names: &[String], spacing: Spacing) -> Result<Vec<Keycap>, FootprintError> {
        names.iter().map(|name| self.keycap(name, spacing)).collect()
    }
}
