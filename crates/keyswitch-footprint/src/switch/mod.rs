//! Switch and stabilizer footprint variants.
//!
//! Each variant validates its options at construction and assembles its [`Footprint`] on
//! demand. Shared identity handling lives in [`SwitchBase`]; shared shapes come from
//! [`ShapeBuilder`](crate::shapes::ShapeBuilder).

mod alps_matias;
mod cherry_mx;
mod hotswap_kailh;
mod hybrid;
mod kailh;
mod kailh_choc;
mod stabilizer;

use std::fmt;
use std::str::FromStr;

use keyswitch_geometry::Point;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::FootprintError;
use crate::keycap::Keycap;
use crate::node::{layer, Footprint, Model, Node, TextKind};

pub use alps_matias::AlpsMatias;
pub use cherry_mx::{CherryMx, MxMount};
pub use hotswap_kailh::HotswapKailhMx;
pub use hybrid::HybridCherryMxAlps;
pub use kailh::{KailhChocMini, KailhKh, KailhNb};
pub use kailh_choc::{ChocType, KailhChoc};
pub use stabilizer::{StabilizerCherryMx, STABILIZER_SIZES};

const DEFAULT_TEXT_OFFSET: f64 = 8.0;

/// Anything that assembles a footprint.
pub trait FootprintGenerator {
    /// # Errors
    ///
    /// Fails when a derived outline cannot be computed.
    fn footprint(&self) -> Result<Footprint, FootprintError>;
}

/// Plate cutout drawn on `Eco1.User`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CutoutStyle {
    Simple,
    /// Cutout with side notches so the switch can be opened while mounted.
    Relief,
}

impl CutoutStyle {
    /// Parse an optional style name; `None` means no cutout.
    ///
    /// # Errors
    ///
    /// [`FootprintError::UnsupportedCutout`] for unknown names.
    pub fn parse_optional(s: Option<&str>) -> Result<Option<Self>, FootprintError> {
        s.map(str::parse).transpose()
    }
}

impl FromStr for CutoutStyle {
    type Err = FootprintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "simple" => Ok(Self::Simple),
            "relief" => Ok(Self::Relief),
            other => Err(FootprintError::UnsupportedCutout(other.to_string())),
        }
    }
}

impl fmt::Display for CutoutStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Simple => "simple",
            Self::Relief => "relief",
        })
    }
}

/// Options every switch variant accepts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SwitchOptions {
    pub keycap: Option<Keycap>,
    /// Directory prefix of 3D models, usually containing a KiCad path variable.
    pub path3d: Option<String>,
    /// Overrides the variant's default model file name.
    pub model3d: Option<String>,
}

impl SwitchOptions {
    #[must_use]
    pub fn with_keycap(mut self, keycap: Option<Keycap>) -> Self {
        self.keycap = keycap;
        self
    }

    #[must_use]
    pub fn with_path3d(mut self, path3d: impl Into<String>) -> Self {
        self.path3d = Some(path3d.into());
        self
    }
}

/// Join a model file name onto the optional model directory.
#[must_use]
pub fn model_path(path3d: Option<&str>, model3d: &str) -> String {
    match path3d {
        None | Some("") => model3d.to_string(),
        Some(dir) if dir.ends_with('/') => format!("{dir}{model3d}"),
        Some(dir) => format!("{dir}/{model3d}"),
    }
}

/// Identity and generic nodes shared by every switch footprint.
#[derive(Debug, Clone)]
pub(crate) struct SwitchBase<'a> {
    pub name: String,
    pub description: String,
    pub tags: String,
    pub cutout: bool,
    pub keycap: Option<&'a Keycap>,
    /// Full model path, already joined with the model directory.
    pub model: Option<String>,
    pub text_offset: f64,
}

impl<'a> SwitchBase<'a> {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        tags: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            tags: tags.into(),
            cutout: false,
            keycap: None,
            model: None,
            text_offset: DEFAULT_TEXT_OFFSET,
        }
    }

    pub fn cutout(mut self, cutout: bool) -> Self {
        self.cutout = cutout;
        self
    }

    pub fn keycap(mut self, keycap: Option<&'a Keycap>) -> Self {
        self.keycap = keycap;
        self
    }

    pub fn model(mut self, model: Option<String>) -> Self {
        self.model = model;
        self
    }

    pub fn text_offset(mut self, text_offset: f64) -> Self {
        self.text_offset = text_offset;
        self
    }

    /// Footprint carrying the composed identity, the reference/value/user texts and the model.
    pub fn build(self) -> Footprint {
        let mut name = self.name;
        let mut description = self.description;
        let mut tags = self.tags;

        if self.cutout {
            tags.push_str(" Cutout");
        }
        if let Some(keycap) = self.keycap {
            name.push('_');
            name.push_str(&keycap.name());
            description.push_str(&format!(" with {} keycap", keycap.tags()));
            tags.push(' ');
            tags.push_str(&keycap.tags());
        }
        let name = name.replace(' ', "_");
        debug!(footprint = %name, "assembling footprint");

        let mut fp = Footprint::new(name.clone(), description, tags);
        fp.push(Node::Text {
            kind: TextKind::Reference,
            text: "REF**".to_string(),
            at: Point::new(0.0, -self.text_offset),
            layer: layer::F_SILKS,
        });
        fp.push(Node::Text {
            kind: TextKind::Value,
            text: name,
            at: Point::new(0.0, self.text_offset),
            layer: layer::F_FAB,
        });
        fp.push(Node::Text {
            kind: TextKind::User,
            text: "%R".to_string(),
            at: Point::ORIGIN,
            layer: layer::F_FAB,
        });
        if let Some(model) = self.model {
            fp.push(Node::Model(Model::new(model)));
        }
        fp
    }
}

/// Appends the keycap outline when one was requested.
pub(crate) fn finish_with_keycap(mut fp: Footprint, keycap: Option<&Keycap>) -> Footprint {
    if let Some(keycap) = keycap {
        keycap.append_to(&mut fp);
    }
    fp
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_path_joins_with_single_separator() {
        assert_eq!(model_path(None, "a.wrl"), "a.wrl");
        assert_eq!(model_path(Some("${X}/3d/"), "a.wrl"), "${X}/3d/a.wrl");
        assert_eq!(model_path(Some("${X}/3d"), "a.wrl"), "${X}/3d/a.wrl");
    }

    #[test]
    fn cutout_style_parsing() {
        assert_eq!(CutoutStyle::parse_optional(None).unwrap(), None);
        assert_eq!(
            CutoutStyle::parse_optional(Some("relief")).unwrap(),
            Some(CutoutStyle::Relief)
        );
        assert!(matches!(
            CutoutStyle::parse_optional(Some("fancy")),
            Err(FootprintError::UnsupportedCutout(s)) if s == "fancy"
        ));
    }

    #[test]
    fn base_composes_identity_and_generic_nodes() {
        let fp = SwitchBase::new("SW Test", "Test switch", "Test")
            .cutout(true)
            .model(Some("m.wrl".to_string()))
            .text_offset(9.0)
            .build();
        assert_eq!(fp.name, "SW_Test");
        assert_eq!(fp.tags, "Test Cutout");
        assert_eq!(fp.nodes.len(), 4);
        assert!(matches!(
            &fp.nodes[0],
            Node::Text { kind: TextKind::Reference, at, .. } if at.y == -9.0
        ));
        assert!(matches!(&fp.nodes[3], Node::Model(m) if m.path == "m.wrl"));
    }
}
