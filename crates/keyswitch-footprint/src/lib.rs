//! Keyswitch, keycap and stabilizer footprints for KiCad libraries.
//!
//! Switch variants assemble a [`Footprint`]: an ordered list of layer-tagged drawing nodes,
//! pads and 3D models. [`generate_library`] builds the stock batch of library groups from a
//! [`LibraryConfig`].

pub mod config;
pub mod error;
pub mod keycap;
pub mod library;
pub mod node;
pub mod shapes;
pub mod switch;

pub use config::LibraryConfig;
pub use error::{ConfigError, FootprintError};
pub use keycap::{Keycap, KeycapPreset, KeycapType, Spacing};
pub use library::{generate_library, LibraryGroup};
pub use node::{Attribute, Drill, Footprint, Model, Node, Pad, PadKind, PadShape, TextKind};
pub use switch::{CutoutStyle, FootprintGenerator, SwitchOptions};
