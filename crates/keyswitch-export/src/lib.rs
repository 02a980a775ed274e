//! Output writers for assembled footprints.

pub mod kicad_mod;

pub use kicad_mod::{fmt_num, render_kicad_mod};
