use keyswitch_geometry::GeometryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FootprintError {
    #[error("switch type {0} not supported")]
    UnsupportedSwitchType(String),

    #[error("cutout type {0} not supported")]
    UnsupportedCutout(String),

    #[error("keycap type {0} not supported")]
    UnsupportedKeycapType(String),

    #[error("keycap rotation {0} not supported (expected a multiple of 90 degrees)")]
    UnsupportedRotation(f64),

    #[error("invalid keycap size {width}u x {height}u")]
    InvalidKeycapSize { width: f64, height: f64 },

    #[error("{0} is not a valid stabilizer size")]
    UnsupportedStabilizerSize(f64),

    #[error("hotswap plated switch must be hotswap")]
    PlatedRequiresHotswap,

    #[error("unknown keycap preset \"{0}\"")]
    UnknownKeycap(String),

    #[error("duplicate footprint \"{name}\" in group \"{group}\"")]
    DuplicateFootprint { group: String, name: String },

    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
