use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// The input cannot be treated as a simple closed polygon.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),
}

impl GeometryError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidGeometry(message.into())
    }
}
