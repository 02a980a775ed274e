use std::fmt;
use std::process::ExitCode;

use keyswitch_footprint::FootprintError;

/// Exit status of `keyswitch-generator` when it fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Bad flags or arguments.
    Usage = 1,
    /// Library config missing or malformed.
    Input = 2,
    /// A footprint could not be built or a `.kicad_mod` file could not be written.
    Processing = 3,
}

#[derive(Debug)]
pub struct CliError {
    pub code: ErrorCode,
    pub message: String,
}

impl CliError {
    fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn usage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Usage, message)
    }

    pub fn input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Input, message)
    }

    pub fn processing(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Processing, message)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<&CliError> for ExitCode {
    fn from(err: &CliError) -> Self {
        ExitCode::from(err.code as u8)
    }
}

impl From<FootprintError> for CliError {
    fn from(err: FootprintError) -> Self {
        Self::processing(err.to_string())
    }
}

/// I/O failures carry their context chain, e.g. `Could not write ...: Permission denied`.
impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        Self::processing(format!("{err:#}"))
    }
}
