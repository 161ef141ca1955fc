//! Error types
//!
//! Physics and clamping paths are infallible; errors only come from the
//! vector helpers, the camera boundary and configuration loading.

use std::fmt;

/// Error from the element-wise vector helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorError {
    /// `add_tuples` was given no operands
    EmptyInput,
    /// Operands differ in length
    ArityMismatch { expected: usize, found: usize },
}

impl fmt::Display for VectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VectorError::EmptyInput => write!(f, "need at least one tuple to add, given 0"),
            VectorError::ArityMismatch { expected, found } => write!(
                f,
                "all tuples must be of same length, found length {} and {}",
                expected, found
            ),
        }
    }
}

impl std::error::Error for VectorError {}

/// Error from a paddle controller's input phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControllerError {
    /// Capture device is closed or a frame could not be read
    CameraUnavailable,
}

impl fmt::Display for ControllerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControllerError::CameraUnavailable => {
                write!(f, "camera is not open or a frame could not be read")
            }
        }
    }
}

impl std::error::Error for ControllerError {}

/// Error loading or validating a [`crate::Config`].
#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "JSON parse error: {}", e),
            SettingsError::Invalid(msg) => write!(f, "invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(e) => Some(e),
            SettingsError::Parse(e) => Some(e),
            SettingsError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(err: std::io::Error) -> Self {
        SettingsError::Io(err)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(err: serde_json::Error) -> Self {
        SettingsError::Parse(err)
    }
}
