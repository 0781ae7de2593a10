//! Error types for the scan_cube library

use std::path::PathBuf;
use thiserror::Error;

use crate::cube::FaceId;
use crate::solver::Verdict;

/// Result type alias for scan_cube operations
pub type Result<T> = std::result::Result<T, ScanError>;

/// Error types for calibration, capture and solving operations
#[derive(Error, Debug)]
pub enum ScanError {
    /// Face or cube string has the wrong number of facelets
    #[error("Invalid length: expected {expected} facelets, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// Character outside the facelet alphabet
    #[error("Invalid facelet '{found}' at position {position}")]
    InvalidFacelet { found: char, position: usize },

    /// At least one facelet could not be matched to a calibrated color
    #[error("Unknown color detected in sample {sample}")]
    UnknownColorDetected { sample: String },

    /// Guided capture received a face other than the one it expects
    #[error("Face mismatch: expected {expected}, got {got}")]
    FaceMismatch { expected: FaceId, got: FaceId },

    /// Capture was requested before any frame was classified
    #[error("No face sample has been observed yet")]
    NothingObserved,

    /// Named calibration profile is absent from the store
    #[error("Profile not found: {name}")]
    ProfileNotFound { name: String },

    /// Profile store could not be read or written
    #[error("Profile store I/O error at {}", path.display())]
    ProfileIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Profile store document is malformed
    #[error("Malformed profile store at {}", path.display())]
    ProfileFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration file could not be loaded or saved
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Invalid input parameters
    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },

    /// Solver gateway refused to solve the cube
    #[error("Cube is not solvable: {verdict}")]
    NotSolvable { verdict: Verdict },
}

impl ScanError {
    /// Create a configuration error with context
    pub fn config<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ConfigError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(parameter: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            value: value.to_string(),
        }
    }

    /// Check if this error indicates a condition the operator can retry
    ///
    /// Store and configuration failures are the only hard failures.
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            ScanError::ProfileIo { .. }
                | ScanError::ProfileFormat { .. }
                | ScanError::ConfigError { .. }
        )
    }

    /// Get user-friendly error description for operator display
    pub fn user_message(&self) -> String {
        match self {
            ScanError::UnknownColorDetected { .. } => {
                "Capture failed: unknown color detected. Recalibrate or try again.".to_string()
            }
            ScanError::FaceMismatch { expected, .. } => {
                format!(
                    "Wrong face shown. Please capture the {} face ({} center).",
                    expected.name(),
                    expected.center_color().long_name()
                )
            }
            ScanError::NothingObserved => {
                "No camera frame has been classified yet. Wait for the preview.".to_string()
            }
            ScanError::ProfileNotFound { name } => {
                format!("No color profile named '{}'. Current colors kept.", name)
            }
            ScanError::NotSolvable { verdict } => verdict.to_string(),
            ScanError::InvalidLength { .. } | ScanError::InvalidFacelet { .. } => {
                "Cube data is malformed. Capture the face again.".to_string()
            }
            _ => "Operation failed. See the log for details.".to_string(),
        }
    }
}
