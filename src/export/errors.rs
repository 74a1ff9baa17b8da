//! Custom error types for the export pipeline

use std::fmt;
use std::io;

/// Export-specific error types
#[derive(Debug)]
pub enum ExportError {
    /// I/O error
    IoError(io::Error),
    /// Data URI missing a required delimiter or prefix
    MalformedDataUri(String),
    /// Data URI payload is not valid base64
    InvalidBase64(String),
    /// State document could not be serialized or deserialized
    DocumentError(serde_json::Error),
    /// Preset registry file could not be parsed
    InvalidPresetFile(String),
    /// Delivery sink failed to persist a payload
    DeliveryFailed(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::IoError(e) => write!(f, "I/O error: {}", e),
            ExportError::MalformedDataUri(msg) => write!(f, "Malformed data URI: {}", msg),
            ExportError::InvalidBase64(msg) => write!(f, "Invalid base64 payload: {}", msg),
            ExportError::DocumentError(e) => write!(f, "Document error: {}", e),
            ExportError::InvalidPresetFile(msg) => write!(f, "Invalid preset file: {}", msg),
            ExportError::DeliveryFailed(msg) => write!(f, "Delivery failed: {}", msg),
            ExportError::GenericError(msg) => write!(f, "Export error: {}", msg),
        }
    }
}

impl std::error::Error for ExportError {}

impl From<io::Error> for ExportError {
    fn from(error: io::Error) -> Self {
        ExportError::IoError(error)
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(error: serde_json::Error) -> Self {
        ExportError::DocumentError(error)
    }
}

impl From<String> for ExportError {
    fn from(msg: String) -> Self {
        ExportError::GenericError(msg)
    }
}

/// Result type for export operations
pub type ExportResult<T> = Result<T, ExportError>;
