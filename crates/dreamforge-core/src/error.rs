//! Error types for DreamForge

use thiserror::Error;

/// Main error type for DreamForge operations
#[derive(Error, Debug)]
pub enum DreamError {
    /// Generation was requested with a blank game idea
    #[error("Game idea is empty: enter an idea before generating")]
    EmptyIdea,

    /// The optional image generator failed for one prompt
    #[error("Image generation failed: {0}")]
    ImageGeneration(String),

    /// A document exporter could not serialize the concept
    #[error("Export error: {0}")]
    Export(String),

    /// Unknown export format name or file extension
    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    /// Configuration file could not be parsed
    #[error("Config error: {0}")]
    Config(String),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using DreamError
pub type DreamResult<T> = Result<T, DreamError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DreamError::UnsupportedFormat("docx".to_string());
        assert_eq!(format!("{}", err), "Unsupported export format: docx");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: DreamError = io_err.into();
        assert!(matches!(err, DreamError::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: DreamError = json_err.into();
        assert!(matches!(err, DreamError::Serialization(_)));
    }
}
