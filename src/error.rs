//! Error types for the gesture recognition library.

use thiserror::Error;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// File I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Template with no symbol pairs
    #[error("Gesture template '{0}' has no symbol pairs")]
    EmptyTemplate(String),

    /// Template pair where both hands are wildcards
    #[error("Gesture template '{name}' has a fully wildcard pair at position {index}")]
    DegenerateTemplate {
        /// Template name
        name: String,
        /// Offset of the offending pair, oldest first
        index: usize,
    },

    /// Two templates registered under the same name
    #[error("Duplicate gesture template name: {0}")]
    DuplicateTemplateName(String),

    /// Skeleton recording could not be parsed or is inconsistent
    #[error("Recording error: {0}")]
    RecordingError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Convenience type alias for Results with our Error type
pub type Result<T> = std::result::Result<T, Error>;
