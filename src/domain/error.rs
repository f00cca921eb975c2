use std::io;

use thiserror::Error;

/// Library-wide error type for vsf-setup operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Package manifest is missing or not valid JSON with the required fields.
    #[error("Failed to read package manifest '{path}': {reason}")]
    ManifestRead { path: String, reason: String },

    /// Scaffolding generator failed.
    #[error("Scaffolding generation failed: {0}")]
    Generation(String),

    /// A template file could not be copied into the project.
    #[error("Failed to copy '{source_path}' to '{destination}': {reason}")]
    Copy { source_path: String, destination: String, reason: String },

    /// Assembled package specification violates an invariant.
    #[error("Invalid package specification: {0}")]
    InvalidPackageSpec(String),

    /// Unknown generation selector.
    #[error("Invalid generation '{0}': must be one of a, b")]
    InvalidGeneration(String),

    /// Path escapes the project root.
    #[error("Path traversal detected: {0}")]
    PathTraversal(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view of the failure.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::ManifestRead { .. }
            | AppError::InvalidPackageSpec(_)
            | AppError::InvalidGeneration(_)
            | AppError::PathTraversal(_)
            | AppError::TomlParseError(_) => io::ErrorKind::InvalidInput,
            AppError::Copy { .. } | AppError::Generation(_) => io::ErrorKind::Other,
        }
    }
}
