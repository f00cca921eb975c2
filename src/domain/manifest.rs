//! Package manifest (`package.json`) fields consumed by materialization.

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// Manifest file name, relative to the project root.
pub const MANIFEST_FILE: &str = "package.json";

/// The subset of `package.json` that feeds the package specification.
///
/// Other keys in the file are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageManifest {
    pub name: String,
    pub version: String,
    pub description: String,
    pub author: String,
}

impl PackageManifest {
    /// Parse manifest content. `path` is only used for error reporting.
    pub fn parse(content: &str, path: &str) -> Result<Self, AppError> {
        serde_json::from_str(content)
            .map_err(|e| AppError::ManifestRead { path: path.to_string(), reason: e.to_string() })
    }
}
