//! Project-level filesystem operations.
//!
//! Generic file I/O scoped to the project root. The materializer and the
//! scaffolding generator only touch files through this port.

use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Port for filesystem operations inside one project directory.
///
/// All `path` arguments are relative to the project root.
/// Implementations must reject paths that escape the root boundary.
pub trait ProjectFilesystem {
    /// The project root.
    fn root(&self) -> &Path;

    /// Read a file as UTF-8 text.
    fn read_file(&self, path: &str) -> Result<String, AppError>;

    /// Write UTF-8 content to a file, creating parent directories as needed.
    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError>;

    /// Copy `source` over `destination`, replacing any existing content.
    ///
    /// Fails with `AppError::Copy` when the source is missing or unreadable.
    fn copy_file(&self, source: &str, destination: &str) -> Result<(), AppError>;

    /// Check whether a file or directory exists.
    fn file_exists(&self, path: &str) -> bool;

    /// Resolve a relative path to an absolute path within the project root.
    fn resolve_path(&self, path: &str) -> PathBuf;
}
