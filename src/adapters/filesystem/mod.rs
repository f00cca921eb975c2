//! Filesystem adapter for `ProjectFilesystem`.
//!
//! `FilesystemStore` owns the project root path and enforces
//! path-traversal safety for every operation.

mod project_filesystem;

use std::path::{Component, Path, PathBuf};

use crate::domain::AppError;

/// Filesystem-backed store rooted at a project directory.
#[derive(Debug, Clone)]
pub struct FilesystemStore {
    root: PathBuf,
}

impl FilesystemStore {
    /// Create a store rooted at the given directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Create a store rooted at the current working directory.
    pub fn current() -> Result<Self, AppError> {
        let cwd = std::env::current_dir()?;
        Ok(Self::new(cwd))
    }
}

// ── Path safety ────────────────────────────────────────────────────────

impl FilesystemStore {
    /// Validates that a path (after logical normalization) is within the root.
    pub(crate) fn validate_path_within_root(&self, path: &Path) -> Result<(), AppError> {
        let full_path = if path.is_absolute() { path.to_path_buf() } else { self.root.join(path) };

        let normalized_path = normalize_path(&full_path);
        let normalized_root = normalize_path(&self.root);

        if !normalized_path.starts_with(&normalized_root) {
            return Err(AppError::PathTraversal(path.display().to_string()));
        }

        Ok(())
    }
}

/// Normalize path by resolving `.` and `..` components logically.
/// This does not access the filesystem.
pub(crate) fn normalize_path(path: &Path) -> PathBuf {
    let mut ret = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(..) | Component::RootDir => ret.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                ret.pop();
            }
            Component::Normal(c) => ret.push(c),
        }
    }
    ret
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    pub fn test_store() -> (TempDir, FilesystemStore) {
        let dir = TempDir::new().expect("failed to create temp dir");
        let store = FilesystemStore::new(dir.path().to_path_buf());
        (dir, store)
    }

    #[test]
    fn validate_path_prevents_traversal() {
        let (_dir, store) = test_store();

        let result = store.validate_path_within_root(&store.root.join("../package.json"));
        assert!(result.is_err(), "Should detect simple traversal");

        let result =
            store.validate_path_within_root(&store.root.join(".template/../../package.json"));
        assert!(result.is_err(), "Should detect traversal through non-existent components");

        let result = store.validate_path_within_root(&store.root.join("src/../package.json"));
        assert!(result.is_ok(), "Should allow .. that stays within root: {:?}", result.err());
    }

    #[test]
    fn current_store_is_rooted_at_working_directory() {
        let store = FilesystemStore::current().unwrap();
        assert_eq!(store.root, std::env::current_dir().unwrap());
    }

    #[test]
    fn normalize_path_resolves_dots() {
        assert_eq!(normalize_path(Path::new("/a/./b/../c")), PathBuf::from("/a/c"));
    }
}
