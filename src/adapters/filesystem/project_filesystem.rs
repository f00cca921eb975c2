//! `ProjectFilesystem` implementation for `FilesystemStore`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::ProjectFilesystem;

use super::FilesystemStore;

impl ProjectFilesystem for FilesystemStore {
    fn root(&self) -> &Path {
        &self.root
    }

    fn read_file(&self, path: &str) -> Result<String, AppError> {
        let full_path = self.resolve_path(path);
        self.validate_path_within_root(&full_path)?;
        fs::read_to_string(full_path).map_err(AppError::from)
    }

    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError> {
        let full_path = self.resolve_path(path);
        self.validate_path_within_root(&full_path)?;
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(full_path, content).map_err(AppError::from)
    }

    fn copy_file(&self, source: &str, destination: &str) -> Result<(), AppError> {
        let source_path = self.resolve_path(source);
        let destination_path = self.resolve_path(destination);
        self.validate_path_within_root(&source_path)?;
        self.validate_path_within_root(&destination_path)?;

        let copy_error = |e: std::io::Error| AppError::Copy {
            source_path: source.to_string(),
            destination: destination.to_string(),
            reason: e.to_string(),
        };

        if let Some(parent) = destination_path.parent() {
            fs::create_dir_all(parent).map_err(copy_error)?;
        }
        fs::copy(&source_path, &destination_path).map(|_| ()).map_err(copy_error)
    }

    fn file_exists(&self, path: &str) -> bool {
        let full_path = self.resolve_path(path);
        if self.validate_path_within_root(&full_path).is_err() {
            return false;
        }
        full_path.exists()
    }

    fn resolve_path(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store() -> (TempDir, FilesystemStore) {
        let dir = TempDir::new().expect("failed to create temp dir");
        let store = FilesystemStore::new(dir.path().to_path_buf());
        (dir, store)
    }

    #[test]
    fn write_creates_parent_directories() {
        let (_dir, store) = store();
        store.write_file(".template/src/auto-generated.ts", "export {}\n").unwrap();
        assert_eq!(store.read_file(".template/src/auto-generated.ts").unwrap(), "export {}\n");
    }

    #[test]
    fn copy_overwrites_existing_destination() {
        let (_dir, store) = store();
        store.write_file(".template/README.md", "fresh").unwrap();
        store.write_file("README.md", "hand edited").unwrap();

        store.copy_file(".template/README.md", "README.md").unwrap();
        assert_eq!(store.read_file("README.md").unwrap(), "fresh");
    }

    #[test]
    fn copy_of_missing_source_is_a_copy_error() {
        let (_dir, store) = store();
        let err = store.copy_file(".template/jest.config.ts", "jest.config.ts").unwrap_err();
        match err {
            AppError::Copy { source_path, destination, .. } => {
                assert_eq!(source_path, ".template/jest.config.ts");
                assert_eq!(destination, "jest.config.ts");
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(!store.file_exists("jest.config.ts"));
    }

    #[test]
    fn copy_onto_a_directory_is_a_copy_error() {
        let (_dir, store) = store();
        store.write_file(".template/README.md", "fresh").unwrap();
        store.write_file("README.md/keep", "x").unwrap();

        let err = store.copy_file(".template/README.md", "README.md").unwrap_err();
        assert!(matches!(
            err,
            AppError::Copy { ref destination, .. } if destination == "README.md"
        ));
    }

    #[cfg(unix)]
    #[test]
    fn copy_onto_read_only_destination_is_a_copy_error() {
        use std::os::unix::fs::PermissionsExt;

        let (dir, store) = store();
        store.write_file(".template/README.md", "fresh").unwrap();
        store.write_file("README.md", "locked").unwrap();
        let destination = dir.path().join("README.md");
        fs::set_permissions(&destination, fs::Permissions::from_mode(0o444)).unwrap();

        // Privileged users bypass file modes.
        if fs::OpenOptions::new().write(true).open(&destination).is_ok() {
            return;
        }

        let err = store.copy_file(".template/README.md", "README.md").unwrap_err();
        match err {
            AppError::Copy { source_path, destination, reason } => {
                assert_eq!(source_path, ".template/README.md");
                assert_eq!(destination, "README.md");
                assert!(!reason.is_empty());
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(store.read_file("README.md").unwrap(), "locked");
    }

    #[test]
    fn rejects_paths_outside_root() {
        let (_dir, store) = store();
        assert!(matches!(
            store.write_file("../escape.txt", "x"),
            Err(AppError::PathTraversal(_))
        ));
        assert!(!store.file_exists("../escape.txt"));
    }
}
