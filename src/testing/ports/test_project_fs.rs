//! Test double for `ProjectFilesystem`.

use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::ProjectFilesystem;

use super::test_files::TestFiles;

/// In-memory implementation of `ProjectFilesystem` for unit tests.
#[derive(Clone, Debug)]
pub struct MockProjectFs {
    root: PathBuf,
    files: TestFiles,
}

impl Default for MockProjectFs {
    fn default() -> Self {
        Self::with_files(TestFiles::new())
    }
}

impl MockProjectFs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_files(files: TestFiles) -> Self {
        Self { root: PathBuf::from("/project"), files }
    }
}

impl ProjectFilesystem for MockProjectFs {
    fn root(&self) -> &Path {
        &self.root
    }

    fn read_file(&self, path: &str) -> Result<String, AppError> {
        self.files.get(path).ok_or_else(|| {
            AppError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "Mock file not found"))
        })
    }

    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError> {
        self.files.add(path, content);
        Ok(())
    }

    fn copy_file(&self, source: &str, destination: &str) -> Result<(), AppError> {
        let content = self.files.get(source).ok_or_else(|| AppError::Copy {
            source_path: source.to_string(),
            destination: destination.to_string(),
            reason: "Mock file not found".to_string(),
        })?;
        self.files.add(destination, &content);
        Ok(())
    }

    fn file_exists(&self, path: &str) -> bool {
        let files = self.files.files.lock().unwrap();
        if files.contains_key(path) {
            return true;
        }
        let prefix = if path.ends_with('/') { path.to_string() } else { format!("{}/", path) };
        files.keys().any(|k| k.starts_with(&prefix))
    }

    fn resolve_path(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }
}
