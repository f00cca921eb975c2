//! Report of a materialization run.

use sha2::{Digest, Sha256};

use crate::domain::Generation;

/// A destination file written during materialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    /// Path relative to the project root.
    pub path: String,
    /// SHA-256 of the new content, lowercase hex.
    pub sha256: String,
}

/// Files written by a materialization run, in copy order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterializeOutcome {
    pub generation: Generation,
    pub files: Vec<WrittenFile>,
}

impl MaterializeOutcome {
    pub fn new(generation: Generation) -> Self {
        Self { generation, files: Vec::new() }
    }

    pub fn record(&mut self, path: &str, content: &[u8]) {
        self.files.push(WrittenFile { path: path.to_string(), sha256: hash_content(content) });
    }

    #[cfg(test)]
    pub fn paths(&self) -> Vec<&str> {
        self.files.iter().map(|file| file.path.as_str()).collect()
    }
}

pub fn hash_content(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    let digest = hasher.finalize();
    digest.iter().map(|byte| format!("{:02x}", byte)).collect()
}
