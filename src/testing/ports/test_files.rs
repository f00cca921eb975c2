//! Shared in-memory file backing store for port-scoped test doubles.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

/// In-memory file storage shared across test doubles.
///
/// Tests seed files via this handle before passing the port doubles to
/// production code, then inspect the result through the same handle.
#[derive(Clone, Debug, Default)]
pub struct TestFiles {
    pub(crate) files: Arc<Mutex<BTreeMap<String, String>>>,
}

impl TestFiles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file into the in-memory store.
    pub fn add(&self, path: &str, content: &str) {
        self.files.lock().unwrap().insert(path.to_string(), content.to_string());
    }

    /// Content of a file, if present.
    pub fn get(&self, path: &str) -> Option<String> {
        self.files.lock().unwrap().get(path).cloned()
    }

    /// All stored paths, sorted.
    pub fn paths(&self) -> Vec<String> {
        self.files.lock().unwrap().keys().cloned().collect()
    }
}
