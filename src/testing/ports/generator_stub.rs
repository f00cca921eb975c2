//! Test double for `ScaffoldGenerator`.

use std::sync::{Arc, Mutex};

use crate::domain::{AppError, PackageSpec};
use crate::ports::{ProjectFilesystem, ScaffoldGenerator};

/// Generator that writes a fixed set of files and records the specs it was given.
#[derive(Clone, Debug, Default)]
pub struct FakeGenerator {
    outputs: Vec<(String, String)>,
    failure: Option<String>,
    received: Arc<Mutex<Vec<PackageSpec>>>,
}

impl FakeGenerator {
    /// Generator writing `(path, content)` pairs, relative to the project root.
    pub fn writing(outputs: &[(&str, &str)]) -> Self {
        Self {
            outputs: outputs.iter().map(|(p, c)| (p.to_string(), c.to_string())).collect(),
            ..Self::default()
        }
    }

    /// Generator that always fails with `message`.
    pub fn failing(message: &str) -> Self {
        Self { failure: Some(message.to_string()), ..Self::default() }
    }

    /// Specs passed to `generate`, in call order.
    pub fn received(&self) -> Vec<PackageSpec> {
        self.received.lock().unwrap().clone()
    }
}

impl ScaffoldGenerator for FakeGenerator {
    fn generate(&self, spec: &PackageSpec, files: &dyn ProjectFilesystem) -> Result<(), AppError> {
        self.received.lock().unwrap().push(spec.clone());
        if let Some(message) = &self.failure {
            return Err(AppError::Generation(message.clone()));
        }
        for (path, content) in &self.outputs {
            files.write_file(path, content)?;
        }
        Ok(())
    }
}
