use crate::ports::{ProjectFilesystem, ScaffoldGenerator};

/// Application context holding dependencies for command execution.
pub struct AppContext<F: ProjectFilesystem, G: ScaffoldGenerator> {
    files: F,
    generator: G,
}

impl<F: ProjectFilesystem, G: ScaffoldGenerator> AppContext<F, G> {
    /// Create a new application context.
    pub fn new(files: F, generator: G) -> Self {
        Self { files, generator }
    }

    /// Get a reference to the project filesystem.
    pub fn files(&self) -> &F {
        &self.files
    }

    /// Get a reference to the scaffolding generator.
    pub fn generator(&self) -> &G {
        &self.generator
    }
}
