//! Shared testing utilities for vsf-setup CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const MANIFEST: &str = r#"{
    "name": "vs-flow-notebook",
    "version": "0.1.2",
    "description": "d",
    "author": "a"
}
"#;

/// Testing harness providing an isolated project directory.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    project: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create an empty project directory.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let project = root.path().join("vsf-notebook");
        fs::create_dir_all(&project).expect("Failed to create project directory");
        Self { root, project }
    }

    /// Create a project directory seeded with the default manifest.
    pub fn with_manifest() -> Self {
        let ctx = Self::new();
        ctx.write("package.json", MANIFEST);
        ctx
    }

    /// Path to the project directory.
    pub fn project(&self) -> &Path {
        &self.project
    }

    /// Build a command for invoking the compiled binary inside the project.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("vsf-setup").expect("Failed to locate vsf-setup binary");
        cmd.current_dir(&self.project);
        cmd
    }

    pub fn write(&self, relative: &str, content: &str) {
        let path = self.project.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(path, content).expect("Failed to write test file");
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.project.join(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    pub fn exists(&self, relative: &str) -> bool {
        self.project.join(relative).exists()
    }

    /// Contents of every file materialization writes into the project root.
    pub fn destination_snapshot(&self) -> Vec<(String, String)> {
        [
            "src/auto-generated.ts",
            "README.md",
            "package.json",
            "jest.config.ts",
            "tsconfig.json",
            "webpack.config.ts",
        ]
        .iter()
        .filter(|file| self.exists(file))
        .map(|file| (file.to_string(), self.read(file)))
        .collect()
    }
}
