//! Seam to the packaging pipeline that builds and publishes the application.

use std::path::{Path, PathBuf};

use tracing::Span;

use crate::domain::{AppError, PipelineConfig};

/// Host environment handle. Passed through untouched.
#[derive(Debug, Clone)]
pub struct ShellEnvironment {
    project_root: PathBuf,
}

impl ShellEnvironment {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self { project_root: project_root.into() }
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }
}

/// Tracing context for one pipeline request.
#[derive(Debug, Clone)]
pub struct BuildContext {
    span: Span,
}

impl BuildContext {
    pub fn new(label: &str) -> Self {
        Self { span: tracing::info_span!("pipeline", target = label) }
    }

    pub fn span(&self) -> &Span {
        &self.span
    }
}

/// Port for the packaging pipeline.
pub trait PackagingPipeline {
    /// Result produced by the pipeline.
    type Output;

    /// Run the pipeline for `config`.
    fn run(&self, config: PipelineConfig, context: &BuildContext) -> Result<Self::Output, AppError>;
}
