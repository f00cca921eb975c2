//! Pipeline factory: hands the app descriptor to the packaging pipeline.

use crate::domain::{AppError, PipelineConfig};
use crate::ports::{BuildContext, PackagingPipeline, ShellEnvironment};

/// Builds the pipeline configuration on request and delegates to `P`.
#[derive(Debug, Clone)]
pub struct PipelineFactory<P: PackagingPipeline> {
    pipeline: P,
}

impl<P: PackagingPipeline> PipelineFactory<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Build a fresh configuration and run the pipeline with it.
    ///
    /// `environment` is not inspected; `context` is forwarded unchanged.
    pub fn get(
        &self,
        environment: &ShellEnvironment,
        context: &BuildContext,
    ) -> Result<P::Output, AppError> {
        tracing::debug!(root = %environment.project_root().display(), "building pipeline config");
        self.pipeline.run(PipelineConfig::build(), context)
    }
}
