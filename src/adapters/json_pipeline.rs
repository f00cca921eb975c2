//! Packaging pipeline that renders the configuration as JSON.

use crate::domain::{AppError, PipelineConfig};
use crate::ports::{BuildContext, PackagingPipeline};

/// Serializes the pipeline configuration for an external packaging step.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonPipeline {
    pretty: bool,
}

impl JsonPipeline {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl PackagingPipeline for JsonPipeline {
    type Output = String;

    fn run(&self, config: PipelineConfig, context: &BuildContext) -> Result<String, AppError> {
        let _entered = context.span().enter();
        tracing::debug!(
            packaged = ?config.publish_config.packaged_folders,
            "rendering pipeline config"
        );

        let rendered = if self.pretty {
            serde_json::to_string_pretty(&config)
        } else {
            serde_json::to_string(&config)
        };
        rendered.map_err(|e| {
            AppError::config_error(format!("Failed to serialize pipeline config: {}", e))
        })
    }
}
