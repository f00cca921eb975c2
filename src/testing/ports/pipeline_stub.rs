//! Test double for `PackagingPipeline`.

use std::sync::{Arc, Mutex};

use crate::domain::{AppError, PipelineConfig};
use crate::ports::{BuildContext, PackagingPipeline};

/// Pipeline that records each configuration and returns the call count.
#[derive(Clone, Debug, Default)]
pub struct RecordingPipeline {
    configs: Arc<Mutex<Vec<PipelineConfig>>>,
}

impl RecordingPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn configs(&self) -> Vec<PipelineConfig> {
        self.configs.lock().unwrap().clone()
    }
}

impl PackagingPipeline for RecordingPipeline {
    type Output = usize;

    fn run(&self, config: PipelineConfig, _context: &BuildContext) -> Result<usize, AppError> {
        let mut configs = self.configs.lock().unwrap();
        configs.push(config);
        Ok(configs.len())
    }
}
