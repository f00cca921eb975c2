//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::PathBuf;

use crate::adapters::{EmbeddedTemplateGenerator, FilesystemStore, JsonPipeline};
use crate::app::commands::describe::PipelineFactory;
use crate::app::commands::materialize;
use crate::app::{AppContext, config};
use crate::ports::{BuildContext, ShellEnvironment};

pub use crate::domain::{AppError, Generation, MaterializeOutcome};

/// Materialize the template in the current directory.
pub fn materialize(generation: Option<Generation>) -> Result<MaterializeOutcome, AppError> {
    materialize_in(FilesystemStore::current()?, generation)
}

/// Materialize the template in the project at `path`.
///
/// `generation` overrides the one configured in `template.toml`.
pub fn materialize_at(
    path: impl Into<PathBuf>,
    generation: Option<Generation>,
) -> Result<MaterializeOutcome, AppError> {
    materialize_in(FilesystemStore::new(path.into()), generation)
}

fn materialize_in(
    store: FilesystemStore,
    generation: Option<Generation>,
) -> Result<MaterializeOutcome, AppError> {
    let ctx = AppContext::new(store, EmbeddedTemplateGenerator::new());
    let config = config::load_config(ctx.files())?;
    materialize::execute(&ctx, config.resolve_generation(generation))
}

/// Render the pipeline configuration of the project at `path` as JSON.
pub fn describe_at(path: impl Into<PathBuf>, pretty: bool) -> Result<String, AppError> {
    let environment = ShellEnvironment::new(path);
    let context = BuildContext::new(crate::domain::descriptor::DISPLAY_NAME);
    PipelineFactory::new(JsonPipeline::new(pretty)).get(&environment, &context)
}
