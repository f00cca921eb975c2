mod packaging_pipeline;
mod project_filesystem;
mod scaffold_generator;

pub use packaging_pipeline::{BuildContext, PackagingPipeline, ShellEnvironment};
pub use project_filesystem::ProjectFilesystem;
pub use scaffold_generator::ScaffoldGenerator;
