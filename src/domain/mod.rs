pub mod config;
pub mod descriptor;
pub mod error;
pub mod generation;
pub mod manifest;
pub mod outcome;
pub mod package_spec;

pub use config::SetupConfig;
pub use descriptor::{AppDescriptor, PipelineConfig};
pub use error::AppError;
pub use generation::{Generation, TEMPLATE_DIR, TemplateCopy, TemplateFileSet};
pub use manifest::{MANIFEST_FILE, PackageManifest};
pub use outcome::{MaterializeOutcome, WrittenFile};
pub use package_spec::PackageSpec;
