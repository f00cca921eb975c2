pub mod filesystem;
pub mod json_pipeline;
pub mod template_generator;

pub use filesystem::FilesystemStore;
pub use json_pipeline::JsonPipeline;
pub use template_generator::EmbeddedTemplateGenerator;
