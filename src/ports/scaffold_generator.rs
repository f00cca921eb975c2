use crate::domain::{AppError, PackageSpec};
use crate::ports::ProjectFilesystem;

/// Port for the scaffolding generator.
///
/// Produces the template tree (under `.template/`) and whatever project
/// files are needed for the main module's entry file to exist.
pub trait ScaffoldGenerator {
    /// Generate scaffolding for `spec` into `files`.
    ///
    /// Failures surface as `AppError::Generation` and are not retried.
    fn generate(&self, spec: &PackageSpec, files: &dyn ProjectFilesystem) -> Result<(), AppError>;
}
