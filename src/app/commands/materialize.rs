//! Template materialization: manifest -> package spec -> scaffolding -> file copies.
//!
//! Every listed destination is overwritten on each run. Destination files are
//! generated artifacts; hand edits do not survive a run.

use crate::app::AppContext;
use crate::domain::{
    AppError, Generation, MANIFEST_FILE, MaterializeOutcome, PackageManifest, PackageSpec,
    TemplateCopy,
};
use crate::ports::{ProjectFilesystem, ScaffoldGenerator};

/// Run materialization for `generation` in the context's project.
///
/// Aborts on the first failure. Files copied before a failing copy stay on disk.
pub fn execute<F, G>(
    ctx: &AppContext<F, G>,
    generation: Generation,
) -> Result<MaterializeOutcome, AppError>
where
    F: ProjectFilesystem,
    G: ScaffoldGenerator,
{
    let files = ctx.files();
    tracing::info!(generation = %generation, root = %files.root().display(), "materializing");

    let manifest = load_manifest(files)?;
    let spec = PackageSpec::assemble(files.root(), &manifest, generation);
    spec.validate()?;
    tracing::info!(
        name = %spec.name,
        version = %spec.version,
        externals = spec.dependencies.run_time.externals.len(),
        "package spec assembled"
    );

    ctx.generator().generate(&spec, files).map_err(|e| match e {
        AppError::Generation(_) => e,
        other => AppError::Generation(other.to_string()),
    })?;
    tracing::info!("scaffolding generated");

    let template_files = generation.template_files();
    let mut outcome = MaterializeOutcome::new(generation);

    copy_template_file(files, template_files.core(), &mut outcome)?;
    for copy in template_files.listed() {
        copy_template_file(files, copy, &mut outcome)?;
    }

    tracing::info!(files = outcome.files.len(), "materialization complete");
    Ok(outcome)
}

/// Read the package manifest from the project root.
///
/// Errors name the manifest by its resolved path.
pub fn load_manifest<F: ProjectFilesystem>(files: &F) -> Result<PackageManifest, AppError> {
    let path = files.resolve_path(MANIFEST_FILE).display().to_string();
    if !files.file_exists(MANIFEST_FILE) {
        return Err(AppError::ManifestRead { path, reason: "file not found".to_string() });
    }

    let content = files
        .read_file(MANIFEST_FILE)
        .map_err(|e| AppError::ManifestRead { path: path.clone(), reason: e.to_string() })?;
    PackageManifest::parse(&content, &path)
}

fn copy_template_file<F: ProjectFilesystem>(
    files: &F,
    copy: &TemplateCopy,
    outcome: &mut MaterializeOutcome,
) -> Result<(), AppError> {
    files.copy_file(&copy.source, &copy.destination)?;
    let content = files.read_file(&copy.destination)?;
    tracing::debug!(source = %copy.source, destination = %copy.destination, "copied");
    outcome.record(&copy.destination, content.as_bytes());
    Ok(())
}
