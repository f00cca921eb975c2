//! Default scaffolding generator backed by embedded `minijinja` templates.

mod externals;
mod template_tree;

use include_dir::{Dir, include_dir};
use minijinja::context;
use serde::Serialize;

use crate::domain::package_spec::DependencyTable;
use crate::domain::{AppError, PackageSpec, TEMPLATE_DIR};
use crate::ports::{ProjectFilesystem, ScaffoldGenerator};

use self::externals::{ModuleExternal, api_key, exported_symbol, module_externals};
use self::template_tree::{TemplateRenderer, template_entries};

static TEMPLATE_ASSET_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/template");

const ENTRY_STUB: &str =
    "import { setup } from './auto-generated'\n\nexport const name = setup.name\n";

#[derive(Debug, Clone, Serialize)]
struct DependencyView {
    name: String,
    range: String,
}

#[derive(Debug, Clone, Serialize)]
struct ExternalView {
    name: String,
    range: String,
    api_key: String,
    symbol: String,
}

fn dependency_views<'a>(
    tables: impl IntoIterator<Item = &'a DependencyTable>,
) -> Vec<DependencyView> {
    tables
        .into_iter()
        .flat_map(|table| table.iter())
        .map(|(name, range)| DependencyView { name: name.clone(), range: range.clone() })
        .collect()
}

/// Renders the embedded template tree into `.template/`.
///
/// The entry module under `src/` is created when missing and otherwise left alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedTemplateGenerator;

impl EmbeddedTemplateGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Render every template asset for `spec`, returning `(relative path, content)` pairs.
    pub fn render(&self, spec: &PackageSpec) -> Result<Vec<(String, String)>, AppError> {
        let entries = template_entries(&TEMPLATE_ASSET_DIR)?;
        if entries.is_empty() {
            return Err(AppError::Generation("Template assets are empty".into()));
        }

        let renderer = TemplateRenderer::new(&TEMPLATE_ASSET_DIR);
        let ctx = render_context(spec)?;

        entries
            .iter()
            .map(|entry| renderer.render(entry, &ctx).map(|content| (entry.output_path(), content)))
            .collect()
    }
}

fn render_context(spec: &PackageSpec) -> Result<minijinja::Value, AppError> {
    let run_time = &spec.dependencies.run_time;

    let mut externals = Vec::with_capacity(run_time.externals.len());
    let mut globals: Vec<ModuleExternal> = Vec::new();
    for (name, range) in &run_time.externals {
        externals.push(ExternalView {
            name: name.clone(),
            range: range.clone(),
            api_key: api_key(range)?,
            symbol: exported_symbol(name).to_string(),
        });
        globals.extend(module_externals(name, range)?);
    }

    // The generated lookup maps are keyed by package, in name order.
    let mut exported_symbols = externals.clone();
    exported_symbols.sort_by(|a, b| a.name.cmp(&b.name));
    globals.sort_by(|a, b| a.module.cmp(&b.module));

    Ok(context! {
        name => &spec.name,
        version => &spec.version,
        description => &spec.short_description,
        author => &spec.author,
        user_guide => spec.user_guide,
        dev_port => spec.dev_server.port,
        entry_file => &spec.bundles.main_module.entry_file,
        load_dependencies => &spec.bundles.main_module.load_dependencies,
        api_version => api_key(&spec.version)?,
        externals => externals,
        exported_symbols => exported_symbols,
        module_externals => globals,
        included_in_bundle => dependency_views([&run_time.included_in_bundle]),
        dependencies => dependency_views([&run_time.externals, &run_time.included_in_bundle]),
        dev_dependencies => dependency_views([&spec.dependencies.dev_time]),
    })
}

fn entry_path(entry_file: &str) -> String {
    format!("src/{}", entry_file.trim_start_matches("./"))
}

impl ScaffoldGenerator for EmbeddedTemplateGenerator {
    fn generate(&self, spec: &PackageSpec, files: &dyn ProjectFilesystem) -> Result<(), AppError> {
        for (path, content) in self.render(spec)? {
            let target = format!("{}/{}", TEMPLATE_DIR, path);
            tracing::debug!(path = %target, "writing template file");
            files.write_file(&target, &content)?;
        }

        let entry = entry_path(&spec.bundles.main_module.entry_file);
        if !files.file_exists(&entry) {
            tracing::info!(path = %entry, "creating entry module");
            files.write_file(&entry, ENTRY_STUB)?;
        }
        Ok(())
    }
}
