//! The embedded template tree and the minijinja environment that renders it.
//!
//! Files ending in `.j2` are rendered and lose the suffix; every other file is
//! emitted as is. Templates are looked up lazily from the tree by path.

use include_dir::{Dir, DirEntry, File};
use minijinja::{AutoEscape, Environment, Value};

use crate::domain::AppError;

const TEMPLATE_SUFFIX: &str = ".j2";

/// One file of the template tree and the path it materializes to.
#[derive(Debug, Clone, Copy)]
pub struct TemplateEntry {
    file: &'static File<'static>,
    source: &'static str,
}

impl TemplateEntry {
    fn from_file(file: &'static File<'static>) -> Result<Self, AppError> {
        let source = file.path().to_str().ok_or_else(|| {
            AppError::Generation(format!(
                "Template path is not UTF-8: {}",
                file.path().to_string_lossy()
            ))
        })?;
        Ok(Self { file, source })
    }

    /// Path of the generated file, relative to the template output directory.
    pub fn output_path(&self) -> String {
        let path = self.source.strip_suffix(TEMPLATE_SUFFIX).unwrap_or(self.source);
        path.replace('\\', "/")
    }

    fn is_rendered(&self) -> bool {
        self.source.ends_with(TEMPLATE_SUFFIX)
    }

    fn verbatim(&self) -> Result<String, AppError> {
        self.file.contents_utf8().map(str::to_owned).ok_or_else(|| {
            AppError::Generation(format!("Template file is not UTF-8: {}", self.source))
        })
    }
}

/// Every file of `tree`, ordered by output path.
pub fn template_entries(tree: &'static Dir<'static>) -> Result<Vec<TemplateEntry>, AppError> {
    let mut entries = Vec::new();
    let mut pending = vec![tree];
    while let Some(dir) = pending.pop() {
        for entry in dir.entries() {
            match entry {
                DirEntry::Dir(child) => pending.push(child),
                DirEntry::File(file) => entries.push(TemplateEntry::from_file(file)?),
            }
        }
    }
    entries.sort_by_key(TemplateEntry::output_path);
    Ok(entries)
}

/// Quote a string as a JSON literal.
fn json_string(value: String) -> String {
    serde_json::Value::String(value).to_string()
}

/// Renders entries of one template tree against a shared context.
pub struct TemplateRenderer {
    env: Environment<'static>,
}

impl TemplateRenderer {
    pub fn new(tree: &'static Dir<'static>) -> Self {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        // Outputs are JSON, TypeScript and Markdown.
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.add_filter("json", json_string);
        env.set_loader(move |name| {
            Ok(tree.get_file(name).and_then(|file| file.contents_utf8()).map(str::to_owned))
        });
        Self { env }
    }

    /// Content of `entry` for `ctx`: rendered for `.j2` files, copied otherwise.
    pub fn render(&self, entry: &TemplateEntry, ctx: &Value) -> Result<String, AppError> {
        if !entry.is_rendered() {
            return entry.verbatim();
        }
        let template = self.env.get_template(entry.source).map_err(|e| {
            AppError::Generation(format!("Failed to load template '{}': {}", entry.source, e))
        })?;
        template.render(ctx).map_err(|e| {
            AppError::Generation(format!("Failed to render template '{}': {}", entry.source, e))
        })
    }
}
