//! In-memory package specification driving scaffolding generation.

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::Serialize;

use crate::domain::generation::{DependencyEntry, Generation};
use crate::domain::{AppError, PackageManifest};

/// Port the development server binds to.
pub const DEV_SERVER_PORT: u16 = 3014;

/// Entry file of the main bundle, relative to `src/`.
pub const MAIN_ENTRY_FILE: &str = "./index.ts";

/// Ordered `name -> version range` mapping.
pub type DependencyTable = IndexMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageType {
    Application,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunTimeDependencies {
    /// Loaded at run time from the CDN.
    pub externals: DependencyTable,
    /// Bundled with the application, pinned to exact versions.
    pub included_in_bundle: DependencyTable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dependencies {
    pub run_time: RunTimeDependencies,
    pub dev_time: DependencyTable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DevServer {
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MainModule {
    pub entry_file: String,
    pub load_dependencies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bundles {
    pub main_module: MainModule,
}

/// Package specification assembled from the manifest and a generation's tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageSpec {
    pub path: PathBuf,
    pub package_type: PackageType,
    pub name: String,
    pub version: String,
    pub short_description: String,
    pub author: String,
    pub dependencies: Dependencies,
    pub user_guide: bool,
    pub dev_server: DevServer,
    pub bundles: Bundles,
}

fn table(entries: &[DependencyEntry]) -> DependencyTable {
    entries.iter().map(|(name, range)| (name.to_string(), range.to_string())).collect()
}

impl PackageSpec {
    /// Assemble the specification for the project at `path`.
    ///
    /// Manifest fields are carried over unchanged; the main module loads
    /// every external, in table order.
    pub fn assemble(
        path: impl Into<PathBuf>,
        manifest: &PackageManifest,
        generation: Generation,
    ) -> Self {
        let externals = table(generation.externals());
        let load_dependencies = externals.keys().cloned().collect();

        Self {
            path: path.into(),
            package_type: PackageType::Application,
            name: manifest.name.clone(),
            version: manifest.version.clone(),
            short_description: manifest.description.clone(),
            author: manifest.author.clone(),
            dependencies: Dependencies {
                run_time: RunTimeDependencies {
                    externals,
                    included_in_bundle: table(generation.included_in_bundle()),
                },
                dev_time: table(generation.dev_time()),
            },
            user_guide: true,
            dev_server: DevServer { port: DEV_SERVER_PORT },
            bundles: Bundles {
                main_module: MainModule {
                    entry_file: MAIN_ENTRY_FILE.to_string(),
                    load_dependencies,
                },
            },
        }
    }

    /// Check that every bundle load dependency is declared as an external.
    pub fn validate(&self) -> Result<(), AppError> {
        let externals = &self.dependencies.run_time.externals;
        if let Some(missing) = self
            .bundles
            .main_module
            .load_dependencies
            .iter()
            .find(|name| !externals.contains_key(name.as_str()))
        {
            return Err(AppError::InvalidPackageSpec(format!(
                "load dependency '{}' is not declared in externals",
                missing
            )));
        }
        Ok(())
    }
}
