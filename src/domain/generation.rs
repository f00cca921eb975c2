//! Dependency-table generations and the template files each one materializes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// A `(package name, version range)` entry of a dependency table.
pub type DependencyEntry = (&'static str, &'static str);

const GENERATION_A_EXTERNALS: &[DependencyEntry] = &[
    ("@youwol/vsf-core", "^0.2.3"),
    ("@youwol/vsf-canvas", "^0.2.2"),
    ("rxjs", "^6.5.5"),
    ("@youwol/logging", "^0.1.1"),
    ("@youwol/http-clients", "^2.0.5"),
    ("@youwol/http-primitives", "^0.1.2"),
    ("@youwol/flux-view", "^1.1.0"),
    ("@youwol/cdn-client", "^2.0.6"),
    ("@youwol/fv-tabs", "^0.2.1"),
    ("@youwol/os-top-banner", "^0.1.1"),
    ("@youwol/fv-code-mirror-editors", "^0.2.2"),
    ("@youwol/fv-tree", "^0.2.3"),
    ("three", "^0.152.0"),
    ("marked", "^4.2.3"),
];

const GENERATION_B_EXTERNALS: &[DependencyEntry] = &[
    ("@youwol/vsf-core", "^0.3.1"),
    ("@youwol/vsf-canvas", "^0.3.0"),
    ("rxjs", "^7.5.6"),
    ("@youwol/logging", "^0.2.0"),
    ("@youwol/http-clients", "^3.0.0"),
    ("@youwol/http-primitives", "^0.2.0"),
    ("@youwol/rx-vdom", "^1.0.1"),
    ("@youwol/webpm-client", "^3.0.0"),
    ("@youwol/rx-tab-views", "^0.3.0"),
    ("@youwol/os-top-banner", "^0.2.0"),
    ("@youwol/rx-code-mirror-editors", "^0.5.0"),
    ("@youwol/rx-tree-views", "^0.3.0"),
    ("three", "^0.152.0"),
    ("marked", "^4.2.3"),
];

const INCLUDED_IN_BUNDLE: &[DependencyEntry] = &[("d3-dag", "0.8.2"), ("client-zip", "2.3.0")];

// `@types/lz-string` is needed by the documentation step.
const GENERATION_B_DEV_TIME: &[DependencyEntry] = &[("@types/lz-string", "^1.5.0")];

/// Directory (relative to the project root) where scaffolding is generated.
pub const TEMPLATE_DIR: &str = ".template";

/// Auto-generated source copied from `.template/src` into `src`.
pub const CORE_SOURCE_FILE: &str = "src/auto-generated.ts";

const GENERATION_A_TEMPLATE_FILES: &[&str] =
    &["README.md", "package.json", "jest.config.ts", "tsconfig.json", "webpack.config.ts"];

// tsconfig.json is left out: it needs a reference to rx-vdom-config.ts that
// the template does not provide yet.
const GENERATION_B_TEMPLATE_FILES: &[&str] =
    &["README.md", "package.json", "jest.config.ts", "webpack.config.ts"];

/// Named configuration of the dependency table and file-copy list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Generation {
    /// Older UI toolkit (`flux-view`, `fv-*`, `cdn-client`).
    A,
    /// Newer UI toolkit (`rx-vdom`, `rx-*`, `webpm-client`).
    #[default]
    B,
}

impl Generation {
    pub fn label(self) -> &'static str {
        match self {
            Generation::A => "a",
            Generation::B => "b",
        }
    }

    /// External (CDN-loaded) run-time dependencies, in declaration order.
    pub fn externals(self) -> &'static [DependencyEntry] {
        match self {
            Generation::A => GENERATION_A_EXTERNALS,
            Generation::B => GENERATION_B_EXTERNALS,
        }
    }

    /// Run-time dependencies bundled into the application.
    pub fn included_in_bundle(self) -> &'static [DependencyEntry] {
        INCLUDED_IN_BUNDLE
    }

    /// Dependencies needed only at development time.
    pub fn dev_time(self) -> &'static [DependencyEntry] {
        match self {
            Generation::A => &[],
            Generation::B => GENERATION_B_DEV_TIME,
        }
    }

    /// Files overwritten by materialization for this generation.
    pub fn template_files(self) -> TemplateFileSet {
        let listed = match self {
            Generation::A => GENERATION_A_TEMPLATE_FILES,
            Generation::B => GENERATION_B_TEMPLATE_FILES,
        };
        TemplateFileSet::new(CORE_SOURCE_FILE, listed)
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Generation {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a" => Ok(Generation::A),
            "b" => Ok(Generation::B),
            _ => Err(AppError::InvalidGeneration(s.to_string())),
        }
    }
}

/// One file to overwrite: source under the template root, destination under the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateCopy {
    pub source: String,
    pub destination: String,
}

/// Ordered list of template files to copy, core source first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFileSet {
    core: TemplateCopy,
    listed: Vec<TemplateCopy>,
}

impl TemplateFileSet {
    fn new(core: &str, listed: &[&str]) -> Self {
        Self { core: Self::entry(core), listed: listed.iter().copied().map(Self::entry).collect() }
    }

    fn entry(relative: &str) -> TemplateCopy {
        TemplateCopy {
            source: format!("{}/{}", TEMPLATE_DIR, relative),
            destination: relative.to_string(),
        }
    }

    /// The auto-generated source file copy.
    pub fn core(&self) -> &TemplateCopy {
        &self.core
    }

    /// Top-level template files, in copy order.
    pub fn listed(&self) -> &[TemplateCopy] {
        &self.listed
    }

    /// Whether `destination` is written by this set.
    #[cfg(test)]
    pub fn writes(&self, destination: &str) -> bool {
        self.core.destination == destination
            || self.listed.iter().any(|copy| copy.destination == destination)
    }
}
