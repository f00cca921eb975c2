//! Project-level setup configuration (`template.toml`).

use serde::Deserialize;

use crate::domain::{AppError, Generation};

/// Optional configuration file, relative to the project root.
pub const CONFIG_FILE: &str = "template.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SetupConfig {
    #[serde(default)]
    pub template: TemplateSection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TemplateSection {
    /// Dependency-table generation used when none is given on the command line.
    pub generation: Option<Generation>,
}

impl SetupConfig {
    /// The generation to materialize: explicit choice, then config, then default.
    pub fn resolve_generation(&self, explicit: Option<Generation>) -> Generation {
        explicit.or(self.template.generation).unwrap_or_default()
    }
}

/// Parse configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<SetupConfig, AppError> {
    let config: SetupConfig = toml::from_str(content)?;
    Ok(config)
}
