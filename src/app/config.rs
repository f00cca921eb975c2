//! Setup configuration loading from the project root.

use crate::domain::config::{self, CONFIG_FILE};
use crate::domain::{AppError, SetupConfig};
use crate::ports::ProjectFilesystem;

/// Load `template.toml`, falling back to defaults when the file is absent.
pub fn load_config<F: ProjectFilesystem>(files: &F) -> Result<SetupConfig, AppError> {
    if !files.file_exists(CONFIG_FILE) {
        tracing::debug!("no {} found, using defaults", CONFIG_FILE);
        return Ok(SetupConfig::default());
    }

    let content = files.read_file(CONFIG_FILE)?;
    config::parse_config_content(&content)
}
