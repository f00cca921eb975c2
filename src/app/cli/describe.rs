//! Describe command implementation.

use std::path::PathBuf;

use crate::domain::AppError;

pub fn run_describe(path: Option<PathBuf>, compact: bool) -> Result<(), AppError> {
    let path = super::resolve_path(path)?;
    let rendered = crate::app::api::describe_at(path, !compact)?;
    println!("{}", rendered);
    Ok(())
}
