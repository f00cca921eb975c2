//! Materialize command implementation.

use std::path::PathBuf;

use crate::domain::{AppError, Generation};

pub fn run_materialize(
    path: Option<PathBuf>,
    generation: Option<Generation>,
) -> Result<(), AppError> {
    let path = super::resolve_path(path)?;
    let outcome = crate::app::api::materialize_at(path, generation)?;

    println!(
        "✅ Materialized template (generation {}): {} file(s)",
        outcome.generation,
        outcome.files.len()
    );
    for file in &outcome.files {
        println!("  • {} ({})", file.path, &file.sha256[..12]);
    }
    Ok(())
}
