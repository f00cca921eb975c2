//! CLI Adapter.

mod describe;
mod materialize;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::{AppError, Generation};

#[derive(Parser)]
#[command(name = "vsf-setup")]
#[command(version)]
#[command(
    about = "Scaffold the vs-flow-notebook package and describe how to launch it",
    long_about = None
)]
struct Cli {
    /// Print diagnostic logs to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Regenerate scaffolding and overwrite the templated project files
    #[clap(visible_alias = "m")]
    Materialize {
        /// Project directory (defaults to current directory)
        #[arg(short, long)]
        path: Option<PathBuf>,
        /// Dependency-table generation (a, b); overrides template.toml
        #[arg(short, long)]
        generation: Option<Generation>,
    },
    /// Print the packaging pipeline configuration as JSON
    #[clap(visible_alias = "d")]
    Describe {
        /// Project directory (defaults to current directory)
        #[arg(short, long)]
        path: Option<PathBuf>,
        /// Print on a single line
        #[arg(long)]
        compact: bool,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    super::logging::init(cli.verbose);

    let result: Result<(), AppError> = match cli.command {
        Commands::Materialize { path, generation } => {
            materialize::run_materialize(path, generation)
        }
        Commands::Describe { path, compact } => describe::run_describe(path, compact),
    };

    if let Err(e) = result {
        tracing::error!(kind = ?e.kind(), "command failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn resolve_path(path: Option<PathBuf>) -> Result<PathBuf, AppError> {
    match path {
        Some(p) => Ok(p),
        None => Ok(std::env::current_dir()?),
    }
}
