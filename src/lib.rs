//! vsf-setup: scaffold the vs-flow-notebook package from its template and
//! describe how the host shell presents and launches it.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{describe_at, materialize, materialize_at};
pub use domain::{AppDescriptor, AppError, Generation, MaterializeOutcome, PackageSpec};
