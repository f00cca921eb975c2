pub mod describe;
pub mod materialize;
