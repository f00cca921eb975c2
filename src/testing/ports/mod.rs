mod generator_stub;
mod pipeline_stub;
mod test_files;
mod test_project_fs;

pub use self::generator_stub::FakeGenerator;
pub use self::pipeline_stub::RecordingPipeline;
pub use self::test_files::TestFiles;
pub use self::test_project_fs::MockProjectFs;
