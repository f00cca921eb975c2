pub mod ports;

#[allow(unused_imports)]
pub use ports::FakeGenerator;
#[allow(unused_imports)]
pub use ports::MockProjectFs;
#[allow(unused_imports)]
pub use ports::RecordingPipeline;
#[allow(unused_imports)]
pub use ports::TestFiles;
