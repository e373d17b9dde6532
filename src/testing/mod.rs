pub mod ports;

#[allow(unused_imports)]
pub use ports::{MemoryFilesystem, RecordingInstaller, ScriptedPrompter, TestFiles};
