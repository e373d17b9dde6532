mod memory_filesystem;
mod recording_installer;
mod scripted_prompter;
mod test_files;

pub use self::memory_filesystem::MemoryFilesystem;
pub use self::recording_installer::RecordingInstaller;
pub use self::scripted_prompter::ScriptedPrompter;
pub use self::test_files::TestFiles;
