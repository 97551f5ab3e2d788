//! Infrastructure adapters for classgen.
//!
//! This crate implements the ports defined in `classgen-core::application::ports`
//! that do not need a terminal: the filesystem, plus a scripted prompter
//! and a recording reporter for tests and non-interactive runs.

pub mod filesystem;
pub mod prompter;
pub mod reporter;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use prompter::ScriptedPrompter;
pub use reporter::{RecordedLine, RecordingReporter};
