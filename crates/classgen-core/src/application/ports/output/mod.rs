//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from the outside world.
//! The `classgen-adapters` crate provides the filesystem implementations;
//! the CLI provides the terminal-facing ones.

use std::path::Path;

use crate::application::questions::{Answer, QuestionSpec};
use crate::error::ClassgenResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `classgen_adapters::filesystem::LocalFilesystem` (production)
/// - `classgen_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Fail unless `path` is a directory the process can read.
    fn check_readable(&self, path: &Path) -> ClassgenResult<()>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> ClassgenResult<()>;

    /// Copy `from` to `to`, overwriting `to` if it exists.
    fn copy_file(&self, from: &Path, to: &Path) -> ClassgenResult<()>;

    /// Read a whole file as UTF-8.
    fn read_to_string(&self, path: &Path) -> ClassgenResult<String>;

    /// Write content to a file.
    fn write_file(&self, path: &Path, content: &str) -> ClassgenResult<()>;
}

/// Port for asking the operator a single question.
///
/// Blocks until the operator answers; there is no timeout. The answer must
/// have the shape of the question (`Text` for free text, `Confirm` for
/// yes/no, `Choice` for lists). Validation is done by the caller, so an
/// implementation may return whatever the operator typed.
#[cfg_attr(test, mockall::automock)]
pub trait Prompter {
    fn ask(&self, question: &QuestionSpec) -> ClassgenResult<Answer>;
}

/// Stateless text decoration, one method per semantic role.
pub trait Palette {
    fn error(&self, text: &str) -> String;
    fn success(&self, text: &str) -> String;
    fn emphasis(&self, text: &str) -> String;
    fn inverse(&self, text: &str) -> String;
}

/// A [`Palette`] that returns text unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainPalette;

impl Palette for PlainPalette {
    fn error(&self, text: &str) -> String {
        text.to_owned()
    }

    fn success(&self, text: &str) -> String {
        text.to_owned()
    }

    fn emphasis(&self, text: &str) -> String {
        text.to_owned()
    }

    fn inverse(&self, text: &str) -> String {
        text.to_owned()
    }
}

/// Result of a scaffold task that ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Done,
    Failed,
}

/// Sink for user-facing progress lines.
pub trait Reporter {
    /// Plain informational line.
    fn info(&self, message: &str);

    /// Labeled error line. Never suppressed.
    fn error(&self, message: &str);

    /// A scaffold task is about to run.
    fn task_started(&self, title: &str);

    /// A scaffold task has finished.
    fn task_finished(&self, title: &str, status: StepStatus);
}
