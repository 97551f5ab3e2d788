//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use tracing::trace;

use classgen_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{ClassgenError, ClassgenResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn check_readable(&self, path: &Path) -> ClassgenResult<()> {
        let metadata = std::fs::metadata(path).map_err(|e| map_io_error(path, e, "stat"))?;
        if !metadata.is_dir() {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "not a directory".into(),
            }
            .into());
        }
        // Listing proves read permission; metadata alone does not.
        std::fs::read_dir(path)
            .map(drop)
            .map_err(|e| map_io_error(path, e, "read directory"))
    }

    fn create_dir_all(&self, path: &Path) -> ClassgenResult<()> {
        trace!(path = %path.display(), "create_dir_all");
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn copy_file(&self, from: &Path, to: &Path) -> ClassgenResult<()> {
        trace!(from = %from.display(), to = %to.display(), "copy_file");
        std::fs::copy(from, to).map(drop).map_err(|e| {
            ClassgenError::from(ApplicationError::CopyFailed {
                from: from.to_path_buf(),
                to: to.to_path_buf(),
                reason: e.to_string(),
            })
        })
    }

    fn read_to_string(&self, path: &Path) -> ClassgenResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn write_file(&self, path: &Path, content: &str) -> ClassgenResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> ClassgenError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_then_rewrite_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let template = dir.path().join("header");
        std::fs::write(&template, "class %className%;").unwrap();

        let target_dir = dir.path().join("include/nested");
        fs.create_dir_all(&target_dir).unwrap();
        let target = target_dir.join("Foo.h");
        fs.copy_file(&template, &target).unwrap();
        let content = fs.read_to_string(&target).unwrap();
        fs.write_file(&target, &content.replace("%className%", "Foo"))
            .unwrap();

        assert_eq!(std::fs::read_to_string(&target).unwrap(), "class Foo;");
        assert!(target.is_file());
    }

    #[test]
    fn missing_directory_is_not_readable() {
        let dir = tempfile::tempdir().unwrap();
        assert!(LocalFilesystem::new()
            .check_readable(&dir.path().join("nope"))
            .is_err());
        assert!(LocalFilesystem::new().check_readable(dir.path()).is_ok());
    }

    #[test]
    fn file_is_not_a_readable_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("header");
        std::fs::write(&file, "").unwrap();
        assert!(LocalFilesystem::new().check_readable(&file).is_err());
    }

    #[test]
    fn copy_from_missing_template_is_copy_failure() {
        let dir = tempfile::tempdir().unwrap();
        let err = LocalFilesystem::new()
            .copy_file(&dir.path().join("missing"), &dir.path().join("out"))
            .unwrap_err();
        assert!(matches!(
            err,
            ClassgenError::Application(ApplicationError::CopyFailed { .. })
        ));
    }
}
