//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use classgen_core::{
    application::{ApplicationError, ports::Filesystem},
    error::ClassgenResult,
};

/// In-memory filesystem for testing.
///
/// Clones share the same storage, so a test can hand one clone to a
/// service and inspect the other afterwards.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
    unreadable: HashSet<PathBuf>,
    writes: usize,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Seed a file, creating its parent directories.
    pub fn with_file(self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        let path = path.into();
        {
            let mut inner = self.inner.write().unwrap();
            if let Some(parent) = path.parent() {
                insert_ancestors(&mut inner.directories, parent);
            }
            inner.files.insert(path, content.into());
        }
        self
    }

    /// Make `check_readable` fail for `path`.
    pub fn deny_read(self, path: impl Into<PathBuf>) -> Self {
        self.inner.write().unwrap().unreadable.insert(path.into());
        self
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// List all files.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        inner.files.keys().cloned().collect()
    }

    /// Number of mutating calls (directory creation, copies, writes).
    pub fn write_count(&self) -> usize {
        self.inner.read().unwrap().writes
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

fn insert_ancestors(directories: &mut HashSet<PathBuf>, path: &Path) {
    let mut current = PathBuf::new();
    for component in path.components() {
        current.push(component);
        directories.insert(current.clone());
    }
}

fn lock_error() -> classgen_core::error::ClassgenError {
    classgen_core::error::ClassgenError::Internal {
        message: "memory filesystem lock poisoned".into(),
    }
}

impl Filesystem for MemoryFilesystem {
    fn check_readable(&self, path: &Path) -> ClassgenResult<()> {
        let inner = self.inner.read().map_err(|_| lock_error())?;
        if inner.unreadable.contains(path) || !inner.directories.contains(path) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "permission denied".into(),
            }
            .into());
        }
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> ClassgenResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_error())?;
        insert_ancestors(&mut inner.directories, path);
        inner.writes += 1;
        Ok(())
    }

    fn copy_file(&self, from: &Path, to: &Path) -> ClassgenResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_error())?;

        let copy_failed = |reason: &str| ApplicationError::CopyFailed {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
            reason: reason.into(),
        };

        let content = inner
            .files
            .get(from)
            .cloned()
            .ok_or_else(|| copy_failed("source does not exist"))?;

        if let Some(parent) = to.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(copy_failed("parent directory does not exist").into());
            }
        }

        inner.files.insert(to.to_path_buf(), content);
        inner.writes += 1;
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> ClassgenResult<String> {
        let inner = self.inner.read().map_err(|_| lock_error())?;
        let content = inner.files.get(path).cloned().ok_or_else(|| {
            ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "file does not exist".into(),
            }
        })?;
        Ok(content)
    }

    fn write_file(&self, path: &Path, content: &str) -> ClassgenResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_error())?;

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        inner.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_file_makes_parent_readable() {
        let fs = MemoryFilesystem::new().with_file("templates/header", "x");
        assert!(fs.check_readable(Path::new("templates")).is_ok());
        assert_eq!(fs.write_count(), 0);
    }

    #[test]
    fn denied_directory_is_unreadable() {
        let fs = MemoryFilesystem::new()
            .with_file("templates/header", "x")
            .deny_read("templates");
        assert!(fs.check_readable(Path::new("templates")).is_err());
    }

    #[test]
    fn copy_requires_parent_directory() {
        let fs = MemoryFilesystem::new().with_file("t/header", "x");
        assert!(fs.copy_file(Path::new("t/header"), Path::new("include/Foo.h")).is_err());
        fs.create_dir_all(Path::new("include")).unwrap();
        fs.copy_file(Path::new("t/header"), Path::new("include/Foo.h"))
            .unwrap();
        assert_eq!(fs.read_file(Path::new("include/Foo.h")).as_deref(), Some("x"));
    }

    #[test]
    fn clones_share_storage() {
        let fs = MemoryFilesystem::new();
        let view = fs.clone();
        fs.create_dir_all(Path::new("a")).unwrap();
        fs.write_file(Path::new("a/b"), "c").unwrap();
        assert_eq!(view.list_files(), vec![PathBuf::from("a/b")]);
    }
}
