//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use coopkit_core::{
    application::{ApplicationError, ports::Filesystem},
    error::CoopResult,
};

/// In-memory filesystem for testing.
///
/// Clones share the same storage, so a test can keep one handle and give
/// another to a service.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// List all files.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> CoopResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> CoopResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?;

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
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use coopkit_core::error::CoopError;

    use super::*;

    #[test]
    fn clones_share_storage() {
        let fs = MemoryFilesystem::new();
        let handle = fs.clone();

        fs.create_dir_all(Path::new("out/renders")).unwrap();
        fs.write_file(Path::new("out/renders/coop.svg"), "<svg/>")
            .unwrap();

        assert!(handle.exists(Path::new("out")));
        assert_eq!(
            handle.read_file(Path::new("out/renders/coop.svg")).as_deref(),
            Some("<svg/>")
        );
        assert_eq!(handle.list_files().len(), 1);
    }

    #[test]
    fn bare_file_names_need_no_directory() {
        let fs = MemoryFilesystem::new();
        fs.write_file(Path::new("coop.json"), "{}").unwrap();
        assert!(fs.exists(Path::new("coop.json")));
    }

    #[test]
    fn write_without_parent_fails() {
        let fs = MemoryFilesystem::new();
        let err = fs.write_file(Path::new("missing/coop.svg"), "x").unwrap_err();
        assert!(matches!(
            err,
            CoopError::Application(ApplicationError::FilesystemError { .. })
        ));
    }

    #[test]
    fn poisoned_lock_is_reported() {
        let fs = MemoryFilesystem::new();
        let poisoner = fs.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.inner.write().unwrap();
            panic!("poison the lock");
        })
        .join();

        let err = fs.create_dir_all(Path::new("out")).unwrap_err();
        assert_eq!(err, CoopError::Application(ApplicationError::LockPoisoned));
        assert!(!fs.exists(Path::new("out")));
    }
}
