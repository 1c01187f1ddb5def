//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use coopkit_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{CoopError, CoopResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> CoopResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> CoopResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> CoopError {
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
    fn writes_into_nested_directories() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("renders/cedar/coop.svg");
        let fs = LocalFilesystem::new();

        assert!(!fs.exists(&target));
        fs.create_dir_all(target.parent().unwrap()).unwrap();
        fs.write_file(&target, "<svg/>").unwrap();

        assert!(fs.exists(&target));
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "<svg/>");
    }

    #[test]
    fn missing_parent_maps_to_filesystem_error() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("nope/coop.svg");

        let err = LocalFilesystem::new().write_file(&target, "x").unwrap_err();

        match err {
            CoopError::Application(ApplicationError::FilesystemError { path, reason }) => {
                assert_eq!(path, target);
                assert!(reason.starts_with("Failed to write file"));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }
}
