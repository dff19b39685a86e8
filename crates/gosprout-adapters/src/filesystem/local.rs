//! Local filesystem adapter using std::fs.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use gosprout_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{GosproutError, GosproutResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> GosproutResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn create_new_file(&self, path: &Path, content: &str) -> GosproutResult<()> {
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map_err(|e| map_io_error(path, e, "create file"))?;

        file.write_all(content.as_bytes())
            .map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        // Dangling symlinks count as taken.
        path.symlink_metadata().is_ok()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> GosproutError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn create_new_file_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Makefile");
        let fs = LocalFilesystem::new();

        fs.create_new_file(&path, "first").unwrap();
        let err = fs.create_new_file(&path, "second").unwrap_err();

        assert!(err.to_string().contains("Failed to create file"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "first");
    }

    #[test]
    fn create_dir_all_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a/b/c");
        let fs = LocalFilesystem::new();

        fs.create_dir_all(&path).unwrap();
        fs.create_dir_all(&path).unwrap();
        assert!(fs.exists(&path));
    }

    #[cfg(unix)]
    #[test]
    fn dangling_symlink_exists() {
        let dir = TempDir::new().unwrap();
        let link = dir.path().join("link");
        std::os::unix::fs::symlink(dir.path().join("missing"), &link).unwrap();

        assert!(LocalFilesystem::new().exists(&link));
    }
}
