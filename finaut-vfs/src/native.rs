//! Native file system implementation

use crate::error::{VfsError, VfsResult};
use crate::VirtualFileSystem;
use std::path::{Path, PathBuf};

/// A native OS file system implementation.
///
/// Wraps `std::fs`. Relative paths are resolved against the optional base
/// directory, otherwise against the process working directory.
#[derive(Debug, Clone, Default)]
pub struct NativeFileSystem {
    base: Option<PathBuf>,
}

impl NativeFileSystem {
    /// Create a new native file system.
    pub fn new() -> Self {
        Self { base: None }
    }

    /// Create a native file system rooted at `base`.
    pub fn with_base(base: impl Into<PathBuf>) -> Self {
        Self {
            base: Some(base.into()),
        }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        match &self.base {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }
}

impl VirtualFileSystem for NativeFileSystem {
    fn read_file(&self, path: &Path) -> VfsResult<Vec<u8>> {
        let full = self.resolve(path);
        std::fs::read(&full).map_err(|e| VfsError::from_io(path, e))
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.resolve(path).is_dir()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("finaut_vfs_{}_{}", name, std::process::id()))
    }

    #[test]
    fn test_native_read() {
        let fs = NativeFileSystem::new();
        let path = temp_path("read");
        std::fs::write(&path, b"q0\n0\nq0\nq0\n").unwrap();

        assert!(!fs.is_dir(&path));
        assert_eq!(fs.read_to_string(&path).unwrap(), "q0\n0\nq0\nq0\n");

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_native_read_nonexistent() {
        let fs = NativeFileSystem::new();
        let path = temp_path("nonexistent");
        let _ = std::fs::remove_file(&path);

        let err = fs.read_file(&path).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_native_directory_is_not_a_file() {
        let fs = NativeFileSystem::new();
        let dir = temp_path("dir");
        let _ = std::fs::remove_dir(&dir);
        std::fs::create_dir(&dir).unwrap();

        assert!(fs.is_dir(&dir));
        assert!(matches!(
            fs.read_to_string(&dir),
            Err(VfsError::NotAFile { .. })
        ));

        std::fs::remove_dir(&dir).unwrap();
    }

    #[test]
    fn test_native_invalid_utf8() {
        let fs = NativeFileSystem::new();
        let path = temp_path("binary");
        std::fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

        assert!(matches!(
            fs.read_to_string(&path),
            Err(VfsError::InvalidUtf8 { .. })
        ));

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_native_with_base() {
        let dir = temp_path("base");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir(&dir).unwrap();
        std::fs::write(dir.join("file.txt"), b"spec").unwrap();

        let fs = NativeFileSystem::with_base(dir.clone());
        assert_eq!(fs.read_file(Path::new("file.txt")).unwrap(), b"spec");
        assert!(fs.is_dir(Path::new(".")));

        let err = fs.read_file(Path::new("missing.txt")).unwrap_err();
        assert_eq!(err.path(), "missing.txt");

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
