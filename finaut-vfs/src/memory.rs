//! In-memory file system implementation

use crate::error::{VfsError, VfsResult};
use crate::VirtualFileSystem;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

/// An in-memory file system implementation.
///
/// Files are fixed at construction and shared between clones.
/// Directories are implicit: a path is a directory if some file lives below it.
///
/// # Example
/// ```
/// use finaut_vfs::{MemoryFileSystem, VirtualFileSystem};
/// use std::path::Path;
///
/// let fs = MemoryFileSystem::with_files([("/file.txt", "q0")]);
/// assert_eq!(fs.read_to_string(Path::new("/file.txt")).unwrap(), "q0");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryFileSystem {
    files: Arc<BTreeMap<String, Vec<u8>>>,
}

impl MemoryFileSystem {
    /// Create a new empty memory file system.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a memory file system pre-populated with `(path, content)` pairs.
    pub fn with_files<I, S, C>(files: I) -> Self
    where
        I: IntoIterator<Item = (S, C)>,
        S: AsRef<str>,
        C: Into<Vec<u8>>,
    {
        let map = files
            .into_iter()
            .map(|(path, content)| (normalize(Path::new(path.as_ref())), content.into()))
            .collect();
        Self {
            files: Arc::new(map),
        }
    }
}

/// Forward slashes only, no trailing slash.
fn normalize(path: &Path) -> String {
    let normalized = path.to_string_lossy().replace('\\', "/");
    match normalized.trim_end_matches('/') {
        "" if normalized.starts_with('/') => "/".to_string(),
        trimmed => trimmed.to_string(),
    }
}

impl VirtualFileSystem for MemoryFileSystem {
    fn read_file(&self, path: &Path) -> VfsResult<Vec<u8>> {
        let normalized = normalize(path);
        self.files
            .get(&normalized)
            .cloned()
            .ok_or(VfsError::NotFound { path: normalized })
    }

    fn is_dir(&self, path: &Path) -> bool {
        let normalized = normalize(path);
        let prefix = if normalized.ends_with('/') {
            normalized
        } else {
            format!("{normalized}/")
        };
        self.files
            .range(prefix.clone()..)
            .next()
            .is_some_and(|(key, _)| key.starts_with(&prefix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_new_fs_is_empty() {
        let fs = MemoryFileSystem::new();
        assert!(fs.read_file(Path::new("/file.txt")).is_err());
        assert!(!fs.is_dir(Path::new("/")));
    }

    #[test]
    fn test_read_nonexistent() {
        let fs = MemoryFileSystem::with_files([("/file.txt", "q0")]);
        let err = fs.read_file(Path::new("/missing.txt")).unwrap_err();
        assert_eq!(
            err,
            VfsError::NotFound {
                path: "/missing.txt".to_string()
            }
        );
    }

    #[test]
    fn test_with_files_and_backslashes() {
        let fs = MemoryFileSystem::with_files([
            ("/specs/a.txt", "a"),
            ("\\specs\\b.txt", "b"),
        ]);
        assert_eq!(fs.read_to_string(Path::new("/specs/a.txt")).unwrap(), "a");
        assert_eq!(fs.read_to_string(Path::new("/specs/b.txt")).unwrap(), "b");
    }

    #[test]
    fn test_implicit_directories() {
        let fs = MemoryFileSystem::with_files([("/specs/expr/file.txt", "x")]);
        assert!(fs.is_dir(Path::new("/")));
        assert!(fs.is_dir(Path::new("/specs")));
        assert!(fs.is_dir(Path::new("/specs/expr/")));
        assert!(!fs.is_dir(Path::new("/spec")));
        assert!(!fs.is_dir(Path::new("/specs/expr/file.txt")));

        assert!(matches!(
            fs.read_to_string(Path::new("/specs")),
            Err(VfsError::NotAFile { .. })
        ));
    }

    #[test]
    fn test_invalid_utf8() {
        let fs = MemoryFileSystem::with_files([("/bad.txt", vec![0xc3u8, 0x28])]);
        assert!(matches!(
            fs.read_to_string(Path::new("/bad.txt")),
            Err(VfsError::InvalidUtf8 { .. })
        ));
    }

    #[test]
    fn test_concurrent_reads() {
        let fs = MemoryFileSystem::with_files([("/file.txt", "concurrent")]);
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let fs = fs.clone();
                thread::spawn(move || {
                    for _ in 0..100 {
                        let text = fs.read_to_string(Path::new("/file.txt")).unwrap();
                        assert_eq!(text, "concurrent");
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
    }
}
