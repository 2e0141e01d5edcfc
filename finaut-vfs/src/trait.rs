//! VirtualFileSystem trait definition

use crate::error::{VfsError, VfsResult};
use std::path::Path;

/// Virtual File System trait
///
/// Provides a unified interface for file operations, decoupling the loader
/// from a specific file system implementation.
///
/// # Implementations
/// - `MemoryFileSystem`: In-memory file system
/// - `NativeFileSystem`: Native OS file system
pub trait VirtualFileSystem: Send + Sync {
    /// Read file contents as bytes.
    fn read_file(&self, path: &Path) -> VfsResult<Vec<u8>>;

    /// Check if path exists and is a directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Read a file as UTF-8 text.
    ///
    /// Fails with `NotAFile` for directories and `InvalidUtf8` when the
    /// content cannot be decoded.
    fn read_to_string(&self, path: &Path) -> VfsResult<String> {
        if self.is_dir(path) {
            return Err(VfsError::NotAFile {
                path: path.to_string_lossy().into_owned(),
            });
        }
        let bytes = self.read_file(path)?;
        String::from_utf8(bytes).map_err(|_| VfsError::InvalidUtf8 {
            path: path.to_string_lossy().into_owned(),
        })
    }
}
