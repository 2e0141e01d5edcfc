//! VFS Error Types

use std::path::Path;
use thiserror::Error;

/// Result type for VFS operations
pub type VfsResult<T> = Result<T, VfsError>;

/// Error type for VFS operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VfsError {
    #[error("path not found: {path}")]
    NotFound { path: String },

    #[error("permission denied: {path}")]
    PermissionDenied { path: String },

    #[error("not a regular file: {path}")]
    NotAFile { path: String },

    #[error("file is not valid UTF-8: {path}")]
    InvalidUtf8 { path: String },

    #[error("I/O error on {path}: {message}")]
    Io { path: String, message: String },
}

impl VfsError {
    /// Map an `std::io::Error` for `path` onto the typed variants.
    pub fn from_io(path: &Path, err: std::io::Error) -> Self {
        let path = path.to_string_lossy().into_owned();
        match err.kind() {
            std::io::ErrorKind::NotFound => VfsError::NotFound { path },
            std::io::ErrorKind::PermissionDenied => VfsError::PermissionDenied { path },
            _ => VfsError::Io {
                path,
                message: err.to_string(),
            },
        }
    }

    /// The path the failed operation referred to.
    pub fn path(&self) -> &str {
        match self {
            VfsError::NotFound { path }
            | VfsError::PermissionDenied { path }
            | VfsError::NotAFile { path }
            | VfsError::InvalidUtf8 { path }
            | VfsError::Io { path, .. } => path,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, VfsError::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_from_io_kinds() {
        let path = Path::new("/spec.txt");
        let err = VfsError::from_io(path, io::Error::from(io::ErrorKind::NotFound));
        assert!(err.is_not_found());
        assert_eq!(err.path(), "/spec.txt");

        let err = VfsError::from_io(path, io::Error::from(io::ErrorKind::PermissionDenied));
        assert_eq!(
            err,
            VfsError::PermissionDenied {
                path: "/spec.txt".to_string()
            }
        );

        let err = VfsError::from_io(path, io::Error::new(io::ErrorKind::Other, "disk on fire"));
        assert!(matches!(err, VfsError::Io { ref message, .. } if message.contains("disk on fire")));
    }

    #[test]
    fn test_display() {
        let err = VfsError::NotFound {
            path: "file.txt".to_string(),
        };
        assert_eq!(err.to_string(), "path not found: file.txt");
    }
}
