//! Finaut Virtual File System
//!
//! Abstracts where automaton specifications are read from, so the loader can
//! be driven by the real disk or by an in-memory tree in tests.
//!
//! # Usage
//! ```rust,ignore
//! use finaut_vfs::{MemoryFileSystem, VirtualFileSystem};
//! use std::path::Path;
//!
//! let fs = MemoryFileSystem::with_files([("/file.txt", "q0\n0\nq0\nq0\n")]);
//! let text = fs.read_to_string(Path::new("/file.txt")).unwrap();
//! ```

mod error;
mod memory;
mod native;
mod r#trait;

pub use error::{VfsError, VfsResult};
pub use memory::MemoryFileSystem;
pub use native::NativeFileSystem;
pub use r#trait::VirtualFileSystem;

