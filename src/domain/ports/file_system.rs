//! FileSystem port - abstraction over the file I/O the pipeline does
//!
//! Read errors carry the std `io::ErrorKind`, so callers can tell a missing
//! artifact apart from any other failure.

use std::io;
use std::path::Path;

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O with atomic writes
/// - `MemoryFs` - in-memory, for tests
pub trait FileSystem {
    /// Read a file as raw bytes
    fn read_bytes(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Read a file as UTF-8 text
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Replace `path` with `content` so readers never see a partial file
    fn write_atomic(&self, path: &Path, content: &str) -> io::Result<()>;

    /// Check if a file exists
    fn exists(&self, path: &Path) -> bool;
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn read_bytes(&self, path: &Path) -> io::Result<Vec<u8>> {
        (**self).read_bytes(path)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        (**self).read_to_string(path)
    }

    fn write_atomic(&self, path: &Path, content: &str) -> io::Result<()> {
        (**self).write_atomic(path, content)
    }

    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }
}
