use crate::ports::file_system::FileSystem;
use std::path::Path;

/// Checks existence against the real filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFileSystem;

impl FileSystem for LocalFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}
